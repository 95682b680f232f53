//! State machine definition
//!
//! Two modes alternate on a fixed interval: the stored images are shown
//! in order, and showing the last one hands over to the fractal run.
//! After the last fractal the cycle restarts at the first image within
//! the same tick.

use crate::config::{FRACTAL_COUNT, IMAGE_COUNT, TRANSITION_INTERVAL_MS};

use super::steps::{RenderStep, Steps};

/// Display modes
///
/// Each mode carries the only index that is meaningful in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// A stored image is on the panel
    ShowingImages {
        /// Image currently shown
        image: usize,
    },
    /// Fractal run in progress
    ShowingFractals {
        /// Preset rendered by the next transition
        fractal: usize,
    },
}

/// Complete state of the slideshow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    mode: Mode,
    /// Free-running millisecond counter value at the last transition
    last_transition_ms: u32,
}

/// Result of feeding a timestamp to the machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// State to keep for the next tick
    pub state: DisplayState,
    /// Render work, in order; empty when nothing is due
    pub steps: Steps,
}

impl Tick {
    fn idle(state: DisplayState) -> Self {
        Self {
            state,
            steps: Steps::new(),
        }
    }

    fn with_steps(state: DisplayState, items: &[RenderStep]) -> Self {
        let mut steps = Steps::new();
        for &step in items {
            // Capacity covers the longest transition
            let _ = steps.push(step);
        }
        Self { state, steps }
    }

    /// Check if this tick has render work
    pub fn is_idle(&self) -> bool {
        self.steps.is_empty()
    }
}

impl DisplayState {
    /// Initial state: first image, interval measured from `now_ms`
    pub const fn new(now_ms: u32) -> Self {
        Self {
            mode: Mode::ShowingImages { image: 0 },
            last_transition_ms: now_ms,
        }
    }

    /// Startup transition
    ///
    /// Renders the first image without waiting for the interval.
    pub fn boot(now_ms: u32) -> Tick {
        Tick::with_steps(Self::new(now_ms), &[RenderStep::Image(0)])
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Image on the panel, if showing images
    pub fn image_index(&self) -> Option<usize> {
        match self.mode {
            Mode::ShowingImages { image } => Some(image),
            Mode::ShowingFractals { .. } => None,
        }
    }

    /// Next fractal preset, if in the fractal run
    pub fn fractal_index(&self) -> Option<usize> {
        match self.mode {
            Mode::ShowingImages { .. } => None,
            Mode::ShowingFractals { fractal } => Some(fractal),
        }
    }

    /// Counter value at the last transition
    pub fn last_transition_ms(&self) -> u32 {
        self.last_transition_ms
    }

    /// Time since the last transition
    ///
    /// Wrapping, so a counter rollover does not stall the cycle.
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.last_transition_ms)
    }

    /// Check if the next transition is due
    pub fn is_due(&self, now_ms: u32) -> bool {
        self.elapsed_ms(now_ms) >= TRANSITION_INTERVAL_MS
    }

    /// Restart the interval at `now_ms`
    ///
    /// Called once the steps of a transition have been drawn, so slow
    /// renders do not eat into the time the result stays on the panel.
    pub fn restamp(self, now_ms: u32) -> Self {
        Self {
            last_transition_ms: now_ms,
            ..self
        }
    }

    /// Advance the machine to `now_ms`
    ///
    /// Returns the state unchanged and no steps until the interval has
    /// elapsed. The interval of a returned transition starts at `now_ms`
    /// until [`restamp`](Self::restamp) moves it to the end of the render.
    pub fn tick(self, now_ms: u32) -> Tick {
        if !self.is_due(now_ms) {
            return Tick::idle(self);
        }

        match self.mode {
            Mode::ShowingImages { image } => {
                let next = (image + 1) % IMAGE_COUNT;
                let mode = if next == IMAGE_COUNT - 1 {
                    // Last image shown, fractals follow
                    Mode::ShowingFractals { fractal: 0 }
                } else {
                    Mode::ShowingImages { image: next }
                };
                Tick::with_steps(
                    Self {
                        mode,
                        last_transition_ms: now_ms,
                    },
                    &[RenderStep::Clear, RenderStep::Image(next)],
                )
            }
            Mode::ShowingFractals { fractal } => {
                let next = fractal + 1;
                if next >= FRACTAL_COUNT {
                    // Wraparound renders the last fractal and then the
                    // first image, both on this tick
                    Tick::with_steps(
                        Self::new(now_ms),
                        &[
                            RenderStep::Clear,
                            RenderStep::Fractal(fractal),
                            RenderStep::Clear,
                            RenderStep::Image(0),
                        ],
                    )
                } else {
                    Tick::with_steps(
                        Self {
                            mode: Mode::ShowingFractals { fractal: next },
                            last_transition_ms: now_ms,
                        },
                        &[RenderStep::Clear, RenderStep::Fractal(fractal)],
                    )
                }
            }
        }
    }
}
