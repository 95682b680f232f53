//! Slideshow player
//!
//! Owns the panel, the image store and the decoder, feeds timestamps to
//! the display state machine and carries out the render steps it returns.

use glimmer_hal::{FileStore, ImageDecoder, PanelDriver};

use crate::config::{
    FRACTAL_PRESETS, IMAGE_ORIGIN, IMAGE_PATHS, PANEL_BRIGHTNESS, PANEL_ROTATION,
};
use crate::fractal::render_fractal;
use crate::image::{show_image, ImageError};
use crate::state::{DisplayState, Mode, RenderStep, Tick};

/// Slideshow driver for one panel
pub struct Player<P, S, D> {
    state: DisplayState,
    panel: P,
    store: S,
    decoder: D,
}

impl<P, S, D> Player<P, S, D>
where
    P: PanelDriver,
    S: FileStore,
    D: ImageDecoder,
{
    /// Configure the panel and show the first image
    ///
    /// `clock` returns the free-running millisecond counter. It is read
    /// again after the first image is drawn, which starts the interval.
    pub fn start(mut panel: P, store: S, decoder: D, mut clock: impl FnMut() -> u32) -> Self {
        panel.set_brightness(PANEL_BRIGHTNESS);
        panel.set_rotation(PANEL_ROTATION);
        panel.clear();

        let Tick { state, steps } = DisplayState::boot(clock());
        let mut player = Self {
            state,
            panel,
            store,
            decoder,
        };

        info!("Slideshow started");
        player.execute(&steps);
        player.state = player.state.restamp(clock());
        player
    }

    /// Advance to the current time, rendering if a transition is due
    ///
    /// The interval restarts when the render finishes. Returns true if
    /// anything was drawn.
    pub fn poll(&mut self, mut clock: impl FnMut() -> u32) -> bool {
        let Tick { state, steps } = self.state.tick(clock());
        let changed = state.mode() != self.state.mode();
        self.state = state;

        if steps.is_empty() {
            return false;
        }

        if changed {
            match state.mode() {
                Mode::ShowingImages { .. } => info!("Switching to images"),
                Mode::ShowingFractals { .. } => info!("Switching to fractals"),
            }
        }

        self.execute(&steps);
        self.state = self.state.restamp(clock());
        true
    }

    fn execute(&mut self, steps: &[RenderStep]) {
        for &step in steps {
            match step {
                RenderStep::Clear => self.panel.clear(),
                RenderStep::Image(index) => self.draw_image(index),
                RenderStep::Fractal(index) => self.draw_fractal(index),
            }
        }
    }

    fn draw_image(&mut self, index: usize) {
        let Some(&path) = IMAGE_PATHS.get(index) else {
            error!("Image index {} out of range", index);
            return;
        };

        info!("Showing image {}", path);
        let (x, y) = IMAGE_ORIGIN;
        match show_image(&mut self.panel, &self.store, &mut self.decoder, path, x, y) {
            Ok(()) => {}
            Err(ImageError::NotFound) => error!("Image not found: {}", path),
            Err(e) => error!("Failed to show {}: {:?}", path, e),
        }
    }

    fn draw_fractal(&mut self, index: usize) {
        let Some(viewport) = FRACTAL_PRESETS.get(index) else {
            error!("Fractal index {} out of range", index);
            return;
        };

        info!("Rendering fractal {}", index);
        render_fractal(viewport, &mut self.panel);
    }

    /// Current state machine state
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Panel being driven
    pub fn panel(&self) -> &P {
        &self.panel
    }
}
