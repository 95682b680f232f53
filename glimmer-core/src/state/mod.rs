//! Display mode state machine
//!
//! Decides what the panel should show and when. The machine itself is
//! pure: a tick consumes the current [`DisplayState`] and produces the
//! next one together with the [`RenderStep`]s to execute.

pub mod machine;
pub mod steps;

pub use machine::{DisplayState, Mode, Tick};
pub use steps::{RenderStep, Steps, MAX_STEPS_PER_TICK};
