//! Fixed configuration values
//!
//! The slideshow has no runtime configuration. Everything that would
//! otherwise be a magic number lives here under a name.

pub mod cycle;
pub mod panel;

pub use cycle::{
    FRACTAL_COUNT, IMAGE_COUNT, IMAGE_ORIGIN, IMAGE_PATHS, POLL_INTERVAL_MS,
    TRANSITION_INTERVAL_MS,
};
pub use panel::{PANEL_BRIGHTNESS, PANEL_HEIGHT, PANEL_ROTATION, PANEL_WIDTH};

pub use crate::fractal::FRACTAL_PRESETS;
