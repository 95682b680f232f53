//! Slideshow cycle timing and content

use crate::fractal::FRACTAL_PRESETS;

/// Minimum time a slide stays on the panel
pub const TRANSITION_INTERVAL_MS: u32 = 15_000;

/// How often the cycle loop checks the clock
pub const POLL_INTERVAL_MS: u64 = 10;

/// Stored images shown before the fractal run, in order
pub const IMAGE_PATHS: [&str; 2] = ["/logo1.bmp", "/logo2.bmp"];

/// Number of images in the cycle
pub const IMAGE_COUNT: usize = IMAGE_PATHS.len();

/// Number of fractal slides in the cycle
pub const FRACTAL_COUNT: usize = FRACTAL_PRESETS.len();

/// Top-left corner at which images are drawn
pub const IMAGE_ORIGIN: (i32, i32) = (0, 0);
