//! Escape-time fractal generator
//!
//! Renders a window of the Mandelbrot set, coloring each pixel by how
//! many iterations it had left when it escaped.

pub mod generator;
pub mod viewport;

pub use generator::{escape_time, iteration_color, pixel_color, render_fractal};
pub use viewport::{ViewportParams, FRACTAL_PRESETS};
