//! Per-pixel escape-time iteration and frame rendering

use glimmer_hal::{PanelDriver, Rgb565};

use super::viewport::ViewportParams;

/// Squared magnitude at which an orbit counts as escaped
const ESCAPE_RADIUS_SQ: f32 = 4.0;

/// Iterate z <- z^2 + c from z = 0
///
/// Returns the number of iterations left in the budget when the orbit
/// escaped, so points inside the set return 0 and points that escape on
/// the first step return `max_iterations - 1`.
#[inline]
pub fn escape_time(c_re: f32, c_im: f32, max_iterations: u32) -> u32 {
    let mut zx = 0.0f32;
    let mut zy = 0.0f32;
    let mut remaining = max_iterations;

    while zx * zx + zy * zy < ESCAPE_RADIUS_SQ && remaining > 0 {
        let tmp = zx * zx - zy * zy + c_re;
        zy = 2.0 * zx * zy + c_im;
        zx = tmp;
        remaining -= 1;
    }

    remaining
}

/// Map a remaining-iteration count to 8-bit RGB
///
/// Each channel cycles at its own rate so neighbouring bands stay
/// distinguishable.
#[inline]
pub const fn iteration_color(remaining: u32) -> (u8, u8, u8) {
    (
        (remaining.wrapping_mul(2) % 256) as u8,
        (remaining.wrapping_mul(3) % 256) as u8,
        (remaining.wrapping_mul(5) % 256) as u8,
    )
}

/// Color of pixel (x, y) on a `width` x `height` panel
pub fn pixel_color(viewport: &ViewportParams, x: i32, y: i32, width: u16, height: u16) -> Rgb565 {
    let (re, im) = viewport.point(x, y, width as i32 / 2, height as i32 / 2);
    let (r, g, b) = iteration_color(escape_time(re, im, viewport.max_iterations));
    Rgb565::from_rgb888(r, g, b)
}

/// Render one full frame of `viewport` to the panel
///
/// Every pixel of the panel is written; nothing is cleared first.
pub fn render_fractal<P: PanelDriver>(viewport: &ViewportParams, panel: &mut P) {
    let (width, height) = panel.dimensions();
    let center_x = width as i32 / 2;
    let center_y = height as i32 / 2;

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let (re, im) = viewport.point(x, y, center_x, center_y);
            let (r, g, b) = iteration_color(escape_time(re, im, viewport.max_iterations));
            let color = panel.color_pack(r, g, b);
            panel.set_pixel(x, y, color);
        }
    }
}
