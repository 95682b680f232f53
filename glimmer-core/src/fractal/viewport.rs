//! Fractal viewport parameters and the preset table

/// Complex-plane window for one fractal slide
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ViewportParams {
    /// Real part at the panel center
    pub offset_x: f32,
    /// Imaginary part at the panel center
    pub offset_y: f32,
    /// Complex-plane distance between adjacent pixels
    pub scale: f32,
    /// Iteration budget per pixel
    pub max_iterations: u32,
}

impl ViewportParams {
    pub const fn new(offset_x: f32, offset_y: f32, scale: f32, max_iterations: u32) -> Self {
        Self {
            offset_x,
            offset_y,
            scale,
            max_iterations,
        }
    }

    /// Map pixel (x, y) to c, with (center_x, center_y) landing on the offset
    #[inline]
    pub fn point(&self, x: i32, y: i32, center_x: i32, center_y: i32) -> (f32, f32) {
        let re = (x - center_x) as f32 * self.scale + self.offset_x;
        let im = (y - center_y) as f32 * self.scale + self.offset_y;
        (re, im)
    }
}

/// Fractal slides in display order
pub const FRACTAL_PRESETS: [ViewportParams; 3] = [
    // Main cardioid and the period-2 bulb
    ViewportParams::new(-0.7, 0.0, 0.006, 100),
    // Upper seahorse region
    ViewportParams::new(-0.5, 0.6, 0.003, 200),
    // Filaments above the period-2 bulb
    ViewportParams::new(-1.0, 0.3, 0.002, 300),
];
