//! LED matrix panel abstraction
//!
//! The panel is the single output sink of the slideshow. Everything that
//! draws (the fractal generator, the image decoder callback) goes through
//! [`PanelDriver`].

/// RGB565 color (16-bit: 5 red, 6 green, 5 blue)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);

    /// Pack 8-bit channels, dropping the low bits of each
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        let r5 = (r as u16 & 0xF8) << 8;
        let g6 = (g as u16 & 0xFC) << 3;
        let b5 = b as u16 >> 3;
        Self(r5 | g6 | b5)
    }

    /// Red channel (0-31)
    pub const fn r5(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel (0-63)
    pub const fn g6(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel (0-31)
    pub const fn b5(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Expand back to 8-bit channels (low bits zero)
    pub const fn to_rgb888(self) -> (u8, u8, u8) {
        (self.r5() << 3, self.g6() << 2, self.b5() << 3)
    }
}

/// Panel rotation in quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Create a rotation from a quarter-turn count (wraps modulo 4)
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    /// Number of quarter turns clockwise
    pub const fn quarter_turns(self) -> u8 {
        self as u8
    }
}

/// Pixel sink for an RGB LED matrix
///
/// Drawing never fails: coordinates outside the panel are clipped by the
/// implementation. Frames are written whole by a single writer, so there
/// is no locking at this level.
pub trait PanelDriver {
    /// Set a single pixel
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565);

    /// Blank the whole panel
    fn clear(&mut self);

    /// Set global brightness (0 = off, 255 = full)
    fn set_brightness(&mut self, level: u8);

    /// Set the logical rotation applied to subsequent writes
    fn set_rotation(&mut self, rotation: Rotation);

    /// Logical panel size as (width, height)
    fn dimensions(&self) -> (u16, u16);

    /// Pack 8-bit channels into the panel's native color
    fn color_pack(&self, r: u8, g: u8, b: u8) -> Rgb565 {
        Rgb565::from_rgb888(r, g, b)
    }

    /// Draw a row-major block of pixels with its top-left corner at (x, y)
    ///
    /// Short buffers draw as many pixels as they hold.
    fn draw_bitmap(&mut self, x: i32, y: i32, width: u16, height: u16, pixels: &[Rgb565]) {
        let width = width as usize;
        if width == 0 {
            return;
        }
        for (i, &color) in pixels.iter().take(width * height as usize).enumerate() {
            let dx = (i % width) as i32;
            let dy = (i / width) as i32;
            self.set_pixel(x + dx, y + dy, color);
        }
    }
}
