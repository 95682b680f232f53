//! RGB565 frame buffer
//!
//! Holds one frame in physical panel order. Writes go through the
//! configured rotation and are clipped to the logical area. The scan
//! driver reads rows back out together with the brightness level.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565 as EgRgb565;
use embedded_graphics::prelude::{DrawTarget, IntoStorage, OriginDimensions, Pixel, Size};
use glimmer_hal::{PanelDriver, Rgb565, Rotation};

/// Frame buffer for a `W` x `H` panel
#[derive(Clone)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    pixels: [[Rgb565; W]; H],
    brightness: u8,
    rotation: Rotation,
}

/// The 64x64 matrix
pub type Panel64 = FrameBuffer<64, 64>;

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Create a blank buffer at full brightness, unrotated
    pub const fn new() -> Self {
        Self {
            pixels: [[Rgb565::BLACK; W]; H],
            brightness: u8::MAX,
            rotation: Rotation::Deg0,
        }
    }

    /// Pixel at physical position (x, y)
    pub fn pixel(&self, x: usize, y: usize) -> Rgb565 {
        self.pixels
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(Rgb565::BLACK)
    }

    /// Physical row `y`
    pub fn row(&self, y: usize) -> &[Rgb565] {
        self.pixels.get(y).map_or(&[], |row| &row[..])
    }

    /// Current brightness level
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Replace this frame with `other`
    pub fn copy_from(&mut self, other: &Self) {
        self.pixels = other.pixels;
        self.brightness = other.brightness;
        self.rotation = other.rotation;
    }

    /// Logical size under the current rotation
    fn logical_size(&self) -> (usize, usize) {
        match self.rotation {
            Rotation::Deg0 | Rotation::Deg180 => (W, H),
            Rotation::Deg90 | Rotation::Deg270 => (H, W),
        }
    }

    /// Map a logical position to a physical one, or None if off-panel
    fn to_physical(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let (lw, lh) = self.logical_size();
        if x < 0 || y < 0 || x as usize >= lw || y as usize >= lh {
            return None;
        }
        let (x, y) = (x as usize, y as usize);

        Some(match self.rotation {
            Rotation::Deg0 => (x, y),
            Rotation::Deg90 => (W - 1 - y, x),
            Rotation::Deg180 => (W - 1 - x, H - 1 - y),
            Rotation::Deg270 => (y, H - 1 - x),
        })
    }
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> PanelDriver for FrameBuffer<W, H> {
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if let Some((px, py)) = self.to_physical(x, y) {
            self.pixels[py][px] = color;
        }
    }

    fn clear(&mut self) {
        self.pixels = [[Rgb565::BLACK; W]; H];
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    fn dimensions(&self) -> (u16, u16) {
        let (w, h) = self.logical_size();
        (w as u16, h as u16)
    }
}

impl<const W: usize, const H: usize> OriginDimensions for FrameBuffer<W, H> {
    fn size(&self) -> Size {
        let (w, h) = self.logical_size();
        Size::new(w as u32, h as u32)
    }
}

impl<const W: usize, const H: usize> DrawTarget for FrameBuffer<W, H> {
    type Color = EgRgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, Rgb565(color.into_storage()));
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels = [[Rgb565(color.into_storage()); W]; H];
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::{Point, Primitive, RgbColor};
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
    use embedded_graphics::Drawable;

    #[test]
    fn test_new_is_blank() {
        let fb = Panel64::new();
        assert!((0..64).all(|y| fb.row(y).iter().all(|&p| p == Rgb565::BLACK)));
        assert_eq!(fb.brightness(), 255);
        assert_eq!(PanelDriver::dimensions(&fb), (64, 64));
    }

    #[test]
    fn test_set_pixel_clips() {
        let mut fb = FrameBuffer::<4, 2>::new();
        fb.set_pixel(-1, 0, Rgb565::RED);
        fb.set_pixel(4, 0, Rgb565::RED);
        fb.set_pixel(0, 2, Rgb565::RED);
        fb.set_pixel(3, 1, Rgb565::RED);

        assert_eq!(fb.pixel(3, 1), Rgb565::RED);
        let lit = (0..2)
            .flat_map(|y| fb.row(y).iter())
            .filter(|&&p| p != Rgb565::BLACK)
            .count();
        assert_eq!(lit, 1);
    }

    #[test]
    fn test_rotation_maps_corners() {
        let mut fb = FrameBuffer::<4, 2>::new();

        fb.set_rotation(Rotation::Deg90);
        assert_eq!(PanelDriver::dimensions(&fb), (2, 4));
        fb.set_pixel(0, 0, Rgb565::RED);
        assert_eq!(fb.pixel(3, 0), Rgb565::RED);

        fb.set_rotation(Rotation::Deg180);
        fb.set_pixel(0, 0, Rgb565::GREEN);
        assert_eq!(fb.pixel(3, 1), Rgb565::GREEN);

        fb.set_rotation(Rotation::Deg270);
        fb.set_pixel(0, 0, Rgb565::BLUE);
        assert_eq!(fb.pixel(0, 1), Rgb565::BLUE);

        // Off the rotated logical area
        fb.set_pixel(2, 0, Rgb565::WHITE);
        assert_eq!(fb.pixel(0, 0), Rgb565::BLACK);
    }

    #[test]
    fn test_clear_keeps_settings() {
        let mut fb = Panel64::new();
        fb.set_brightness(50);
        fb.set_pixel(10, 10, Rgb565::WHITE);
        PanelDriver::clear(&mut fb);

        assert_eq!(fb.pixel(10, 10), Rgb565::BLACK);
        assert_eq!(fb.brightness(), 50);
    }

    #[test]
    fn test_copy_from() {
        let mut front = Panel64::new();
        let mut back = Panel64::new();
        back.set_brightness(10);
        back.set_pixel(5, 6, Rgb565::GREEN);

        front.copy_from(&back);

        assert_eq!(front.pixel(5, 6), Rgb565::GREEN);
        assert_eq!(front.brightness(), 10);
    }

    #[test]
    fn test_draw_target() {
        let mut fb = FrameBuffer::<8, 8>::new();
        Rectangle::new(Point::new(2, 2), Size::new(3, 2))
            .into_styled(PrimitiveStyle::with_fill(EgRgb565::RED))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(fb.pixel(2, 2), Rgb565::RED);
        assert_eq!(fb.pixel(4, 3), Rgb565::RED);
        assert_eq!(fb.pixel(5, 3), Rgb565::BLACK);

        DrawTarget::clear(&mut fb, EgRgb565::BLUE).unwrap();
        assert_eq!(fb.pixel(7, 7), Rgb565::BLUE);
    }
}
