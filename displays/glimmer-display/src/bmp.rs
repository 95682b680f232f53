//! BMP image decoder
//!
//! Parses with tinybmp and emits the image top-down, one scanline per
//! block, so the sink can stop the decode at the bottom of the panel.

use embedded_graphics::image::GetPixel;
use embedded_graphics::pixelcolor::Rgb565 as EgRgb565;
use embedded_graphics::prelude::{IntoStorage, OriginDimensions, Point};
use glimmer_hal::{BlockSink, DecodeError, ImageDecoder, Rgb565};
use tinybmp::{Bmp, ParseError};

/// Widest image the scanline buffer holds
pub const MAX_WIDTH: usize = 128;

/// Scanline BMP decoder
#[derive(Debug, Default, Clone, Copy)]
pub struct BmpDecoder;

impl BmpDecoder {
    pub const fn new() -> Self {
        Self
    }
}

fn map_parse_error(e: ParseError) -> DecodeError {
    match e {
        ParseError::UnsupportedBpp(_) | ParseError::UnsupportedCompressionMethod(_) => {
            DecodeError::Unsupported
        }
        _ => DecodeError::Format,
    }
}

impl ImageDecoder for BmpDecoder {
    fn draw<S: BlockSink>(
        &mut self,
        data: &[u8],
        x: i32,
        y: i32,
        sink: &mut S,
    ) -> Result<(), DecodeError> {
        let bmp = Bmp::<EgRgb565>::from_slice(data).map_err(map_parse_error)?;
        let size = bmp.size();
        let width = size.width as usize;
        if width > MAX_WIDTH {
            return Err(DecodeError::Unsupported);
        }

        let mut line = [Rgb565::BLACK; MAX_WIDTH];
        for row in 0..size.height as i32 {
            for (col, slot) in line[..width].iter_mut().enumerate() {
                let color = bmp
                    .pixel(Point::new(col as i32, row))
                    .ok_or(DecodeError::Format)?;
                *slot = Rgb565(color.into_storage());
            }

            if !sink.block(x, y + row, width as u16, 1, &line[..width]) {
                break;
            }
        }

        Ok(())
    }
}
