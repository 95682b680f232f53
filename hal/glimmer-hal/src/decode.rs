//! Image decoding abstraction
//!
//! Decoders do not own a framebuffer. They push decoded pixels out in
//! blocks (a scanline or an MCU-sized tile) to a [`BlockSink`], which can
//! stop the decode early by returning `false`.

use crate::panel::Rgb565;

/// Errors from image decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Data is not a well-formed image of the expected format
    Format,
    /// Well-formed but uses a feature the decoder does not handle
    Unsupported,
}

/// Receiver for decoded pixel blocks
pub trait BlockSink {
    /// Accept one block of row-major pixels at (x, y)
    ///
    /// Return `false` to abort the remaining decode.
    fn block(&mut self, x: i32, y: i32, width: u16, height: u16, pixels: &[Rgb565]) -> bool;
}

/// Closures work as sinks, which keeps tests and one-off callers short
impl<F> BlockSink for F
where
    F: FnMut(i32, i32, u16, u16, &[Rgb565]) -> bool,
{
    fn block(&mut self, x: i32, y: i32, width: u16, height: u16, pixels: &[Rgb565]) -> bool {
        self(x, y, width, height, pixels)
    }
}

/// Image decoder
pub trait ImageDecoder {
    /// Decode `data` and emit it to `sink` with the image's top-left
    /// corner at (x, y)
    ///
    /// An abort requested by the sink is not an error.
    fn draw<S: BlockSink>(&mut self, data: &[u8], x: i32, y: i32, sink: &mut S)
        -> Result<(), DecodeError>;
}
