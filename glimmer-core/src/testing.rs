//! Test doubles shared by the unit tests

use glimmer_hal::{BlockSink, DecodeError, ImageDecoder, PanelDriver, Rgb565, Rotation};

use crate::storage::ARCHIVE_MAGIC;

const SIZE: usize = 64;

/// Panel calls that are not pixel writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    Clear,
    Brightness(u8),
    Rotation(Rotation),
}

/// 64x64 panel that remembers what was done to it
pub struct RecordingPanel {
    pixels: [[Rgb565; SIZE]; SIZE],
    pub pixel_writes: usize,
    pub clears: usize,
    pub events: Vec<PanelEvent>,
}

impl RecordingPanel {
    pub fn new() -> Self {
        Self {
            pixels: [[Rgb565::BLACK; SIZE]; SIZE],
            pixel_writes: 0,
            clears: 0,
            events: Vec::new(),
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[y as usize][x as usize]
    }

    /// Check if every pixel is black
    pub fn is_blank(&self) -> bool {
        self.pixels
            .iter()
            .all(|row| row.iter().all(|&p| p == Rgb565::BLACK))
    }
}

impl PanelDriver for RecordingPanel {
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if (0..SIZE as i32).contains(&x) && (0..SIZE as i32).contains(&y) {
            self.pixels[y as usize][x as usize] = color;
            self.pixel_writes += 1;
        }
    }

    fn clear(&mut self) {
        self.pixels = [[Rgb565::BLACK; SIZE]; SIZE];
        self.clears += 1;
        self.events.push(PanelEvent::Clear);
    }

    fn set_brightness(&mut self, level: u8) {
        self.events.push(PanelEvent::Brightness(level));
    }

    fn set_rotation(&mut self, rotation: Rotation) {
        self.events.push(PanelEvent::Rotation(rotation));
    }

    fn dimensions(&self) -> (u16, u16) {
        (SIZE as u16, SIZE as u16)
    }
}

/// Decoder for a trivial raw format: width u8, height u8, then
/// little-endian RGB565 pixels row by row
///
/// Emits one block per row, like a scanline decoder.
#[derive(Default)]
pub struct RawDecoder {
    pub rows_emitted: usize,
}

impl ImageDecoder for RawDecoder {
    fn draw<S: BlockSink>(
        &mut self,
        data: &[u8],
        x: i32,
        y: i32,
        sink: &mut S,
    ) -> Result<(), DecodeError> {
        let [w, h, pixels @ ..] = data else {
            return Err(DecodeError::Format);
        };
        let (w, h) = (*w as usize, *h as usize);
        if pixels.len() != w * h * 2 {
            return Err(DecodeError::Format);
        }

        for row in 0..h {
            let bytes = &pixels[row * w * 2..(row + 1) * w * 2];
            let line: Vec<Rgb565> = bytes
                .chunks_exact(2)
                .map(|b| Rgb565(u16::from_le_bytes([b[0], b[1]])))
                .collect();
            self.rows_emitted += 1;
            if !sink.block(x, y + row as i32, w as u16, 1, &line) {
                break;
            }
        }
        Ok(())
    }
}

/// Encode a solid-color raw image for [`RawDecoder`]
pub fn raw_image(width: u8, height: u8, color: Rgb565) -> Vec<u8> {
    let mut out = vec![width, height];
    for _ in 0..(width as usize * height as usize) {
        out.extend_from_slice(&color.0.to_le_bytes());
    }
    out
}

/// Build a store archive from (name, data) pairs
pub fn archive(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut out = ARCHIVE_MAGIC.to_vec();
    out.extend_from_slice(&(files.len() as u16).to_le_bytes());
    for (name, data) in files {
        out.push(name.len() as u8);
        out.extend_from_slice(name.as_bytes());
        out.extend_from_slice(&(data.len() as u32).to_le_bytes());
        out.extend_from_slice(data);
    }
    out
}
