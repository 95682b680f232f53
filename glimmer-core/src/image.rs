//! Stored image rendering
//!
//! Looks an image up in the store, decodes it and blits it to the panel
//! one block at a time. Decoding stops at the bottom edge of the panel.

use glimmer_hal::{BlockSink, DecodeError, FileStore, ImageDecoder, PanelDriver, Rgb565, StoreError};

/// Reasons an image slot stays blank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageError {
    /// No file at the requested path
    NotFound,
    /// File exists but could not be opened
    OpenFailed,
    /// Storage never came up
    StorageUnavailable,
    /// File contents could not be decoded
    Decode(DecodeError),
}

impl From<StoreError> for ImageError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => ImageError::NotFound,
            StoreError::OpenFailed | StoreError::Corrupted => ImageError::OpenFailed,
            StoreError::Unavailable => ImageError::StorageUnavailable,
        }
    }
}

impl From<DecodeError> for ImageError {
    fn from(e: DecodeError) -> Self {
        ImageError::Decode(e)
    }
}

/// Block sink that writes straight to the panel
///
/// Requests an abort once a block starts at or below the bottom edge.
pub struct PanelBlitter<'a, P> {
    panel: &'a mut P,
    height: i32,
}

impl<'a, P: PanelDriver> PanelBlitter<'a, P> {
    pub fn new(panel: &'a mut P) -> Self {
        let (_, height) = panel.dimensions();
        Self {
            panel,
            height: height as i32,
        }
    }
}

impl<P: PanelDriver> BlockSink for PanelBlitter<'_, P> {
    fn block(&mut self, x: i32, y: i32, width: u16, height: u16, pixels: &[Rgb565]) -> bool {
        if y >= self.height {
            return false;
        }
        self.panel.draw_bitmap(x, y, width, height, pixels);
        true
    }
}

/// Render the image stored at `path` with its top-left corner at (x, y)
///
/// The panel is not cleared first. On error nothing past the failing
/// step has been drawn.
pub fn show_image<P, S, D>(
    panel: &mut P,
    store: &S,
    decoder: &mut D,
    path: &str,
    x: i32,
    y: i32,
) -> Result<(), ImageError>
where
    P: PanelDriver,
    S: FileStore,
    D: ImageDecoder,
{
    if !store.exists(path) {
        return Err(ImageError::NotFound);
    }

    let data = store.open(path)?;
    let mut sink = PanelBlitter::new(panel);
    decoder.draw(data, x, y, &mut sink)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RomStore;
    use crate::testing::{archive, raw_image, RawDecoder, RecordingPanel};

    #[test]
    fn test_show_image_draws_pixels() {
        let img = raw_image(4, 3, Rgb565::RED);
        let bytes = archive(&[("/logo1.bmp", img.as_slice())]);
        let store = RomStore::mount(&bytes).unwrap();
        let mut panel = RecordingPanel::new();
        let mut decoder = RawDecoder::default();

        show_image(&mut panel, &store, &mut decoder, "/logo1.bmp", 10, 20).unwrap();

        assert_eq!(panel.pixel_writes, 12);
        assert_eq!(panel.pixel(10, 20), Rgb565::RED);
        assert_eq!(panel.pixel(13, 22), Rgb565::RED);
        assert_eq!(panel.pixel(14, 22), Rgb565::BLACK);
    }

    #[test]
    fn test_missing_file() {
        let store = RomStore::empty();
        let mut panel = RecordingPanel::new();
        let mut decoder = RawDecoder::default();

        let result = show_image(&mut panel, &store, &mut decoder, "/logo1.bmp", 0, 0);

        assert_eq!(result, Err(ImageError::NotFound));
        assert_eq!(decoder.rows_emitted, 0);
        assert!(panel.is_blank());
    }

    #[test]
    fn test_unopenable_file() {
        let bytes = archive(&[("/logo1.bmp", b"")]);
        let store = RomStore::mount(&bytes).unwrap();
        let mut panel = RecordingPanel::new();
        let mut decoder = RawDecoder::default();

        let result = show_image(&mut panel, &store, &mut decoder, "/logo1.bmp", 0, 0);

        assert_eq!(result, Err(ImageError::OpenFailed));
        assert_eq!(decoder.rows_emitted, 0);
    }

    #[test]
    fn test_decode_failure() {
        let bytes = archive(&[("/logo1.bmp", b"\x02\x02\x00")]);
        let store = RomStore::mount(&bytes).unwrap();
        let mut panel = RecordingPanel::new();
        let mut decoder = RawDecoder::default();

        let result = show_image(&mut panel, &store, &mut decoder, "/logo1.bmp", 0, 0);

        assert_eq!(result, Err(ImageError::Decode(DecodeError::Format)));
    }

    #[test]
    fn test_decode_stops_below_panel() {
        // 80 rows tall: rows 64.. must not be decoded past the first one
        let img = raw_image(2, 80, Rgb565::GREEN);
        let bytes = archive(&[("/tall.bmp", img.as_slice())]);
        let store = RomStore::mount(&bytes).unwrap();
        let mut panel = RecordingPanel::new();
        let mut decoder = RawDecoder::default();

        show_image(&mut panel, &store, &mut decoder, "/tall.bmp", 0, 0).unwrap();

        // Row 64 is offered and refused, then decoding stops
        assert_eq!(decoder.rows_emitted, 65);
        assert_eq!(panel.pixel_writes, 64 * 2);
        assert_eq!(panel.pixel(1, 63), Rgb565::GREEN);
    }

    #[test]
    fn test_blitter_refuses_rows_at_bottom_edge() {
        let mut panel = RecordingPanel::new();
        let mut blitter = PanelBlitter::new(&mut panel);
        let row = [Rgb565::BLUE; 3];

        assert!(blitter.block(0, 63, 3, 1, &row));
        assert!(!blitter.block(0, 64, 3, 1, &row));
        assert!(!blitter.block(0, 100, 3, 1, &row));
        assert_eq!(panel.pixel_writes, 3);
    }

    #[test]
    fn test_store_error_mapping() {
        assert_eq!(ImageError::from(StoreError::NotFound), ImageError::NotFound);
        assert_eq!(ImageError::from(StoreError::OpenFailed), ImageError::OpenFailed);
        assert_eq!(ImageError::from(StoreError::Corrupted), ImageError::OpenFailed);
        assert_eq!(
            ImageError::from(StoreError::Unavailable),
            ImageError::StorageUnavailable
        );
    }
}
