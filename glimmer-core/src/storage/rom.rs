//! Read-only image archive
//!
//! Archive layout (all integers little-endian):
//!
//! ```text
//! ┌───────┬───────┬──────────────────────────────────────────┐
//! │ MAGIC │ COUNT │ ENTRY × COUNT                            │
//! │ 4B    │ u16   │ name_len u8 │ name │ data_len u32 │ data │
//! └───────┴───────┴──────────────────────────────────────────┘
//! ```
//!
//! Names are UTF-8 absolute paths. The archive is produced by the
//! firmware build script and linked into flash.

use glimmer_hal::{FileEntry, FileStore, StoreError};

/// Archive signature
pub const ARCHIVE_MAGIC: [u8; 4] = *b"GLIM";

/// Magic plus entry count
const HEADER_LEN: usize = 6;

/// Image store backed by an in-memory archive
#[derive(Debug, Clone, Copy)]
pub struct RomStore<'a> {
    /// Entry table, header stripped
    table: &'a [u8],
    count: u16,
}

/// Entry walker over the raw table
struct RawEntries<'a> {
    rest: &'a [u8],
    remaining: u16,
}

impl<'a> Iterator for RawEntries<'a> {
    type Item = Result<(&'a str, &'a [u8]), StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        match parse_entry(self.rest) {
            Ok((entry, rest)) => {
                self.rest = rest;
                Some(Ok(entry))
            }
            Err(e) => {
                // Nothing after a bad entry can be located
                self.remaining = 0;
                Some(Err(e))
            }
        }
    }
}

/// Parse one entry, returning it and the bytes after it
fn parse_entry(buf: &[u8]) -> Result<((&str, &[u8]), &[u8]), StoreError> {
    let (&name_len, rest) = buf.split_first().ok_or(StoreError::Corrupted)?;
    let name_len = name_len as usize;
    if rest.len() < name_len + 4 {
        return Err(StoreError::Corrupted);
    }

    let (name, rest) = rest.split_at(name_len);
    let name = core::str::from_utf8(name).map_err(|_| StoreError::Corrupted)?;
    if !name.starts_with('/') {
        return Err(StoreError::Corrupted);
    }

    let (len_bytes, rest) = rest.split_at(4);
    let data_len =
        u32::from_le_bytes([len_bytes[0], len_bytes[1], len_bytes[2], len_bytes[3]]) as usize;
    if rest.len() < data_len {
        return Err(StoreError::Corrupted);
    }

    let (data, rest) = rest.split_at(data_len);
    Ok(((name, data), rest))
}

impl<'a> RomStore<'a> {
    /// Store with no files, used when mounting fails
    pub const fn empty() -> Self {
        Self {
            table: &[],
            count: 0,
        }
    }

    /// Validate an archive and mount it
    ///
    /// Any structural problem makes the whole store unavailable.
    pub fn mount(image: &'a [u8]) -> Result<Self, StoreError> {
        if image.len() < HEADER_LEN || image[..4] != ARCHIVE_MAGIC {
            return Err(StoreError::Unavailable);
        }

        let store = Self {
            table: &image[HEADER_LEN..],
            count: u16::from_le_bytes([image[4], image[5]]),
        };

        for entry in store.raw_entries() {
            entry.map_err(|_| StoreError::Unavailable)?;
        }

        Ok(store)
    }

    /// Number of stored files
    pub fn len(&self) -> usize {
        self.count as usize
    }

    /// Check if the store holds no files
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn raw_entries(&self) -> RawEntries<'a> {
        RawEntries {
            rest: self.table,
            remaining: self.count,
        }
    }

    fn find(&self, path: &str) -> Option<&'a [u8]> {
        self.raw_entries()
            .filter_map(Result::ok)
            .find(|(name, _)| *name == path)
            .map(|(_, data)| data)
    }
}

impl FileStore for RomStore<'_> {
    fn exists(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    fn open(&self, path: &str) -> Result<&[u8], StoreError> {
        match self.find(path) {
            None => Err(StoreError::NotFound),
            Some([]) => Err(StoreError::OpenFailed),
            Some(data) => Ok(data),
        }
    }

    fn entries(&self) -> impl Iterator<Item = FileEntry<'_>> + '_ {
        self.raw_entries().filter_map(Result::ok).map(|(name, data)| FileEntry {
            name,
            size: data.len() as u32,
        })
    }
}
