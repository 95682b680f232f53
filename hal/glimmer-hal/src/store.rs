//! Read-only file storage abstraction
//!
//! Images live in a small file store addressed by absolute paths such as
//! `/logo1.bmp`. The store hands out borrowed byte slices, which fits
//! memory-mapped flash (XIP) without copying.

/// Errors from storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Storage subsystem could not be brought up
    Unavailable,
    /// No file at the requested path
    NotFound,
    /// File exists but could not be opened
    OpenFailed,
    /// Storage contents are malformed
    Corrupted,
}

/// Directory entry reported by [`FileStore::entries`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FileEntry<'a> {
    /// Absolute path of the file
    pub name: &'a str,
    /// Size in bytes
    pub size: u32,
}

/// Read-only file store
pub trait FileStore {
    /// Check if a file exists at `path`
    fn exists(&self, path: &str) -> bool;

    /// Open a file and borrow its contents
    fn open(&self, path: &str) -> Result<&[u8], StoreError>;

    /// Iterate over all stored files
    fn entries(&self) -> impl Iterator<Item = FileEntry<'_>> + '_;
}
