//! Image storage
//!
//! Images are packed into a read-only archive at build time and mounted
//! from flash at startup.

pub mod rom;

pub use rom::{RomStore, ARCHIVE_MAGIC};

use glimmer_hal::FileStore;

/// Log every stored file with its size
///
/// Diagnostic only. Returns the number of files listed.
pub fn log_contents<S: FileStore>(store: &S) -> usize {
    info!("Stored files:");
    let mut count = 0;
    for entry in store.entries() {
        info!("  {} ({} bytes)", entry.name, entry.size);
        count += 1;
    }
    if count == 0 {
        warn!("  (none)");
    }
    count
}
