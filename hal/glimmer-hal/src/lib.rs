//! Glimmer Hardware Abstraction Layer
//!
//! This crate defines the seams between the slideshow logic and the
//! things it drives or reads from. Chip-specific crates implement the
//! pin traits, display crates implement the panel and decoder traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  glimmer-firmware / glimmer-core        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  glimmer-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ glimmer-hal-  │       │   glimmer-    │
//! │    rp2040     │       │   display     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output
//! - [`panel::PanelDriver`] - Pixel sink for the LED matrix
//! - [`store::FileStore`] - Read-only file storage
//! - [`decode::ImageDecoder`], [`decode::BlockSink`] - Image decoding with
//!   a per-block callback

#![no_std]
#![deny(unsafe_code)]

pub mod decode;
pub mod gpio;
pub mod panel;
pub mod store;

// Re-export key traits at crate root for convenience
pub use decode::{BlockSink, DecodeError, ImageDecoder};
pub use gpio::OutputPin;
pub use panel::{PanelDriver, Rgb565, Rotation};
pub use store::{FileEntry, FileStore, StoreError};
