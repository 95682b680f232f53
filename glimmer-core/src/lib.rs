//! Board-agnostic core logic for the LED matrix slideshow
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Fixed configuration values (panel geometry, cycle timing, presets)
//! - Escape-time fractal generator
//! - Display mode state machine
//! - Image render path with per-scanline abort
//! - ROM image store
//! - The [`Player`] that executes state machine output against a panel

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod fractal;
pub mod image;
pub mod player;
pub mod state;
pub mod storage;

#[cfg(test)]
mod testing;

pub use player::Player;
