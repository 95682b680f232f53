//! RP2040-specific HAL for the Glimmer firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `glimmer-hal` traits:
//!
//! - GPIO pin bank, pins taken by number
//! - `OutputPin` for embassy-rp push-pull outputs
//! - HUB75 pin map

#![no_std]

pub mod gpio;
pub mod hub75;

pub use gpio::{PinBank, PinError, RpOutput, GPIO_COUNT};
pub use hub75::Hub75PinMap;
