//! Panel-side components for the LED matrix
//!
//! - [`FrameBuffer`]: RGB565 back buffer that implements the panel
//!   driver trait and the embedded-graphics draw target
//! - [`Hub75`]: bit-banged HUB75 scan driver that shows a framebuffer
//! - [`BmpDecoder`]: scanline BMP decoder built on tinybmp

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bmp;
pub mod framebuffer;
pub mod hub75;

pub use bmp::BmpDecoder;
pub use framebuffer::{FrameBuffer, Panel64};
pub use hub75::{Hub75, Hub75Pins, COLOR_DEPTH_BITS};
