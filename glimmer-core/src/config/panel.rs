//! Panel geometry and startup settings

use glimmer_hal::Rotation;

/// Panel width in pixels
pub const PANEL_WIDTH: u16 = 64;

/// Panel height in pixels
pub const PANEL_HEIGHT: u16 = 64;

/// Brightness applied once at startup (0-255)
pub const PANEL_BRIGHTNESS: u8 = 50;

/// Rotation applied once at startup
pub const PANEL_ROTATION: Rotation = Rotation::Deg0;
