//! Inter-task communication
//!
//! The cycle task draws into its own frame and publishes it here when a
//! transition rendered something. The refresh task picks the frame up
//! between two scans.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use glimmer_core::config::{PANEL_HEIGHT, PANEL_WIDTH};
use glimmer_display::FrameBuffer;

/// Frame buffer sized for the configured panel
pub type Frame = FrameBuffer<{ PANEL_WIDTH as usize }, { PANEL_HEIGHT as usize }>;

/// Latest published frame
pub static FRAME: Mutex<CriticalSectionRawMutex, RefCell<Frame>> =
    Mutex::new(RefCell::new(Frame::new()));

/// Signal that FRAME holds a frame the refresh task has not shown yet
pub static FRAME_READY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Copy `frame` out for display
pub fn publish(frame: &Frame) {
    FRAME.lock(|f| f.borrow_mut().copy_from(frame));
    FRAME_READY.signal(());
}
