//! Panel refresh task
//!
//! Runs alone on core 1 and scans the front buffer out to the matrix
//! continuously. A newly published frame is copied in between two scans,
//! so a frame is never shown half-drawn.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::Delay;
use static_cell::ConstStaticCell;

use glimmer_display::Hub75;
use glimmer_hal_rp2040::RpOutput;

use crate::channels::{Frame, FRAME, FRAME_READY};

/// The HUB75 driver as wired on this board
pub type Matrix = Hub75<RpOutput<'static>, Delay>;

/// Buffer being scanned; static because it is larger than the core 1 stack
static FRONT: ConstStaticCell<Frame> = ConstStaticCell::new(Frame::new());

#[embassy_executor::task]
pub async fn refresh_task(mut matrix: Matrix) {
    info!("Refresh task started");

    let front = FRONT.take();

    loop {
        if FRAME_READY.try_take().is_some() {
            FRAME.lock(|frame| front.copy_from(&frame.borrow()));
        }

        matrix.refresh(front);
        yield_now().await;
    }
}
