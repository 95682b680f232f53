//! Slideshow cycle task
//!
//! Polls the player on a short fixed interval and publishes the frame
//! whenever a transition drew something.

use defmt::*;
use embassy_time::{Instant, Timer};

use glimmer_core::config::POLL_INTERVAL_MS;
use glimmer_core::storage::RomStore;
use glimmer_core::Player;
use glimmer_display::BmpDecoder;

use crate::channels::{publish, Frame};

#[embassy_executor::task]
pub async fn cycle_task(store: RomStore<'static>) {
    info!("Cycle task started");

    let start = Instant::now();
    // Wraps after ~49 days; the state machine uses wrapping arithmetic
    let clock = || start.elapsed().as_millis() as u32;

    let mut player = Player::start(Frame::new(), store, BmpDecoder::new(), clock);
    publish(player.panel());

    loop {
        Timer::after_millis(POLL_INTERVAL_MS).await;

        if player.poll(clock) {
            debug!("Frame rendered at {} ms", clock());
            publish(player.panel());
        }
    }
}
