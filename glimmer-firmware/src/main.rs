//! Glimmer - LED Matrix Slideshow Firmware
//!
//! Cycles stored images and escape-time fractals on a 64x64 HUB75 panel
//! driven by an RP2040.
//!
//! Core 0 runs the slideshow and renders frames. Core 1 does nothing but
//! scan the latest frame out to the panel, so long fractal renders never
//! blank the display.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Executor;
use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::multicore::{spawn_core1, Stack};
use embassy_rp::Peri;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use glimmer_core::storage::{log_contents, RomStore};
use glimmer_display::{Hub75, Hub75Pins};
use glimmer_hal_rp2040::{PinBank, RpOutput};

mod channels;
mod config;
mod tasks;

/// Image archive packed by build.rs from assets.toml
static IMAGE_ARCHIVE: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/images.bin"));

const CORE1_STACK_SIZE: usize = 4096;

static CORE1_STACK: StaticCell<Stack<CORE1_STACK_SIZE>> = StaticCell::new();
static EXECUTOR0: StaticCell<Executor> = StaticCell::new();
static EXECUTOR1: StaticCell<Executor> = StaticCell::new();

/// Push-pull output, initially low
fn output(pin: Peri<'static, AnyPin>) -> RpOutput<'static> {
    RpOutput::new(Output::new(pin, Level::Low))
}

/// Mount the image archive, falling back to an empty store
fn mount_store() -> RomStore<'static> {
    match RomStore::mount(IMAGE_ARCHIVE) {
        Ok(store) => {
            info!("Image store mounted ({} files)", store.len());
            store
        }
        Err(e) => {
            error!("Image store unavailable: {}", e);
            RomStore::empty()
        }
    }
}

#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Glimmer firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let mut bank: PinBank<Peri<'static, AnyPin>> = PinBank::new([
        p.PIN_0.into(),
        p.PIN_1.into(),
        p.PIN_2.into(),
        p.PIN_3.into(),
        p.PIN_4.into(),
        p.PIN_5.into(),
        p.PIN_6.into(),
        p.PIN_7.into(),
        p.PIN_8.into(),
        p.PIN_9.into(),
        p.PIN_10.into(),
        p.PIN_11.into(),
        p.PIN_12.into(),
        p.PIN_13.into(),
        p.PIN_14.into(),
        p.PIN_15.into(),
        p.PIN_16.into(),
        p.PIN_17.into(),
        p.PIN_18.into(),
        p.PIN_19.into(),
        p.PIN_20.into(),
        p.PIN_21.into(),
        p.PIN_22.into(),
        p.PIN_23.into(),
        p.PIN_24.into(),
        p.PIN_25.into(),
        p.PIN_26.into(),
        p.PIN_27.into(),
        p.PIN_28.into(),
        p.PIN_29.into(),
    ]);

    let [r1, g1, b1, r2, g2, b2, a, b, c, d, e, clk, lat, oe] =
        match config::HUB75_PINS.take(&mut bank) {
            Ok(pins) => pins.map(output),
            Err(err) => defmt::panic!("HUB75 pin map invalid: {}", err),
        };
    let pins = Hub75Pins {
        r1,
        g1,
        b1,
        r2,
        g2,
        b2,
        a,
        b,
        c,
        d,
        e,
        clk,
        lat,
        oe,
    };
    let matrix: tasks::Matrix = Hub75::new(pins, Delay);
    info!("HUB75 panel initialized on {}", config::HUB75_PINS.pins());

    let store = mount_store();
    log_contents(&store);

    spawn_core1(p.CORE1, CORE1_STACK.init(Stack::new()), move || {
        let executor1 = EXECUTOR1.init(Executor::new());
        executor1.run(|spawner| spawner.spawn(unwrap!(tasks::refresh_task(matrix))))
    });

    info!("Starting slideshow");
    let executor0 = EXECUTOR0.init(Executor::new());
    executor0.run(|spawner| spawner.spawn(unwrap!(tasks::cycle_task(store))))
}
