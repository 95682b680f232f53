//! Board wiring
//!
//! GPIO numbers of the HUB75 connector. `main` takes exactly these pins
//! from the pin bank.

use glimmer_hal_rp2040::Hub75PinMap;

/// HUB75 connector (Interstate 75 style wiring)
pub const HUB75_PINS: Hub75PinMap = Hub75PinMap {
    r1: 0,
    g1: 1,
    b1: 2,
    r2: 3,
    g2: 4,
    b2: 5,
    a: 6,
    b: 7,
    c: 8,
    d: 9,
    e: 10,
    clk: 11,
    lat: 12,
    oe: 13,
};
