//! HUB75 scan driver
//!
//! Bit-banged driver for 1/32 scan RGB matrices. Each refresh shows the
//! frame once using binary code modulation: the top [`COLOR_DEPTH_BITS`]
//! bits of every channel are shifted out as separate planes, and plane
//! `n` is lit for twice as long as plane `n - 1`.
//!
//! On-times are whole microseconds, the resolution of the embassy delay.
//! Brightness scales the least significant plane and the other planes are
//! exact multiples of it, so the plane weights stay 1:2:4:8 at any level.
//!
//! Two rows are driven at once, `y` on R1/G1/B1 and `y + H/2` on
//! R2/G2/B2, selected by the A..E address lines.

use embedded_hal::delay::DelayNs;
use glimmer_hal::{OutputPin, Rgb565};

use crate::framebuffer::FrameBuffer;

/// Bit planes shown per refresh
pub const COLOR_DEPTH_BITS: u8 = 4;

/// On time of the least significant plane at full brightness, in µs
pub const BASE_ON_TIME_US: u32 = 16;

/// On time of the least significant plane at `brightness`
///
/// Never rounds a lit panel down to zero.
pub fn plane_on_time_us(brightness: u8) -> u32 {
    if brightness == 0 {
        return 0;
    }
    (BASE_ON_TIME_US * brightness as u32 / u8::MAX as u32).max(1)
}

/// Panel connector pins
pub struct Hub75Pins<P> {
    pub r1: P,
    pub g1: P,
    pub b1: P,
    pub r2: P,
    pub g2: P,
    pub b2: P,
    pub a: P,
    pub b: P,
    pub c: P,
    pub d: P,
    pub e: P,
    pub clk: P,
    pub lat: P,
    /// Output enable, active low
    pub oe: P,
}

/// HUB75 panel driver
pub struct Hub75<P, D> {
    pins: Hub75Pins<P>,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Hub75<P, D> {
    /// Take the pins and put the panel in a blanked, idle state
    pub fn new(mut pins: Hub75Pins<P>, delay: D) -> Self {
        pins.oe.set_high();
        pins.lat.set_low();
        pins.clk.set_low();
        Self { pins, delay }
    }

    /// Give the pins and delay back
    pub fn release(self) -> (Hub75Pins<P>, D) {
        (self.pins, self.delay)
    }

    /// Show one full frame
    ///
    /// Blocks for the whole scan. Brightness 0 shifts the data but never
    /// enables the outputs.
    pub fn refresh<const W: usize, const H: usize>(&mut self, frame: &FrameBuffer<W, H>) {
        let half = H / 2;
        let on_time = plane_on_time_us(frame.brightness());

        for plane in 0..COLOR_DEPTH_BITS {
            let bit = 8 - COLOR_DEPTH_BITS + plane;

            for row in 0..half {
                self.shift_row(frame.row(row), frame.row(row + half), bit);

                self.pins.oe.set_high();
                self.select_row(row);
                self.pins.lat.set_high();
                self.pins.lat.set_low();

                if on_time > 0 {
                    self.pins.oe.set_low();
                    self.delay.delay_us(on_time << plane);
                    self.pins.oe.set_high();
                }
            }
        }
    }

    /// Clock out one plane of an upper/lower row pair
    fn shift_row(&mut self, upper: &[Rgb565], lower: &[Rgb565], bit: u8) {
        for (top, bottom) in upper.iter().zip(lower) {
            let (r1, g1, b1) = top.to_rgb888();
            let (r2, g2, b2) = bottom.to_rgb888();

            self.pins.r1.set_state((r1 >> bit) & 1 != 0);
            self.pins.g1.set_state((g1 >> bit) & 1 != 0);
            self.pins.b1.set_state((b1 >> bit) & 1 != 0);
            self.pins.r2.set_state((r2 >> bit) & 1 != 0);
            self.pins.g2.set_state((g2 >> bit) & 1 != 0);
            self.pins.b2.set_state((b2 >> bit) & 1 != 0);

            self.pins.clk.set_high();
            self.pins.clk.set_low();
        }
    }

    fn select_row(&mut self, row: usize) {
        self.pins.a.set_state(row & 0x01 != 0);
        self.pins.b.set_state(row & 0x02 != 0);
        self.pins.c.set_state(row & 0x04 != 0);
        self.pins.d.set_state(row & 0x08 != 0);
        self.pins.e.set_state(row & 0x10 != 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_hal::PanelDriver;

    use crate::framebuffer::Panel64;

    #[derive(Default)]
    struct MockPin {
        high: bool,
        rises: usize,
        falls: usize,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.rises += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.falls += 1;
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    /// Delay with a 1 µs tick that rounds requests up, like the RP2040 timer
    #[derive(Default)]
    struct MockDelay {
        delays_ns: Vec<u32>,
    }

    impl MockDelay {
        fn total_ns(&self) -> u64 {
            self.delays_ns.iter().map(|&ns| ns as u64).sum()
        }

        /// Delay of the first row of each plane
        fn plane_delays(&self) -> Vec<u32> {
            self.delays_ns.iter().step_by(32).copied().collect()
        }
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.delays_ns.push(ns.div_ceil(1_000) * 1_000);
        }
    }

    fn pins() -> Hub75Pins<MockPin> {
        Hub75Pins {
            r1: MockPin::default(),
            g1: MockPin::default(),
            b1: MockPin::default(),
            r2: MockPin::default(),
            g2: MockPin::default(),
            b2: MockPin::default(),
            a: MockPin::default(),
            b: MockPin::default(),
            c: MockPin::default(),
            d: MockPin::default(),
            e: MockPin::default(),
            clk: MockPin::default(),
            lat: MockPin::default(),
            oe: MockPin::default(),
        }
    }

    fn scan(frame: &Panel64) -> (Hub75Pins<MockPin>, MockDelay) {
        let mut hub = Hub75::new(pins(), MockDelay::default());
        hub.refresh(frame);
        hub.release()
    }

    const PLANES: usize = COLOR_DEPTH_BITS as usize;

    #[test]
    fn test_new_blanks_outputs() {
        let (pins, _) = Hub75::new(pins(), MockDelay::default()).release();
        assert!(pins.oe.is_set_high());
        assert!(pins.lat.is_set_low());
    }

    #[test]
    fn test_clock_and_latch_counts() {
        let (pins, _) = scan(&Panel64::new());
        assert_eq!(pins.clk.rises, 64 * 32 * PLANES);
        assert_eq!(pins.lat.rises, 32 * PLANES);
        assert!(pins.oe.is_set_high());
    }

    #[test]
    fn test_plane_timing_doubles() {
        let (_, delay) = scan(&Panel64::new());
        // 1 + 2 + 4 + 8 units per row
        assert_eq!(delay.delays_ns.len(), 32 * PLANES);
        assert_eq!(delay.total_ns(), 32 * 15 * BASE_ON_TIME_US as u64 * 1_000);
    }

    #[test]
    fn test_brightness_scales_on_time() {
        let mut frame = Panel64::new();
        frame.set_brightness(0);
        let (pins, delay) = scan(&frame);
        assert!(delay.delays_ns.is_empty());
        assert_eq!(pins.oe.falls, 0);

        // 16 * 51 / 255 = 3.2, truncated to 3 µs
        frame.set_brightness(51);
        let (_, delay) = scan(&frame);
        assert_eq!(delay.total_ns(), 32 * 15 * 3_000);
    }

    #[test]
    fn test_plane_weights_survive_microsecond_tick() {
        let mut frame = Panel64::new();
        frame.set_brightness(50);
        let (_, delay) = scan(&frame);

        let planes = delay.plane_delays();
        assert_eq!(planes, vec![3_000, 6_000, 12_000, 24_000]);
        for (n, &ns) in planes.iter().enumerate() {
            assert_eq!(ns, planes[0] << n);
        }
    }

    #[test]
    fn test_dimmest_level_stays_lit() {
        assert_eq!(plane_on_time_us(0), 0);
        assert_eq!(plane_on_time_us(1), 1);
        assert_eq!(plane_on_time_us(15), 1);
        assert_eq!(plane_on_time_us(u8::MAX), BASE_ON_TIME_US);

        let mut frame = Panel64::new();
        frame.set_brightness(1);
        let (_, delay) = scan(&frame);
        assert_eq!(delay.plane_delays(), vec![1_000, 2_000, 4_000, 8_000]);
    }

    #[test]
    fn test_upper_and_lower_halves() {
        let mut frame = Panel64::new();
        frame.set_pixel(0, 0, Rgb565::RED);
        frame.set_pixel(0, 32, Rgb565::BLUE);
        let (pins, _) = scan(&frame);

        // Set on column 0 of the row and dropped on column 1, every plane
        assert_eq!(pins.r1.rises, PLANES);
        assert_eq!(pins.b2.rises, PLANES);
        assert_eq!(pins.r2.rises, 0);
        assert_eq!(pins.g1.rises, 0);
    }

    #[test]
    fn test_dim_channel_skips_low_planes() {
        let mut frame = Panel64::new();
        // Red 0x80 only has the top bit set
        frame.set_pixel(3, 3, Rgb565::from_rgb888(0x80, 0, 0));
        let (pins, _) = scan(&frame);
        assert_eq!(pins.r1.rises, 1);
    }

    #[test]
    fn test_address_lines() {
        let (pins, _) = scan(&Panel64::new());
        // A toggles every row, E is set for rows 16..32 of each plane
        assert_eq!(pins.a.rises, 16 * PLANES);
        assert_eq!(pins.e.rises, PLANES);
    }
}
