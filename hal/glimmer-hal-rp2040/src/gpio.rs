//! GPIO pin bank and output pins
//!
//! The bank owns every GPIO and hands pins out by number, so the wiring
//! table in the firmware decides which pins are driven. Taking a pin twice
//! or a pin the chip does not have is an error.

use embassy_rp::gpio::Output;

/// Number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Reasons a pin cannot be taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number does not exist on this chip
    OutOfRange(u8),
    /// Pin was already taken for another signal
    InUse(u8),
}

/// Pin bank that holds all GPIO pins and allows taking them by number
///
/// Generic over the pin type so the bookkeeping works on the host. The
/// firmware fills it with `Peri<'static, AnyPin>`.
pub struct PinBank<T> {
    pins: [Option<T>; GPIO_COUNT],
}

impl<T> PinBank<T> {
    /// Create a bank from every GPIO, indexed by pin number
    pub fn new(pins: [T; GPIO_COUNT]) -> Self {
        Self {
            pins: pins.map(Some),
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin: u8) -> Result<T, PinError> {
        self.pins
            .get_mut(pin as usize)
            .ok_or(PinError::OutOfRange(pin))?
            .take()
            .ok_or(PinError::InUse(pin))
    }

    /// Number of pins still in the bank
    pub fn available(&self) -> usize {
        self.pins.iter().filter(|p| p.is_some()).count()
    }
}

/// Push-pull output adapted to [`glimmer_hal::OutputPin`]
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl glimmer_hal::OutputPin for RpOutput<'_> {
    #[inline]
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    #[inline]
    fn set_low(&mut self) {
        self.pin.set_low();
    }

    #[inline]
    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
