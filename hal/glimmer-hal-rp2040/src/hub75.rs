//! HUB75 pin map
//!
//! GPIO numbers for the 14 HUB75 signals of a 64x64 (1/32 scan) panel.
//! The pins the panel driver gets are the ones taken from the bank by
//! these numbers.

use crate::gpio::{PinBank, PinError};

/// GPIO assignment for every HUB75 signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hub75PinMap {
    pub r1: u8,
    pub g1: u8,
    pub b1: u8,
    pub r2: u8,
    pub g2: u8,
    pub b2: u8,
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub clk: u8,
    pub lat: u8,
    pub oe: u8,
}

impl Hub75PinMap {
    /// All pin numbers in signal order
    pub const fn pins(&self) -> [u8; 14] {
        [
            self.r1, self.g1, self.b1, self.r2, self.g2, self.b2, self.a, self.b, self.c,
            self.d, self.e, self.clk, self.lat, self.oe,
        ]
    }

    /// Take every pin of the map from the bank, in signal order
    ///
    /// Fails on the first pin that is out of range or already taken.
    pub fn take<T>(&self, bank: &mut PinBank<T>) -> Result<[T; 14], PinError> {
        let [r1, g1, b1, r2, g2, b2, a, b, c, d, e, clk, lat, oe] = self.pins();
        Ok([
            bank.take(r1)?,
            bank.take(g1)?,
            bank.take(b1)?,
            bank.take(r2)?,
            bank.take(g2)?,
            bank.take(b2)?,
            bank.take(a)?,
            bank.take(b)?,
            bank.take(c)?,
            bank.take(d)?,
            bank.take(e)?,
            bank.take(clk)?,
            bank.take(lat)?,
            bank.take(oe)?,
        ])
    }
}
