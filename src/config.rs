// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Construction-time configuration.

/// Default SPI clock: 1 MHz.
pub const DEFAULT_BAUDRATE: u32 = 1_000_000;

/// Fixed settings bound to a driver instance when it is constructed.
///
/// There is no way to rebind these afterwards; the chip's behavior is changed through register
/// writes only.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// SPI clock in Hz.
    pub baudrate: u32,
}

impl Config {
    pub const fn new(baudrate: u32) -> Self {
        Self { baudrate }
    }

    /// Set the SPI clock in Hz.
    pub const fn with_baudrate(mut self, baudrate: u32) -> Self {
        self.baudrate = baudrate;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_BAUDRATE)
    }
}
