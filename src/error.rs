// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error type shared by the DRV8711 driver and its hardware bindings.

use core::fmt;

/// Failure reported by the HAL underneath the driver.
///
/// The DRV8711 itself never reports errors over SPI; the only failures are those of the bus or
/// of the GPIO lines, carried through unchanged.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<S, P> {
    /// SPI bus error.
    Spi(S),
    /// Chip-select, nSLEEP or RESET line error.
    Pin(P),
}

impl<S, P> Error<S, P> {
    /// `true` if the failure came from the SPI bus rather than one of the control lines.
    #[inline]
    pub fn is_spi(&self) -> bool {
        matches!(self, Error::Spi(_))
    }
}

impl<S: fmt::Debug, P: fmt::Debug> fmt::Display for Error<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Spi(e) => write!(f, "SPI error: {:?}", e),
            Error::Pin(e) => write!(f, "GPIO error: {:?}", e),
        }
    }
}
