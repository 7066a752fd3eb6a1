// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial Peripheral Interface (SPI) abstraction layer.
//!
//! - The DRV8711 bus settings (`SPI_MODE`, `RX_PULL_UP`, `CS_ACTIVE`). Frames are 16-bit words,
//!   fixed by the `u16` word type of the bus.
//! - `ChipSelect` is a manual CS output with a configurable active level, generic over any
//!   `embedded-hal` output pin.
//! - `SpiBus` wraps an enabled STM32F7 HAL SPI instance with 16-bit words (feature `stm32f7`).

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Mode, MODE_0};

use crate::hw::gpio::{drive, ActiveLevel};

/// CPOL = 0, CPHA = 0: data sampled on the rising edge, clock idles low.
pub const SPI_MODE: Mode = MODE_0;

/// SDATO on the DRV8711 is open-drain, so the bus input needs a pull-up.
pub const RX_PULL_UP: bool = true;

/// The DRV8711 SCS input is active-high, the opposite of the usual SPI convention.
pub const CS_ACTIVE: ActiveLevel = ActiveLevel::High;

/// Manual chip-select line, generic over any output pin.
///
/// Polarity is fixed at construction. The line is not touched until [`ChipSelect::init`].
pub struct ChipSelect<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    selected: bool,
}

impl<PIN: OutputPin> ChipSelect<PIN> {
    pub fn new(pin: PIN, active: ActiveLevel) -> Self {
        Self {
            pin,
            active,
            selected: false,
        }
    }

    /// Chip select asserted by driving the pin high (inverted polarity).
    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    /// Chip select asserted by driving the pin low, the usual SPI convention. The DRV8711 uses
    /// [`CS_ACTIVE`] instead.
    pub fn active_low(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Drive the line to its inactive level.
    pub fn init(&mut self) -> Result<(), PIN::Error> {
        self.deselect()
    }

    /// Assert the chip select.
    #[inline]
    pub fn select(&mut self) -> Result<(), PIN::Error> {
        drive(&mut self.pin, self.active.level(true))?;
        self.selected = true;
        Ok(())
    }

    /// Deassert the chip select.
    #[inline]
    pub fn deselect(&mut self) -> Result<(), PIN::Error> {
        drive(&mut self.pin, self.active.level(false))?;
        self.selected = false;
        Ok(())
    }

    #[inline]
    pub fn active_level(&self) -> ActiveLevel {
        self.active
    }

    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}

#[cfg(feature = "stm32f7")]
pub use self::stm32::{BusError, SpiBus};

#[cfg(feature = "stm32f7")]
mod stm32 {
    use embedded_hal::spi::{self as eh, ErrorKind, ErrorType};
    use stm32f7xx_hal::{
        prelude::*,
        spi::{self, Enabled, Spi},
    };

    /// HAL SPI error exposed through the `embedded-hal` 1.0 error trait.
    #[derive(Debug)]
    pub struct BusError(pub spi::Error);

    impl eh::Error for BusError {
        fn kind(&self) -> ErrorKind {
            match self.0 {
                spi::Error::Overrun => ErrorKind::Overrun,
                spi::Error::ModeFault => ErrorKind::ModeFault,
                _ => ErrorKind::Other,
            }
        }
    }

    /// Wrapper around an enabled HAL SPI instance (16-bit words).
    pub struct SpiBus<I, P> {
        spi: Spi<I, P, Enabled<u16>>,
    }

    impl<I, P> SpiBus<I, P>
    where
        I: spi::Instance,
        P: spi::Pins<I>,
    {
        pub fn new(spi: Spi<I, P, Enabled<u16>>) -> Self {
            Self { spi }
        }

        /// Perform a blocking, full-duplex transfer of one 16-bit word.
        pub fn transfer_word(&mut self, word: u16) -> Result<u16, spi::Error> {
            let mut tmp = [word];
            self.spi.transfer(&mut tmp)?;
            Ok(tmp[0])
        }

        pub fn free(self) -> Spi<I, P, Enabled<u16>> {
            self.spi
        }
    }

    impl<I, P> ErrorType for SpiBus<I, P>
    where
        I: spi::Instance,
        P: spi::Pins<I>,
    {
        type Error = BusError;
    }

    impl<I, P> eh::SpiBus<u16> for SpiBus<I, P>
    where
        I: spi::Instance,
        P: spi::Pins<I>,
    {
        fn read(&mut self, words: &mut [u16]) -> Result<(), Self::Error> {
            for w in words.iter_mut() {
                *w = self.transfer_word(0x0000).map_err(BusError)?;
            }
            Ok(())
        }

        fn write(&mut self, words: &[u16]) -> Result<(), Self::Error> {
            for &w in words {
                let _ = self.transfer_word(w).map_err(BusError)?;
            }
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u16], write: &[u16]) -> Result<(), Self::Error> {
            let len = read.len().max(write.len());
            for i in 0..len {
                let tx = write.get(i).copied().unwrap_or(0x0000);
                let rx = self.transfer_word(tx).map_err(BusError)?;
                if let Some(slot) = read.get_mut(i) {
                    *slot = rx;
                }
            }
            Ok(())
        }

        fn transfer_in_place(&mut self, words: &mut [u16]) -> Result<(), Self::Error> {
            for w in words.iter_mut() {
                *w = self.transfer_word(*w).map_err(BusError)?;
            }
            Ok(())
        }

        /// Every transfer above waits for its receive word, so the bus is already idle.
        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }
}
