// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Digital output lines.
//!
//! - `ActiveLevel` records which electrical level means "asserted" on the board wiring.
//! - `ControlLine` is an active-high output that starts low (DRV8711 nSLEEP and RESET).
//! - `GpioOut` adapts an STM32F7 HAL push-pull pin to `embedded_hal::digital::OutputPin`.

use embedded_hal::digital::OutputPin;

/// Whether a line is asserted by driving it high or low.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}

impl ActiveLevel {
    /// Electrical level (true = high) for the given logical state.
    #[inline]
    pub fn level(self, asserted: bool) -> bool {
        match self {
            ActiveLevel::High => asserted,
            ActiveLevel::Low => !asserted,
        }
    }
}

/// Drive `pin` to the electrical level `high`.
#[inline]
pub(crate) fn drive<PIN: OutputPin>(pin: &mut PIN, high: bool) -> Result<(), PIN::Error> {
    if high {
        pin.set_high()
    } else {
        pin.set_low()
    }
}

/// Active-high control output that remembers its last driven state.
pub struct ControlLine<PIN: OutputPin> {
    pin: PIN,
    is_high: bool,
}

impl<PIN: OutputPin> ControlLine<PIN> {
    /// Wrap a pin. Nothing is driven until [`ControlLine::init`].
    pub fn new(pin: PIN) -> Self {
        Self {
            pin,
            is_high: false,
        }
    }

    /// Force the line to its inactive (low) level. Safe to call repeatedly.
    pub fn init(&mut self) -> Result<(), PIN::Error> {
        self.set(false)
    }

    pub fn set(&mut self, high: bool) -> Result<(), PIN::Error> {
        drive(&mut self.pin, high)?;
        self.is_high = high;
        Ok(())
    }

    #[inline]
    pub fn is_high(&self) -> bool {
        self.is_high
    }

    pub fn free(self) -> PIN {
        self.pin
    }
}

#[cfg(feature = "stm32f7")]
pub use self::stm32::GpioOut;

#[cfg(feature = "stm32f7")]
mod stm32 {
    use core::convert::Infallible;

    use embedded_hal::digital::{ErrorType, OutputPin};
    use stm32f7xx_hal::gpio::{self, Output, PushPull};

    /// Push-pull HAL pin exposed through the `embedded-hal` 1.0 output trait.
    pub struct GpioOut<const P: char, const N: u8> {
        pin: gpio::Pin<P, N, Output<PushPull>>,
    }

    impl<const P: char, const N: u8> GpioOut<P, N> {
        pub fn new(pin: gpio::Pin<P, N, Output<PushPull>>) -> Self {
            Self { pin }
        }

        pub fn free(self) -> gpio::Pin<P, N, Output<PushPull>> {
            self.pin
        }
    }

    impl<const P: char, const N: u8> ErrorType for GpioOut<P, N> {
        type Error = Infallible;
    }

    impl<const P: char, const N: u8> OutputPin for GpioOut<P, N> {
        #[inline]
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.pin.set_low();
            Ok(())
        }

        #[inline]
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.pin.set_high();
            Ok(())
        }
    }
}
