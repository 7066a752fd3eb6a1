// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod gpio;
#[cfg(feature = "stm32f7")]
pub mod pins;
pub mod spi;

pub use gpio::{ActiveLevel, ControlLine};
pub use spi::ChipSelect;

#[cfg(feature = "stm32f7")]
pub use gpio::GpioOut;
#[cfg(feature = "stm32f7")]
pub use pins::BoardPins;
#[cfg(feature = "stm32f7")]
pub use spi::SpiBus;
