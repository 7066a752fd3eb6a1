// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! STM32F777 board bring-up: SPI4 in the DRV8711 frame format, shared by two drivers.

use embedded_hal::spi::{Phase as EhPhase, Polarity as EhPolarity};
use stm32f7xx_hal::{
    gpio::{gpioe, Alternate},
    pac,
    prelude::*,
    rcc::{Clocks, APB2},
    spi::{Mode, Phase, Polarity, Spi},
};

use crate::config::Config;
use crate::drivers::drv8711::{Drv8711, Pins};
use crate::hw::pins::{BoardPins, Spi4Pins};
use crate::hw::spi::{SpiBus, SPI_MODE};
use crate::hw::GpioOut;

pub type Spi4Bus = SpiBus<
    pac::SPI4,
    (
        gpioe::PE12<Alternate<5>>,
        gpioe::PE13<Alternate<5>>,
        gpioe::PE14<Alternate<5>>,
    ),
>;

/// DRV8711 #1: CS on PE4, nSLEEP on PA4, RESET on PA3.
pub type Stepper1 = Drv8711<GpioOut<'E', 4>, GpioOut<'A', 4>, GpioOut<'A', 3>>;

/// DRV8711 #2: CS on PE11, nSLEEP on PD2, RESET on PD1.
pub type Stepper2 = Drv8711<GpioOut<'E', 11>, GpioOut<'D', 2>, GpioOut<'D', 1>>;

/// Both steppers and the bus they share.
pub struct Board {
    pub spi: Spi4Bus,
    pub m1: Stepper1,
    pub m2: Stepper2,
}

/// Translate the `embedded-hal` 1.0 mode into the HAL's SPI mode.
fn hal_mode() -> Mode {
    Mode {
        polarity: match SPI_MODE.polarity {
            EhPolarity::IdleLow => Polarity::IdleLow,
            EhPolarity::IdleHigh => Polarity::IdleHigh,
        },
        phase: match SPI_MODE.phase {
            EhPhase::CaptureOnFirstTransition => Phase::CaptureOnFirstTransition,
            EhPhase::CaptureOnSecondTransition => Phase::CaptureOnSecondTransition,
        },
    }
}

impl Board {
    /// Enable SPI4 with 16-bit words at `config.baudrate` and bind both drivers to it.
    ///
    /// The word size is the `u16` passed to `enable`, the only width `SpiBus` accepts. The
    /// peripheral shifts MSB first out of reset, which is what the DRV8711 expects.
    pub fn new(
        spi4: pac::SPI4,
        pins: BoardPins,
        clocks: &Clocks,
        apb2: &mut APB2,
        config: Config,
    ) -> Self {
        let Spi4Pins {
            sck,
            miso,
            mosi,
            cs1,
            cs2,
        } = pins.spi4;

        let spi = Spi::new(spi4, (sck, miso, mosi)).enable::<u16>(
            hal_mode(),
            config.baudrate.Hz(),
            clocks,
            apb2,
        );

        let m1 = Drv8711::new(
            Pins {
                cs: GpioOut::new(cs1),
                n_sleep: GpioOut::new(pins.m1.nsleep),
                reset: GpioOut::new(pins.m1.reset),
            },
            config,
        );
        let m2 = Drv8711::new(
            Pins {
                cs: GpioOut::new(cs2),
                n_sleep: GpioOut::new(pins.m2.nsleep),
                reset: GpioOut::new(pins.m2.reset),
            },
            config,
        );

        Self {
            spi: SpiBus::new(spi),
            m1,
            m2,
        }
    }
}
