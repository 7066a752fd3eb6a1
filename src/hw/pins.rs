// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F777 board carrying two DRV8711 stepper drivers on SPI4.

use stm32f7xx_hal::{
    gpio::{gpioa, gpiod, gpioe, Alternate, Output, PushPull},
    pac,
    prelude::*,
};

use crate::hw::spi::RX_PULL_UP;

/// All board pins. Construct this once at startup using:
///
/// ```rust,ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub spi4: Spi4Pins,
    pub m1: Motor1Pins,
    pub m2: Motor2Pins,
}

/// SPI4 SCK/MISO/MOSI and one chip select per DRV8711.
pub struct Spi4Pins {
    pub sck: gpioe::PE12<Alternate<5>>,
    /// Pulled up: DRV8711 SDATO is open-drain.
    pub miso: gpioe::PE13<Alternate<5>>,
    pub mosi: gpioe::PE14<Alternate<5>>,
    pub cs1: gpioe::PE4<Output<PushPull>>,
    pub cs2: gpioe::PE11<Output<PushPull>>,
}

/// Stepper 1 (DRV8711 #1) control pins
pub struct Motor1Pins {
    pub nsleep: gpioa::PA4<Output<PushPull>>,
    pub reset: gpioa::PA3<Output<PushPull>>,
}

/// Stepper 2 (DRV8711 #2) control pins
pub struct Motor2Pins {
    pub nsleep: gpiod::PD2<Output<PushPull>>,
    pub reset: gpiod::PD1<Output<PushPull>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            spi4: Spi4Pins {
                sck: gpioe.pe12.into_alternate::<5>(),
                miso: gpioe.pe13.into_alternate::<5>().internal_pull_up(RX_PULL_UP),
                mosi: gpioe.pe14.into_alternate::<5>(),
                cs1: gpioe.pe4.into_push_pull_output(),
                cs2: gpioe.pe11.into_push_pull_output(),
            },

            m1: Motor1Pins {
                nsleep: gpioa.pa4.into_push_pull_output(),
                reset: gpioa.pa3.into_push_pull_output(),
            },

            m2: Motor2Pins {
                nsleep: gpiod.pd2.into_push_pull_output(),
                reset: gpiod.pd1.into_push_pull_output(),
            },
        }
    }
}
