// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # DRV8711 Driver
//!
//! Register-level driver for the TI DRV8711 stepper motor pre-driver, written in Rust on top of
//! `embedded-hal` 1.0, with board support for an STM32F777 carrying two DRV8711s on SPI4.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Chip select, GPIO control lines, SPI frame format, board pin map |
//! | [`drivers`] | The DRV8711 register driver and typed register layouts |
//! | [`config`] | Construction-time settings (SPI clock) |
//! | [`error`] | Error type carrying the HAL's bus and pin errors |
//! | `board` | STM32F777 bring-up (feature `stm32f7`) |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use drv8711::drivers::drv8711::{Driver, Drv8711, Pins};
//!
//! let mut drv = Drv8711::new(Pins { cs, n_sleep, reset }, Config::default());
//! drv.registers_mut().torque.torque = 0x80;
//! drv.init(&mut spi)?;
//! drv.enable(true)?;
//! let status = drv.read_status(&mut spi)?;
//! ```
//!
//! ## Features
//!
//! - `stm32f7`: board support and the firmware binary.
//! - `defmt` / `log`: driver logging through the chosen backend.
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features stm32f7 --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

// Must come first so the other modules see its macros.
mod fmt;

#[cfg(feature = "stm32f7")]
pub mod board;
pub mod config;
pub mod drivers;
pub mod error;
pub mod hw;

pub use config::Config;
pub use error::Error;
