// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and below the
//! application logic.
//!
//! ## Existing drivers
//!
//! - [`drv8711`] – TI DRV8711 stepper motor pre-driver, 16-bit SPI register interface

pub mod drv8711;

pub use drv8711::{Driver, Drv8711};
