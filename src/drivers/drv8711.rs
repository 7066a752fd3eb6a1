// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! DRV8711 SPI stepper motor pre-driver.
//!
//! This module handles SPI framing and register access for the DRV8711. Higher-level motor control
//! can be layered on top of these primitives.
//!
//! Every access is a single 16-bit frame, MSB first:
//!
//! | Bits    | Meaning                         |
//! | ------- | ------------------------------- |
//! | 15      | Direction (1 = read, 0 = write) |
//! | 14..12  | Register address                |
//! | 11..0   | Data                            |
//!
//! On a read the chip shifts the register contents out during the same frame. Only the low 12 bits
//! of the response are defined.
//!
//! The SPI bus is passed in as `&mut` to each method so that several DRV8711 instances, each with
//! its own chip select, can share the same bus.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::config::Config;
use crate::error::Error;
use crate::hw::gpio::ControlLine;
use crate::hw::spi::{ChipSelect, CS_ACTIVE};

pub mod registers;

pub use registers::{Mismatch, Register, Registers, Status};

// Register addresses
pub mod reg {
    pub const CTRL: u8 = 0x0;
    pub const TORQUE: u8 = 0x1;
    pub const OFF: u8 = 0x2;
    pub const BLANK: u8 = 0x3;
    pub const DECAY: u8 = 0x4;
    pub const STALL: u8 = 0x5;
    pub const DRIVE: u8 = 0x6;
    pub const STATUS: u8 = 0x7;
}

/// Direction flag, or'ed into the address nibble for reads.
pub const READ: u8 = 0b1000;

/// Defined bits of a register payload.
pub const DATA_MASK: u16 = 0x0FFF;

/// How long RESET is held high by [`Driver::reset`].
pub const RESET_PULSE_US: u32 = 10;

/// Build a write word from a 3-bit register address and a 12-bit payload.
#[inline]
pub const fn write_word(addr: u8, data: u16) -> u16 {
    (((addr & 0x7) as u16) << 12) | (data & DATA_MASK)
}

/// Build the request word that reads register `addr`.
#[inline]
pub const fn read_request(addr: u8) -> u16 {
    (((addr | READ) & 0xF) as u16) << 12
}

/// Register-level access to one DRV8711.
///
/// Implementors supply the hardware hooks (GPIO, SPI and chip-select setup, the raw frame
/// primitives and the sleep line). Initialization order, read masking and the status helpers are
/// provided on top of them and should not be overridden.
pub trait Driver<SPI> {
    type Error;

    /// Configure nSLEEP and RESET as outputs driven low. Idempotent.
    fn init_gpio(&mut self) -> Result<(), Self::Error>;

    /// Bring the bus into the DRV8711 frame format. Idempotent, so every chip sharing the bus
    /// may run it.
    fn init_spi(&mut self, spi: &mut SPI) -> Result<(), Self::Error>;

    /// Configure this chip's select line as active-high and park it inactive.
    fn init_cs(&mut self) -> Result<(), Self::Error>;

    /// Register table written by [`Driver::init_registers`].
    fn registers(&self) -> &Registers;

    /// Transmit one pre-encoded frame, discarding the response.
    fn write(&mut self, spi: &mut SPI, word: u16) -> Result<(), Self::Error>;

    /// Transmit one frame and return the raw 16-bit response, undefined bits included.
    fn transfer(&mut self, spi: &mut SPI, word: u16) -> Result<u16, Self::Error>;

    /// Drive nSLEEP high (awake) or low (sleep).
    fn enable(&mut self, enable: bool) -> Result<(), Self::Error>;

    /// Drive RESET to `high`.
    fn set_reset(&mut self, high: bool) -> Result<(), Self::Error>;

    /// Configure GPIO, the bus and chip select, then write all eight registers.
    ///
    /// Nothing is read back; use [`Driver::verify`] for that.
    fn init(&mut self, spi: &mut SPI) -> Result<(), Self::Error> {
        self.init_gpio()?;
        self.init_spi(spi)?;
        self.init_cs()?;
        self.init_registers(spi)?;
        debug!("drv8711: initialized");
        Ok(())
    }

    /// Write CTRL, TORQUE, OFF, BLANK, DECAY, STALL, DRIVE and STATUS, in that order.
    ///
    /// Later registers depend on settings established by earlier ones, so the order is fixed.
    fn init_registers(&mut self, spi: &mut SPI) -> Result<(), Self::Error> {
        let words = self.registers().words();
        for word in words {
            self.write(spi, word)?;
        }
        Ok(())
    }

    /// Read register `addr`. The top four bits of the response are always discarded.
    fn read(&mut self, spi: &mut SPI, addr: u8) -> Result<u16, Self::Error> {
        let raw = self.transfer(spi, read_request(addr))?;
        Ok(raw & DATA_MASK)
    }

    /// Read and decode a typed register.
    fn read_register<R: Register>(&mut self, spi: &mut SPI) -> Result<R, Self::Error> {
        Ok(R::from_data(self.read(spi, R::ADDRESS)?))
    }

    /// Encode and write a typed register.
    fn write_register<R: Register>(&mut self, spi: &mut SPI, value: R) -> Result<(), Self::Error> {
        self.write(spi, value.word())
    }

    /// Read the STATUS register.
    fn read_status(&mut self, spi: &mut SPI) -> Result<Status, Self::Error> {
        let status: Status = self.read_register(spi)?;
        if status.has_fault() {
            warn!("drv8711: fault status {:#x}", status.raw());
        }
        Ok(status)
    }

    /// Clear all latched STATUS flags.
    fn clear_status(&mut self, spi: &mut SPI) -> Result<(), Self::Error> {
        self.write(spi, write_word(reg::STATUS, 0))
    }

    /// Read back the configuration registers and return the first one that differs from the
    /// table, if any.
    fn verify(&mut self, spi: &mut SPI) -> Result<Option<Mismatch>, Self::Error> {
        let expected = self.registers().expected();
        for (address, expected) in expected {
            let actual = self.read(spi, address)?;
            if actual != expected {
                warn!(
                    "drv8711: register {} reads {:#x}, expected {:#x}",
                    address,
                    actual,
                    expected
                );
                return Ok(Some(Mismatch {
                    address,
                    expected,
                    actual,
                }));
            }
        }
        Ok(None)
    }

    /// Pulse RESET. All registers return to their power-on values, so run
    /// [`Driver::init_registers`] afterwards.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.set_reset(true)?;
        delay.delay_us(RESET_PULSE_US);
        self.set_reset(false)
    }
}

/// Control lines owned by one DRV8711.
pub struct Pins<CS, SLEEP, RESET> {
    /// SCS, active-high.
    pub cs: CS,
    /// nSLEEP: high = awake.
    pub n_sleep: SLEEP,
    /// RESET: high = reset.
    pub reset: RESET,
}

/// DRV8711 bound to its chip select, nSLEEP and RESET lines.
///
/// The bus itself is not owned; pass it to each call.
pub struct Drv8711<CS, SLEEP, RESET>
where
    CS: OutputPin,
    SLEEP: OutputPin,
    RESET: OutputPin,
{
    cs: ChipSelect<CS>,
    n_sleep: ControlLine<SLEEP>,
    reset: ControlLine<RESET>,
    config: Config,
    registers: Registers,
}

impl<CS, SLEEP, RESET> Drv8711<CS, SLEEP, RESET>
where
    CS: OutputPin,
    SLEEP: OutputPin<Error = CS::Error>,
    RESET: OutputPin<Error = CS::Error>,
{
    /// Bind the control lines. Nothing is driven until [`Driver::init`].
    pub fn new(pins: Pins<CS, SLEEP, RESET>, config: Config) -> Self {
        Self {
            cs: ChipSelect::new(pins.cs, CS_ACTIVE),
            n_sleep: ControlLine::new(pins.n_sleep),
            reset: ControlLine::new(pins.reset),
            config,
            registers: Registers::default(),
        }
    }

    /// Replace the register table written during initialization.
    pub fn with_registers(mut self, registers: Registers) -> Self {
        self.registers = registers;
        self
    }

    /// Mutable access to the register table, e.g. to adjust values before `init`.
    #[inline]
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn chip_select(&self) -> &ChipSelect<CS> {
        &self.cs
    }

    /// Whether nSLEEP is currently driven high.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.n_sleep.is_high()
    }

    /// Release the control lines.
    pub fn free(self) -> Pins<CS, SLEEP, RESET> {
        Pins {
            cs: self.cs.free(),
            n_sleep: self.n_sleep.free(),
            reset: self.reset.free(),
        }
    }

    /// Run one frame with chip select asserted. CS is released even if the bus fails.
    ///
    /// When both the bus and the release fail, the bus error is returned.
    fn frame<SPI, F, T>(&mut self, spi: &mut SPI, op: F) -> Result<T, Error<SPI::Error, CS::Error>>
    where
        SPI: SpiBus<u16>,
        F: FnOnce(&mut SPI) -> Result<T, SPI::Error>,
    {
        self.cs.select().map_err(Error::Pin)?;
        let result = op(&mut *spi).and_then(|value| spi.flush().map(|_| value));
        let released = self.cs.deselect();
        let value = result.map_err(Error::Spi)?;
        released.map_err(Error::Pin)?;
        Ok(value)
    }
}

impl<SPI, CS, SLEEP, RESET> Driver<SPI> for Drv8711<CS, SLEEP, RESET>
where
    SPI: SpiBus<u16>,
    CS: OutputPin,
    SLEEP: OutputPin<Error = CS::Error>,
    RESET: OutputPin<Error = CS::Error>,
{
    type Error = Error<SPI::Error, CS::Error>;

    fn init_gpio(&mut self) -> Result<(), Self::Error> {
        self.n_sleep.init().map_err(Error::Pin)?;
        self.reset.init().map_err(Error::Pin)
    }

    /// Word size is fixed by the `SpiBus<u16>` bound and the clock mode by the board when it
    /// builds the peripheral (see `hw::spi::SPI_MODE`); here the bus is only drained.
    fn init_spi(&mut self, spi: &mut SPI) -> Result<(), Self::Error> {
        spi.flush().map_err(Error::Spi)
    }

    fn init_cs(&mut self) -> Result<(), Self::Error> {
        self.cs.init().map_err(Error::Pin)
    }

    fn registers(&self) -> &Registers {
        &self.registers
    }

    fn write(&mut self, spi: &mut SPI, word: u16) -> Result<(), Self::Error> {
        trace!("drv8711: write {:#x}", word);
        self.frame(spi, |spi| spi.write(&[word]))
    }

    fn transfer(&mut self, spi: &mut SPI, word: u16) -> Result<u16, Self::Error> {
        let mut buf = [word];
        self.frame(spi, |spi| spi.transfer_in_place(&mut buf))?;
        trace!("drv8711: transfer {:#x} -> {:#x}", word, buf[0]);
        Ok(buf[0])
    }

    fn enable(&mut self, enable: bool) -> Result<(), Self::Error> {
        self.n_sleep.set(enable).map_err(Error::Pin)
    }

    fn set_reset(&mut self, high: bool) -> Result<(), Self::Error> {
        self.reset.set(high).map_err(Error::Pin)
    }
}

#[cfg(test)]
mod tests {
    use super::registers::{StepMode, Torque};
    use super::*;
    use crate::hw::gpio::ActiveLevel;
    use embedded_hal::digital::ErrorKind as PinErrorKind;
    use embedded_hal::spi::ErrorKind as SpiErrorKind;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    type TestDriver = Drv8711<PinMock, PinMock, PinMock>;

    /// Chip-select expectations for `n` frames.
    fn cs_frames(n: usize) -> Vec<PinTransaction> {
        let mut v = Vec::new();
        for _ in 0..n {
            v.push(PinTransaction::set(State::High));
            v.push(PinTransaction::set(State::Low));
        }
        v
    }

    fn write_frame(word: u16) -> [SpiTransaction<u16>; 2] {
        [
            SpiTransaction::write_vec(vec![word]),
            SpiTransaction::flush(),
        ]
    }

    fn read_frame(request: u16, response: u16) -> [SpiTransaction<u16>; 2] {
        [
            SpiTransaction::transfer_in_place(vec![request], vec![response]),
            SpiTransaction::flush(),
        ]
    }

    fn driver(cs: &PinMock, sleep: &PinMock, reset: &PinMock) -> TestDriver {
        Drv8711::new(
            Pins {
                cs: cs.clone(),
                n_sleep: sleep.clone(),
                reset: reset.clone(),
            },
            Config::default(),
        )
    }

    #[test]
    fn word_encoding() {
        assert_eq!(write_word(reg::TORQUE, 0x1FF), 0x11FF);
        assert_eq!(write_word(reg::STATUS, 0xFFFF), 0x7FFF);
        assert_eq!(read_request(reg::STALL), 0xD000);
        assert_eq!(read_request(reg::STALL) >> 12, (reg::STALL | READ) as u16);
        assert_eq!(read_request(reg::CTRL), 0x8000);
    }

    #[test]
    fn init_writes_all_registers_in_order() {
        let mut spi_expect = vec![SpiTransaction::flush()];
        for word in [0x0C10, 0x11FF, 0x2030, 0x3080, 0x4110, 0x5040, 0x6A59, 0x7000] {
            spi_expect.extend(write_frame(word));
        }
        let mut spi = SpiMock::new(&spi_expect);

        let mut cs_expect = vec![PinTransaction::set(State::Low)];
        cs_expect.extend(cs_frames(8));
        let mut cs = PinMock::new(&cs_expect);
        let mut sleep = PinMock::new(&[PinTransaction::set(State::Low)]);
        let mut reset = PinMock::new(&[PinTransaction::set(State::Low)]);

        let mut drv = driver(&cs, &sleep, &reset);
        drv.init(&mut spi).unwrap();
        assert_eq!(drv.chip_select().active_level(), ActiveLevel::High);
        assert!(!drv.is_enabled());

        spi.done();
        cs.done();
        sleep.done();
        reset.done();
    }

    #[test]
    fn init_uses_overridden_registers() {
        let mut regs = Registers::default();
        regs.ctrl.step_mode = StepMode::Sixteenth;
        regs.torque = Torque {
            torque: 0x80,
            ..regs.torque
        };

        let mut spi_expect = vec![SpiTransaction::flush()];
        for word in [0x0C20, 0x1180, 0x2030, 0x3080, 0x4110, 0x5040, 0x6A59, 0x7000] {
            spi_expect.extend(write_frame(word));
        }
        let mut spi = SpiMock::new(&spi_expect);
        let mut cs_expect = vec![PinTransaction::set(State::Low)];
        cs_expect.extend(cs_frames(8));
        let mut cs = PinMock::new(&cs_expect);
        let mut sleep = PinMock::new(&[PinTransaction::set(State::Low)]);
        let mut reset = PinMock::new(&[PinTransaction::set(State::Low)]);

        let mut drv = driver(&cs, &sleep, &reset).with_registers(regs);
        drv.init(&mut spi).unwrap();

        spi.done();
        cs.done();
        sleep.done();
        reset.done();
    }

    #[test]
    fn enable_toggles_only_sleep_line() {
        let mut cs = PinMock::new(&[] as &[PinTransaction]);
        let mut sleep = PinMock::new(&[
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
        ]);
        let mut reset = PinMock::new(&[] as &[PinTransaction]);

        let mut drv = driver(&cs, &sleep, &reset);
        Driver::<SpiMock<u16>>::enable(&mut drv, true).unwrap();
        assert!(drv.is_enabled());
        Driver::<SpiMock<u16>>::enable(&mut drv, false).unwrap();
        assert!(!drv.is_enabled());

        cs.done();
        sleep.done();
        reset.done();
    }

    #[test]
    fn read_masks_undefined_bits() {
        let mut spi = SpiMock::new(&[
            read_frame(0xD000, 0xFFFF),
            read_frame(0x9000, 0xA123),
            read_frame(0xF000, 0x0042),
        ]
        .concat());
        let mut cs = PinMock::new(&cs_frames(3));
        let mut sleep = PinMock::new(&[] as &[PinTransaction]);
        let mut reset = PinMock::new(&[] as &[PinTransaction]);

        let mut drv = driver(&cs, &sleep, &reset);
        assert_eq!(drv.read(&mut spi, reg::STALL).unwrap(), 0x0FFF);
        assert_eq!(drv.read(&mut spi, reg::TORQUE).unwrap(), 0x0123);
        assert_eq!(drv.read(&mut spi, reg::STATUS).unwrap(), 0x0042);

        spi.done();
        cs.done();
        sleep.done();
        reset.done();
    }

    #[test]
    fn write_sends_word_unchanged() {
        let mut spi = SpiMock::new(&write_frame(0x8FFF));
        let mut cs = PinMock::new(&cs_frames(1));
        let mut sleep = PinMock::new(&[] as &[PinTransaction]);
        let mut reset = PinMock::new(&[] as &[PinTransaction]);

        let mut drv = driver(&cs, &sleep, &reset);
        drv.write(&mut spi, 0x8FFF).unwrap();

        spi.done();
        cs.done();
        sleep.done();
        reset.done();
    }

    #[test]
    fn read_status_and_clear() {
        let mut spi = SpiMock::new(&[read_frame(0xF000, 0xF0C2), write_frame(0x7000)].concat());
        let mut cs = PinMock::new(&cs_frames(2));
        let mut sleep = PinMock::new(&[] as &[PinTransaction]);
        let mut reset = PinMock::new(&[] as &[PinTransaction]);

        let mut drv = driver(&cs, &sleep, &reset);
        let status = drv.read_status(&mut spi).unwrap();
        assert!(status.stall_latched());
        assert!(status.stall());
        assert!(status.aocp());
        assert!(status.has_fault());
        drv.clear_status(&mut spi).unwrap();

        spi.done();
        cs.done();
        sleep.done();
        reset.done();
    }

    #[test]
    fn verify_reports_first_mismatch() {
        // CTRL and TORQUE match, OFF comes back with a different off time.
        let mut spi = SpiMock::new(&[
            read_frame(0x8000, 0xFC10),
            read_frame(0x9000, 0x01FF),
            read_frame(0xA000, 0x0031),
        ]
        .concat());
        let mut cs = PinMock::new(&cs_frames(3));
        let mut sleep = PinMock::new(&[] as &[PinTransaction]);
        let mut reset = PinMock::new(&[] as &[PinTransaction]);

        let mut drv = driver(&cs, &sleep, &reset);
        let mismatch = drv.verify(&mut spi).unwrap();
        assert_eq!(
            mismatch,
            Some(Mismatch {
                address: reg::OFF,
                expected: 0x030,
                actual: 0x031,
            })
        );

        spi.done();
        cs.done();
        sleep.done();
        reset.done();
    }

    #[test]
    fn verify_passes_on_matching_readback() {
        let regs = Registers::default();
        let mut spi_expect = Vec::new();
        for (addr, data) in regs.expected() {
            spi_expect.extend(read_frame(read_request(addr), data));
        }
        let mut spi = SpiMock::new(&spi_expect);
        let mut cs = PinMock::new(&cs_frames(7));
        let mut sleep = PinMock::new(&[] as &[PinTransaction]);
        let mut reset = PinMock::new(&[] as &[PinTransaction]);

        let mut drv = driver(&cs, &sleep, &reset);
        assert_eq!(drv.verify(&mut spi).unwrap(), None);

        spi.done();
        cs.done();
        sleep.done();
        reset.done();
    }

    #[test]
    fn typed_register_round_trip_over_bus() {
        let mut spi = SpiMock::new(&[read_frame(0x9000, 0x0280), write_frame(0x1290)].concat());
        let mut cs = PinMock::new(&cs_frames(2));
        let mut sleep = PinMock::new(&[] as &[PinTransaction]);
        let mut reset = PinMock::new(&[] as &[PinTransaction]);

        let mut drv = driver(&cs, &sleep, &reset);
        let mut torque: Torque = drv.read_register(&mut spi).unwrap();
        assert_eq!(torque.torque, 0x80);
        torque.torque = 0x90;
        drv.write_register(&mut spi, torque).unwrap();

        spi.done();
        cs.done();
        sleep.done();
        reset.done();
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn reset_pulses_reset_line() {
        let mut cs = PinMock::new(&[] as &[PinTransaction]);
        let mut sleep = PinMock::new(&[] as &[PinTransaction]);
        let mut reset = PinMock::new(&[
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
        ]);

        let mut drv = driver(&cs, &sleep, &reset);
        Driver::<SpiMock<u16>>::reset(&mut drv, &mut NoDelay).unwrap();

        cs.done();
        sleep.done();
        reset.done();
    }

    struct FailingBus;

    impl embedded_hal::spi::ErrorType for FailingBus {
        type Error = SpiErrorKind;
    }

    impl SpiBus<u16> for FailingBus {
        fn read(&mut self, _words: &mut [u16]) -> Result<(), Self::Error> {
            Err(SpiErrorKind::Overrun)
        }

        fn write(&mut self, _words: &[u16]) -> Result<(), Self::Error> {
            Err(SpiErrorKind::Overrun)
        }

        fn transfer(&mut self, _read: &mut [u16], _write: &[u16]) -> Result<(), Self::Error> {
            Err(SpiErrorKind::Overrun)
        }

        fn transfer_in_place(&mut self, _words: &mut [u16]) -> Result<(), Self::Error> {
            Err(SpiErrorKind::Overrun)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    struct FailingPin;

    impl embedded_hal::digital::ErrorType for FailingPin {
        type Error = PinErrorKind;
    }

    impl OutputPin for FailingPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(PinErrorKind::Other)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(PinErrorKind::Other)
        }
    }

    #[test]
    fn bus_error_still_releases_chip_select() {
        let mut cs = PinMock::new(&cs_frames(2));
        let mut sleep = PinMock::new(&[] as &[PinTransaction]);
        let mut reset = PinMock::new(&[] as &[PinTransaction]);

        let mut drv = driver(&cs, &sleep, &reset);
        let err = drv.write(&mut FailingBus, 0x0C10).unwrap_err();
        assert!(err.is_spi());
        assert!(!drv.chip_select().is_selected());
        let err = drv.read(&mut FailingBus, reg::CTRL).unwrap_err();
        assert!(err.is_spi());

        cs.done();
        sleep.done();
        reset.done();
    }

    /// Drives high fine but fails to go low, so CS can be asserted and never released.
    struct StuckHighPin;

    impl embedded_hal::digital::ErrorType for StuckHighPin {
        type Error = PinErrorKind;
    }

    impl OutputPin for StuckHighPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(PinErrorKind::Other)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn bus_error_wins_over_release_error() {
        let pins = Pins {
            cs: StuckHighPin,
            n_sleep: StuckHighPin,
            reset: StuckHighPin,
        };
        let mut drv = Drv8711::new(pins, Config::default());
        let err = drv.write(&mut FailingBus, 0x0C10).unwrap_err();
        assert_eq!(err, Error::Spi(SpiErrorKind::Overrun));
        let err = drv.read(&mut FailingBus, reg::STATUS).unwrap_err();
        assert_eq!(err, Error::Spi(SpiErrorKind::Overrun));
    }

    #[test]
    fn release_error_reported_after_good_frame() {
        let pins = Pins {
            cs: StuckHighPin,
            n_sleep: StuckHighPin,
            reset: StuckHighPin,
        };
        let mut drv = Drv8711::new(pins, Config::default());
        let mut spi = SpiMock::new(&write_frame(0x0C10));
        let err = drv.write(&mut spi, 0x0C10).unwrap_err();
        assert_eq!(err, Error::Pin(PinErrorKind::Other));
        spi.done();
    }

    #[test]
    fn pin_error_is_propagated() {
        let pins = Pins {
            cs: FailingPin,
            n_sleep: FailingPin,
            reset: FailingPin,
        };
        let mut drv = Drv8711::new(pins, Config::default());
        let err = Driver::<FailingBus>::init_gpio(&mut drv).unwrap_err();
        assert_eq!(err, Error::Pin(PinErrorKind::Other));
        let err = drv.write(&mut FailingBus, 0x0C10).unwrap_err();
        assert_eq!(err, Error::Pin(PinErrorKind::Other));
    }
}
