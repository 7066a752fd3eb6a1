// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Typed DRV8711 register layouts.
//!
//! Each register is a plain struct over its 12-bit payload. [`Registers`] groups all eight in the
//! order they are written during initialization; its `Default` is the chip's power-on state.

use super::{reg, write_word};

/// A DRV8711 register with a fixed address and a 12-bit payload.
pub trait Register: Copy {
    const ADDRESS: u8;

    /// Decode a payload. Bits above the 12-bit data field are ignored.
    fn from_data(data: u16) -> Self;

    /// Encode the 12-bit payload.
    fn data(&self) -> u16;

    /// Complete write word: address in the top nibble, payload below.
    #[inline]
    fn word(&self) -> u16 {
        write_word(Self::ADDRESS, self.data())
    }
}

/// Multi-bit field encodings. Every variant maps to its raw field value; reserved encodings decode
/// to the last listed variant.
macro_rules! field {
    (@last $first:path) => { $first };
    (@last $first:path, $($rest:path),+) => { field!(@last $($rest),+) };
    ($(#[$m:meta])* $name:ident { $($(#[$vm:meta])* $v:ident = $n:expr),+ $(,)? }) => {
        $(#[$m])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum $name {
            $($(#[$vm])* $v = $n),+
        }

        impl $name {
            #[inline]
            pub const fn bits(self) -> u16 {
                self as u16
            }

            pub fn from_bits(bits: u16) -> Self {
                $(if bits == $n { return $name::$v; })+
                field!(@last $($name::$v),+)
            }
        }
    };
}

field!(
    /// Dead time between high- and low-side gate drive (DTIME).
    DeadTime { Ns400 = 0, Ns450 = 1, Ns650 = 2, Ns850 = 3 }
);

field!(
    /// Current-sense amplifier gain (ISGAIN).
    SenseGain { X5 = 0, X10 = 1, X20 = 2, X40 = 3 }
);

field!(
    /// Microstepping resolution (MODE). `1001b` to `1111b` are reserved and decode as 1/256.
    StepMode {
        Full = 0,
        Half = 1,
        Quarter = 2,
        Eighth = 3,
        Sixteenth = 4,
        ThirtySecond = 5,
        SixtyFourth = 6,
        OneHundredTwentyEighth = 7,
        TwoHundredFiftySixth = 8,
    }
);

impl StepMode {
    /// Microsteps per full step.
    pub const fn microsteps(self) -> u16 {
        1 << (self as u16)
    }
}

field!(
    /// Back-EMF sample threshold (SMPLTH).
    BackEmfSample { Us50 = 0, Us100 = 1, Us200 = 2, Us300 = 3, Us400 = 4, Us600 = 5, Us800 = 6, Us1000 = 7 }
);

field!(
    /// Decay mode (DECMOD). `110b` and `111b` are reserved and decode as auto mixed decay.
    DecayMode {
        /// Slow decay at all times.
        Slow = 0,
        /// Slow decay while current increases, mixed decay while it decreases.
        SlowIncMixedDec = 1,
        /// Fast decay at all times.
        Fast = 2,
        /// Mixed decay at all times.
        Mixed = 3,
        /// Slow decay while increasing, auto mixed decay while decreasing.
        SlowIncAutoMixedDec = 4,
        /// Auto mixed decay at all times.
        AutoMixed = 5,
    }
);

field!(
    /// Stall count: steps with back-EMF below SDTHR before STALLn asserts (SDCNT).
    StallCount { First = 0, Two = 1, Four = 2, Eight = 3 }
);

field!(
    /// Back-EMF divider applied before comparison with SDTHR (VDIV).
    BackEmfDivider { Div32 = 0, Div16 = 1, Div8 = 2, Div4 = 3 }
);

field!(
    /// High-side gate drive peak source current (IDRIVEP).
    SourceCurrent { Ma50 = 0, Ma100 = 1, Ma150 = 2, Ma200 = 3 }
);

field!(
    /// Low-side gate drive peak sink current (IDRIVEN).
    SinkCurrent { Ma100 = 0, Ma200 = 1, Ma300 = 2, Ma400 = 3 }
);

field!(
    /// Gate drive time (TDRIVEP / TDRIVEN).
    DriveTime { Ns250 = 0, Ns500 = 1, Us1 = 2, Us2 = 3 }
);

field!(
    /// Overcurrent deglitch time (OCPDEG).
    OcpDeglitch { Us1 = 0, Us2 = 1, Us4 = 2, Us8 = 3 }
);

field!(
    /// Overcurrent threshold, VDS of the FET (OCPTH).
    OcpThreshold { Mv250 = 0, Mv500 = 1, Mv750 = 2, Mv1000 = 3 }
);

#[inline]
fn bit(data: u16, n: u16) -> bool {
    data & (1 << n) != 0
}

#[inline]
fn flag(on: bool, n: u16) -> u16 {
    (on as u16) << n
}

/// CTRL: motor enable, direction, stepping mode and analog front-end settings.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ctrl {
    pub dead_time: DeadTime,
    pub sense_gain: SenseGain,
    /// Use the external back-EMF comparator for stall detection.
    pub external_stall: bool,
    pub step_mode: StepMode,
    /// Writing 1 advances the indexer by one step; the bit self-clears.
    pub step: bool,
    /// Reverse the direction set by the DIR pin.
    pub reverse: bool,
    /// Enable the H-bridge outputs.
    pub enable: bool,
}

impl Register for Ctrl {
    const ADDRESS: u8 = reg::CTRL;

    fn from_data(data: u16) -> Self {
        Self {
            dead_time: DeadTime::from_bits((data >> 10) & 0x3),
            sense_gain: SenseGain::from_bits((data >> 8) & 0x3),
            external_stall: bit(data, 7),
            step_mode: StepMode::from_bits((data >> 3) & 0xF),
            step: bit(data, 2),
            reverse: bit(data, 1),
            enable: bit(data, 0),
        }
    }

    fn data(&self) -> u16 {
        (self.dead_time.bits() << 10)
            | (self.sense_gain.bits() << 8)
            | flag(self.external_stall, 7)
            | (self.step_mode.bits() << 3)
            | flag(self.step, 2)
            | flag(self.reverse, 1)
            | flag(self.enable, 0)
    }
}

/// TORQUE: full-scale current DAC and back-EMF sampling.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Torque {
    pub sample: BackEmfSample,
    /// Full-scale output current scale, 0 to 255.
    pub torque: u8,
}

impl Register for Torque {
    const ADDRESS: u8 = reg::TORQUE;

    fn from_data(data: u16) -> Self {
        Self {
            sample: BackEmfSample::from_bits((data >> 8) & 0x7),
            torque: data as u8,
        }
    }

    fn data(&self) -> u16 {
        (self.sample.bits() << 8) | self.torque as u16
    }
}

/// OFF: fixed PWM off time.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Off {
    /// Bypass the indexer and drive the bridges directly from xIN pins.
    pub direct_pwm: bool,
    /// Off time in 500 ns steps.
    pub off_time: u8,
}

impl Register for Off {
    const ADDRESS: u8 = reg::OFF;

    fn from_data(data: u16) -> Self {
        Self {
            direct_pwm: bit(data, 8),
            off_time: data as u8,
        }
    }

    fn data(&self) -> u16 {
        flag(self.direct_pwm, 8) | self.off_time as u16
    }
}

/// BLANK: current-trip blanking time.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Blank {
    /// Adaptive blanking time.
    pub adaptive: bool,
    /// Blanking time in 20 ns steps, offset by 1 µs.
    pub blank_time: u8,
}

impl Register for Blank {
    const ADDRESS: u8 = reg::BLANK;

    fn from_data(data: u16) -> Self {
        Self {
            adaptive: bit(data, 8),
            blank_time: data as u8,
        }
    }

    fn data(&self) -> u16 {
        flag(self.adaptive, 8) | self.blank_time as u16
    }
}

/// DECAY: decay mode and mixed-decay transition time.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Decay {
    pub mode: DecayMode,
    /// Mixed decay transition time in 500 ns steps.
    pub decay_time: u8,
}

impl Register for Decay {
    const ADDRESS: u8 = reg::DECAY;

    fn from_data(data: u16) -> Self {
        Self {
            mode: DecayMode::from_bits((data >> 8) & 0x7),
            decay_time: data as u8,
        }
    }

    fn data(&self) -> u16 {
        (self.mode.bits() << 8) | self.decay_time as u16
    }
}

/// STALL: internal stall detection.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stall {
    pub divider: BackEmfDivider,
    pub count: StallCount,
    /// Stall detect threshold.
    pub threshold: u8,
}

impl Register for Stall {
    const ADDRESS: u8 = reg::STALL;

    fn from_data(data: u16) -> Self {
        Self {
            divider: BackEmfDivider::from_bits((data >> 10) & 0x3),
            count: StallCount::from_bits((data >> 8) & 0x3),
            threshold: data as u8,
        }
    }

    fn data(&self) -> u16 {
        (self.divider.bits() << 10) | (self.count.bits() << 8) | self.threshold as u16
    }
}

/// DRIVE: gate drive strength and overcurrent protection.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Drive {
    pub source_current: SourceCurrent,
    pub sink_current: SinkCurrent,
    pub high_side_time: DriveTime,
    pub low_side_time: DriveTime,
    pub ocp_deglitch: OcpDeglitch,
    pub ocp_threshold: OcpThreshold,
}

impl Register for Drive {
    const ADDRESS: u8 = reg::DRIVE;

    fn from_data(data: u16) -> Self {
        Self {
            source_current: SourceCurrent::from_bits((data >> 10) & 0x3),
            sink_current: SinkCurrent::from_bits((data >> 8) & 0x3),
            high_side_time: DriveTime::from_bits((data >> 6) & 0x3),
            low_side_time: DriveTime::from_bits((data >> 4) & 0x3),
            ocp_deglitch: OcpDeglitch::from_bits((data >> 2) & 0x3),
            ocp_threshold: OcpThreshold::from_bits(data & 0x3),
        }
    }

    fn data(&self) -> u16 {
        (self.source_current.bits() << 10)
            | (self.sink_current.bits() << 8)
            | (self.high_side_time.bits() << 6)
            | (self.low_side_time.bits() << 4)
            | (self.ocp_deglitch.bits() << 2)
            | self.ocp_threshold.bits()
    }
}

/// STATUS: fault and stall flags. Flags latch until cleared by writing 0.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    raw: u8,
}

impl Status {
    #[inline]
    pub fn raw(&self) -> u8 {
        self.raw
    }

    /// Latched stall detect.
    #[inline]
    pub fn stall_latched(&self) -> bool {
        (self.raw & (1 << 7)) != 0
    }

    /// Stall detected.
    #[inline]
    pub fn stall(&self) -> bool {
        (self.raw & (1 << 6)) != 0
    }

    /// Undervoltage lockout.
    #[inline]
    pub fn uvlo(&self) -> bool {
        (self.raw & (1 << 5)) != 0
    }

    /// Channel B predriver fault.
    #[inline]
    pub fn bpdf(&self) -> bool {
        (self.raw & (1 << 4)) != 0
    }

    /// Channel A predriver fault.
    #[inline]
    pub fn apdf(&self) -> bool {
        (self.raw & (1 << 3)) != 0
    }

    /// Channel B overcurrent shutdown.
    #[inline]
    pub fn bocp(&self) -> bool {
        (self.raw & (1 << 2)) != 0
    }

    /// Channel A overcurrent shutdown.
    #[inline]
    pub fn aocp(&self) -> bool {
        (self.raw & (1 << 1)) != 0
    }

    /// Overtemperature shutdown.
    #[inline]
    pub fn ots(&self) -> bool {
        (self.raw & (1 << 0)) != 0
    }

    /// Any fault other than stall (UVLO, predriver, overcurrent, overtemperature).
    #[inline]
    pub fn has_fault(&self) -> bool {
        (self.raw & 0x3F) != 0
    }
}

impl Register for Status {
    const ADDRESS: u8 = reg::STATUS;

    fn from_data(data: u16) -> Self {
        Self { raw: data as u8 }
    }

    fn data(&self) -> u16 {
        self.raw as u16
    }
}

/// Complete register table written by `init`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Registers {
    pub ctrl: Ctrl,
    pub torque: Torque,
    pub off: Off,
    pub blank: Blank,
    pub decay: Decay,
    pub stall: Stall,
    pub drive: Drive,
    pub status: Status,
}

/// Register payload that differs from the table after read-back.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mismatch {
    pub address: u8,
    pub expected: u16,
    pub actual: u16,
}

impl Registers {
    /// Encoded write words in initialization order: CTRL, TORQUE, OFF, BLANK, DECAY, STALL,
    /// DRIVE, STATUS.
    pub fn words(&self) -> [u16; 8] {
        [
            self.ctrl.word(),
            self.torque.word(),
            self.off.word(),
            self.blank.word(),
            self.decay.word(),
            self.stall.word(),
            self.drive.word(),
            self.status.word(),
        ]
    }

    /// `(address, payload)` of the configuration registers, i.e. everything but STATUS.
    ///
    /// CTRL.RSTEP self-clears on the chip, so it is never expected to read back as set.
    pub fn expected(&self) -> [(u8, u16); 7] {
        let ctrl = Ctrl {
            step: false,
            ..self.ctrl
        };
        [
            (reg::CTRL, ctrl.data()),
            (reg::TORQUE, self.torque.data()),
            (reg::OFF, self.off.data()),
            (reg::BLANK, self.blank.data()),
            (reg::DECAY, self.decay.data()),
            (reg::STALL, self.stall.data()),
            (reg::DRIVE, self.drive.data()),
        ]
    }
}

/// DRV8711 power-on register values.
impl Default for Registers {
    fn default() -> Self {
        Self {
            ctrl: Ctrl::from_data(0xC10),
            torque: Torque::from_data(0x1FF),
            off: Off::from_data(0x030),
            blank: Blank::from_data(0x080),
            decay: Decay::from_data(0x110),
            stall: Stall::from_data(0x040),
            drive: Drive::from_data(0xA59),
            status: Status::from_data(0x000),
        }
    }
}
