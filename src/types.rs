//! Type definitions and enumerations for AXP209 pins and observations
//!
//! This module provides strongly-typed enumerations for the logical pins
//! exposed by the driver and for the observations produced by a tick.

/// Logical pins exposed by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Pin {
    /// Battery voltage ADC
    Bat = 0,
    /// Internal die temperature ADC
    IntTemp = 1,
    /// Power key (PEK) short press latch
    Btn = 2,
    /// GPIO0, used as 12-bit ADC input on the 1.8V rail
    Vcc1v8 = 3,
    /// GPIO2 output
    Status = 4,
}

impl Pin {
    /// All pins, in declaration order
    pub const ALL: [Pin; 5] = [Pin::Bat, Pin::IntTemp, Pin::Btn, Pin::Vcc1v8, Pin::Status];

    /// Pins sampled by a tick, in the order they are sampled
    pub const POLLED: [Pin; 4] = [Pin::Bat, Pin::IntTemp, Pin::Btn, Pin::Vcc1v8];

    /// Look up a pin by its board name (`BAT`, `INTTEMP`, `BTN`, `VCC-1V8`, `STATUS`)
    ///
    /// Unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pin| pin.name() == name)
    }

    /// Board name of the pin
    pub const fn name(self) -> &'static str {
        match self {
            Pin::Bat => "BAT",
            Pin::IntTemp => "INTTEMP",
            Pin::Btn => "BTN",
            Pin::Vcc1v8 => "VCC-1V8",
            Pin::Status => "STATUS",
        }
    }
}

/// Pin modes accepted by [`set_mode`](crate::Axp209::set_mode)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PinMode {
    Input = 0,
    Output = 1,
    Analog = 2,
}

impl PinMode {
    /// Convert a numeric mode, `None` for values outside 0..=2
    pub fn from_u8(mode: u8) -> Option<Self> {
        match mode {
            0 => Some(PinMode::Input),
            1 => Some(PinMode::Output),
            2 => Some(PinMode::Analog),
            _ => None,
        }
    }
}

/// GPIO0 ADC input range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AdcRange {
    /// 0V - 2.0475V
    #[default]
    ZeroTo2V = 0x00,
    /// 0.7V - 2.7475V
    Offset0V7To2V7475 = 0x01,
}

/// Kind of an [`Observation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    AnalogRead,
    DigitalRead,
}

/// Value carried by an [`Observation`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reading {
    /// Uncalibrated 12-bit ADC code
    AdcCode(u16),
    /// Digital level
    Level(bool),
    /// Voltage in millivolts
    Millivolts(f64),
}

impl Reading {
    /// The reading as a plain number; levels map to 1.0 / 0.0
    pub fn as_f64(self) -> f64 {
        match self {
            Reading::AdcCode(code) => code as f64,
            Reading::Level(high) => {
                if high {
                    1.0
                } else {
                    0.0
                }
            }
            Reading::Millivolts(mv) => mv,
        }
    }
}

/// One sample produced by a tick
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Observation {
    pub kind: EventKind,
    pub pin: Pin,
    pub value: Reading,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_names_round_trip() {
        for pin in Pin::ALL {
            assert_eq!(Pin::from_name(pin.name()), Some(pin));
        }
    }

    #[test]
    fn unknown_pin_name_is_rejected() {
        assert_eq!(Pin::from_name("GPIO3"), None);
        assert_eq!(Pin::from_name("bat"), None);
        assert_eq!(Pin::from_name(""), None);
    }

    #[test]
    fn pin_mode_from_u8() {
        assert_eq!(PinMode::from_u8(2), Some(PinMode::Analog));
        assert_eq!(PinMode::from_u8(0), Some(PinMode::Input));
        assert_eq!(PinMode::from_u8(7), None);
    }

    #[test]
    fn reading_as_f64() {
        assert_eq!(Reading::AdcCode(4095).as_f64(), 4095.0);
        assert_eq!(Reading::Level(true).as_f64(), 1.0);
        assert_eq!(Reading::Level(false).as_f64(), 0.0);
        assert_eq!(Reading::Millivolts(7126.953).as_f64(), 7126.953);
    }
}
