//! Fixed register write sequences
//!
//! Each sequence is an ordered list of single-register writes. The chip
//! requires a pin function to be disabled before it is reconfigured, so the
//! order must be preserved when a sequence is applied.

use crate::registers::*;
use crate::types::AdcRange;

/// A single register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterWrite {
    pub reg: u8,
    pub value: u8,
}

impl RegisterWrite {
    pub const fn new(reg: u8, value: u8) -> Self {
        Self { reg, value }
    }
}

/// Force-enable the battery voltage and current ADC
pub const BAT_ADC: [RegisterWrite; 1] =
    [RegisterWrite::new(AXP209_BAT_ADC_ENABLE, BAT_ADC_FORCE_ENABLE)];

/// Switch GPIO0 back to the 1.8V LDO output
pub const VCC_1V8_LDO: [RegisterWrite; 3] = [
    RegisterWrite::new(AXP209_ADC_ENABLE2, GPIO0_ADC_INPUT_DISABLE),
    RegisterWrite::new(AXP209_GPIO0_CTRL, GPIO0_FUNCTION_LDO),
    RegisterWrite::new(AXP209_GPIO0_LDO_VOLTAGE, GPIO0_LDO_1V8),
];

/// Put GPIO0 into 12-bit ADC input mode with the given input range
///
/// Disable input, set function, set range, re-enable input.
pub const fn vcc_1v8_adc(range: AdcRange) -> [RegisterWrite; 4] {
    [
        RegisterWrite::new(AXP209_ADC_ENABLE2, GPIO0_ADC_INPUT_DISABLE),
        RegisterWrite::new(AXP209_GPIO0_CTRL, GPIO0_FUNCTION_ADC),
        RegisterWrite::new(AXP209_GPIO_ADC_RANGE, range as u8),
        RegisterWrite::new(AXP209_ADC_ENABLE2, GPIO0_ADC_INPUT_ENABLE),
    ]
}
