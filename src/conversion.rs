//! Raw register to physical value conversions
//!
//! All functions here are pure; the driver reads the registers and hands the
//! bytes over.

use crate::registers::{
    AXP209_BUTTON_SHORT_PRESS, VCC_1V8_ADC_STEPS, VCC_1V8_ATTENUATION, VCC_1V8_FULL_SCALE_MV,
    VCC_1V8_RANGE_OFFSET_MV,
};

/// Combine a 12-bit ADC value split as high 8 bits / low 4 bits
///
/// Used by the battery voltage and internal temperature channels. The result
/// is the uncalibrated ADC code in `0..=4095`.
#[inline]
pub fn adc_code_12bit(msb: u8, lsb: u8) -> u16 {
    ((msb as u16) << 4) | ((lsb as u16) & 0x0F)
}

/// Whether the power key status byte has the short press latch set
#[inline]
pub fn button_pressed(status: u8) -> bool {
    status & AXP209_BUTTON_SHORT_PRESS != 0
}

/// Merge the two GPIO0 ADC bytes by concatenating their hex digits
///
/// Each byte is rendered as unpadded hexadecimal and the two strings are
/// read back as a single hexadecimal number, so `(0x12, 0x34)` gives
/// `0x1234` but `(0x01, 0x0A)` gives `0x1A`. A low byte below `0x10`
/// contributes one digit and shifts the high byte by 4 bits instead of 8.
#[inline]
pub fn hex_merge(high: u8, low: u8) -> u16 {
    let shift = if low < 0x10 { 4 } else { 8 };
    ((high as u16) << shift) | low as u16
}

/// GPIO0 ADC voltage in millivolts
///
/// `range` is the raw byte of the ADC range register (0 for the 0-2V range,
/// 1 for the 0.7V offset range).
pub fn vcc_1v8_millivolts(range: u8, high: u8, low: u8) -> f64 {
    let code = hex_merge(high, low) as f64;
    let scaled = code * VCC_1V8_FULL_SCALE_MV as f64 / VCC_1V8_ADC_STEPS as f64;
    scaled * VCC_1V8_ATTENUATION as f64 + range as f64 * VCC_1V8_RANGE_OFFSET_MV as f64
}
