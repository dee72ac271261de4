//! Register addresses and constants for AXP209
//!
//! This module defines the register addresses and magic bytes used by the
//! pin driver. Values follow the AXP209 datasheet register map.

/// I2C Address
pub const AXP209_SLAVE_ADDRESS: u8 = 0x34;

/// Power key IRQ status register - Bit 1 latches a short press of the PEK button
pub const AXP209_BUTTON: u8 = 0x4A;

/// Short key press latch bit in [`AXP209_BUTTON`]; writing it back clears the latch
pub const AXP209_BUTTON_SHORT_PRESS: u8 = 0x02;

/// Internal temperature ADC, high 8 bits
pub const AXP209_INT_TEMP_MSB: u8 = 0x5E;

/// Internal temperature ADC, low 4 bits
pub const AXP209_INT_TEMP_LSB: u8 = 0x5F;

/// GPIO0 12-bit ADC raw code, high byte
pub const AXP209_GPIO0_ADC_HIGH: u8 = 0x64;

/// GPIO0 12-bit ADC raw code, low byte
pub const AXP209_GPIO0_ADC_LOW: u8 = 0x65;

/// Battery voltage ADC, high 8 bits
pub const AXP209_BAT_VOLT_MSB: u8 = 0x78;

/// Battery voltage ADC, low 4 bits
pub const AXP209_BAT_VOLT_LSB: u8 = 0x79;

/// ADC enable 1 register - Battery voltage/current, ACIN, VBUS and APS ADC enables
pub const AXP209_BAT_ADC_ENABLE: u8 = 0x82;

/// ADC enable 2 register - Internal temperature and GPIO0/GPIO1 ADC input enables
pub const AXP209_ADC_ENABLE2: u8 = 0x83;

/// GPIO ADC input range register - Bit 0 selects the GPIO0 range
pub const AXP209_GPIO_ADC_RANGE: u8 = 0x85;

/// GPIO0 control register - Selects the pin function of GPIO0
pub const AXP209_GPIO0_CTRL: u8 = 0x90;

/// GPIO0 LDO output voltage register - 1.8V + high nibble * 0.1V
pub const AXP209_GPIO0_LDO_VOLTAGE: u8 = 0x91;

/// GPIO2 control register - Drives the STATUS output
pub const AXP209_GPIO2_STATUS: u8 = 0x93;

// ADC enable values
/// Force battery voltage and current ADC on
pub const BAT_ADC_FORCE_ENABLE: u8 = 0xC3;
/// Internal temperature ADC on, GPIO0 ADC input off
pub const GPIO0_ADC_INPUT_DISABLE: u8 = 0x80;
/// Internal temperature ADC on, GPIO0 ADC input on
pub const GPIO0_ADC_INPUT_ENABLE: u8 = 0x88;

// GPIO0 functions
/// GPIO0 as low-noise LDO output
pub const GPIO0_FUNCTION_LDO: u8 = 0x03;
/// GPIO0 as 12-bit ADC input
pub const GPIO0_FUNCTION_ADC: u8 = 0x04;

/// GPIO0 LDO at the 1.8V base voltage
pub const GPIO0_LDO_1V8: u8 = 0x00;

// VCC-1V8 conversion constants. These encode the ADC reference and the
// input attenuation and are not derivable from the register layout.
pub const VCC_1V8_FULL_SCALE_MV: u32 = 10000;
pub const VCC_1V8_ADC_STEPS: u32 = 4096;
pub const VCC_1V8_ATTENUATION: u32 = 2;
pub const VCC_1V8_RANGE_OFFSET_MV: u32 = 7000;
