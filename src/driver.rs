//! Synchronous AXP209 PMIC driver implementation

use crate::{
    conversion,
    error::Error,
    interest::PinInterest,
    registers::*,
    sequence::{self, RegisterWrite},
    sink::{ObservationSink, Observations},
    types::*,
};
use embedded_hal::i2c::I2c;

/// AXP209 PMIC driver
///
/// The driver starts closed. [`open`](Self::open) configures the GPIO0 ADC
/// and unlocks the pin operations; every operation on a closed driver
/// returns [`Error::NotOpen`] without touching the bus.
pub struct Axp209<I> {
    i2c: I,
    addr: u8,
    open: bool,
    interest: PinInterest,
}

impl<I> Axp209<I>
where
    I: I2c,
{
    /// Create a new AXP209 driver instance
    ///
    /// # Arguments
    /// * `i2c` - I2C bus instance
    ///
    /// # Example
    /// ```no_run
    /// # use axp209::Axp209;
    /// # use embedded_hal::i2c::I2c;
    /// # fn example<I: I2c>(i2c: I) {
    /// let pmic = Axp209::new(i2c);
    /// # }
    /// ```
    pub fn new(i2c: I) -> Self {
        Self::with_address(i2c, AXP209_SLAVE_ADDRESS)
    }

    /// Create a new AXP209 driver instance with custom I2C address
    pub fn with_address(i2c: I, addr: u8) -> Self {
        Self {
            i2c,
            addr,
            open: false,
            interest: PinInterest::new(),
        }
    }

    // ========================================
    // Lifecycle
    // ========================================

    /// Open the device
    ///
    /// Puts GPIO0 into 12-bit ADC mode (0-2V range) so the `VCC-1V8` pin can
    /// be sampled straight away. On a bus error the driver stays closed.
    pub fn open(&mut self) -> Result<(), Error<I::Error>> {
        self.apply(&sequence::vcc_1v8_adc(AdcRange::default()))?;
        self.open = true;
        #[cfg(feature = "defmt")]
        defmt::debug!("AXP209 opened at {=u8:#x}", self.addr);
        Ok(())
    }

    /// Close the device
    ///
    /// Clears all registered interest. No bus traffic.
    pub fn close(&mut self) {
        self.open = false;
        self.interest.clear();
        #[cfg(feature = "defmt")]
        defmt::debug!("AXP209 closed");
    }

    /// Check if the device is open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Destroy the driver and hand back the I2C bus
    pub fn release(self) -> I {
        self.i2c
    }

    fn ensure_open(&self) -> Result<(), Error<I::Error>> {
        if self.open {
            Ok(())
        } else {
            Err(Error::NotOpen)
        }
    }

    // ========================================
    // Low-level I2C operations
    // ========================================

    /// Read a single register
    fn read_register(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        let mut buf = [0u8];
        self.i2c
            .write_read(self.addr, &[reg], &mut buf)
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    /// Write a single register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.i2c.write(self.addr, &[reg, value]).map_err(Error::I2c)
    }

    /// Issue a write sequence in order, stopping at the first failure
    fn apply(&mut self, writes: &[RegisterWrite]) -> Result<(), Error<I::Error>> {
        for write in writes {
            #[cfg(feature = "defmt")]
            defmt::trace!("write {=u8:#x} <- {=u8:#x}", write.reg, write.value);
            self.write_register(write.reg, write.value)?;
        }
        Ok(())
    }

    /// Read a 12-bit ADC value stored as high 8 bits + low 4 bits
    fn read_adc_12bit(&mut self, msb_reg: u8, lsb_reg: u8) -> Result<u16, Error<I::Error>> {
        let msb = self.read_register(msb_reg)?;
        let lsb = self.read_register(lsb_reg)?;
        Ok(conversion::adc_code_12bit(msb, lsb))
    }

    // ========================================
    // Pin operations
    // ========================================

    /// Configure a pin
    ///
    /// `BAT` in any mode force-enables the battery ADC. `VCC-1V8` in
    /// [`PinMode::Analog`] re-runs the GPIO0 ADC configuration. Every other
    /// combination is accepted and does nothing.
    pub fn set_mode(&mut self, pin: Pin, mode: PinMode) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        match (pin, mode) {
            (Pin::Bat, _) => self.apply(&sequence::BAT_ADC),
            (Pin::Vcc1v8, PinMode::Analog) => {
                self.apply(&sequence::vcc_1v8_adc(AdcRange::default()))
            }
            _ => Ok(()),
        }
    }

    /// Register interest in analog samples of `pin`
    ///
    /// Samples are taken on the next [`tick`](Self::tick). Idempotent.
    pub fn register_analog_interest(&mut self, pin: Pin) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        self.interest.insert(pin);
        Ok(())
    }

    /// Register interest in digital samples of `pin`
    ///
    /// Shares the registry with [`register_analog_interest`](Self::register_analog_interest);
    /// the kind of event emitted depends on the pin, not on the call used.
    pub fn register_digital_interest(&mut self, pin: Pin) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        self.interest.insert(pin);
        Ok(())
    }

    /// Check if a pin has registered interest
    pub fn is_interested(&self, pin: Pin) -> bool {
        self.interest.contains(pin)
    }

    /// Write a digital value
    ///
    /// Only `STATUS` is writable; the value goes straight to the GPIO2
    /// control register. Other pins are ignored.
    pub fn write_digital(&mut self, pin: Pin, value: u8) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        match pin {
            Pin::Status => self.write_register(AXP209_GPIO2_STATUS, value),
            _ => Ok(()),
        }
    }

    // ========================================
    // ADC configuration
    // ========================================

    /// Force-enable the battery voltage and current ADC
    pub fn configure_battery_adc(&mut self) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        self.apply(&sequence::BAT_ADC)
    }

    /// Put GPIO0 into 12-bit ADC mode with the given input range
    pub fn configure_vcc_1v8_adc(&mut self, range: AdcRange) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        self.apply(&sequence::vcc_1v8_adc(range))
    }

    /// Switch GPIO0 back to its 1.8V LDO output
    pub fn restore_vcc_1v8_ldo(&mut self) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        self.apply(&sequence::VCC_1V8_LDO)
    }

    // ========================================
    // Readings
    // ========================================

    /// Get the raw 12-bit battery voltage ADC code
    pub fn read_battery_voltage_raw(&mut self) -> Result<u16, Error<I::Error>> {
        self.ensure_open()?;
        self.read_adc_12bit(AXP209_BAT_VOLT_MSB, AXP209_BAT_VOLT_LSB)
    }

    /// Get the raw 12-bit internal temperature ADC code
    pub fn read_internal_temperature_raw(&mut self) -> Result<u16, Error<I::Error>> {
        self.ensure_open()?;
        self.read_adc_12bit(AXP209_INT_TEMP_MSB, AXP209_INT_TEMP_LSB)
    }

    /// Check for a latched power key press
    ///
    /// A set latch is acknowledged by writing the latch bit back, so each
    /// press is reported once.
    pub fn read_button(&mut self) -> Result<bool, Error<I::Error>> {
        self.ensure_open()?;
        self.sample_button()
    }

    /// Get the GPIO0 ADC voltage in millivolts
    pub fn read_vcc_1v8_millivolts(&mut self) -> Result<f64, Error<I::Error>> {
        self.ensure_open()?;
        self.sample_vcc_1v8()
    }

    fn sample_button(&mut self) -> Result<bool, Error<I::Error>> {
        let pressed = conversion::button_pressed(self.read_register(AXP209_BUTTON)?);
        if pressed {
            #[cfg(feature = "defmt")]
            defmt::trace!("acknowledging power key press");
            self.write_register(AXP209_BUTTON, AXP209_BUTTON_SHORT_PRESS)?;
        }
        Ok(pressed)
    }

    fn sample_vcc_1v8(&mut self) -> Result<f64, Error<I::Error>> {
        let range = self.read_register(AXP209_GPIO_ADC_RANGE)?;
        let high = self.read_register(AXP209_GPIO0_ADC_HIGH)?;
        let low = self.read_register(AXP209_GPIO0_ADC_LOW)?;
        Ok(conversion::vcc_1v8_millivolts(range, high, low))
    }

    // ========================================
    // Polling
    // ========================================

    /// Sample one pin, `None` for pins that are never sampled
    fn sample(&mut self, pin: Pin) -> Result<Option<Observation>, Error<I::Error>> {
        let (kind, value) = match pin {
            Pin::Bat => (
                EventKind::AnalogRead,
                Reading::AdcCode(
                    self.read_adc_12bit(AXP209_BAT_VOLT_MSB, AXP209_BAT_VOLT_LSB)?,
                ),
            ),
            Pin::IntTemp => (
                EventKind::AnalogRead,
                Reading::AdcCode(
                    self.read_adc_12bit(AXP209_INT_TEMP_MSB, AXP209_INT_TEMP_LSB)?,
                ),
            ),
            Pin::Btn => (
                EventKind::DigitalRead,
                Reading::Level(self.sample_button()?),
            ),
            Pin::Vcc1v8 => (
                EventKind::AnalogRead,
                Reading::Millivolts(self.sample_vcc_1v8()?),
            ),
            Pin::Status => return Ok(None),
        };
        Ok(Some(Observation { kind, pin, value }))
    }

    /// Sample every pin with registered interest
    ///
    /// Pins are sampled in the order `BAT`, `INTTEMP`, `BTN`, `VCC-1V8` and
    /// each sample is handed to `sink` as soon as it is read. With no
    /// registered interest no bus traffic happens.
    ///
    /// A bus error stops the tick at the failing pin. Observations already
    /// delivered stay delivered and the driver remains open.
    ///
    /// # Example
    /// ```no_run
    /// # use axp209::{Axp209, Error, Observation, Pin};
    /// # use embedded_hal::i2c::I2c;
    /// # fn example<I: I2c>(i2c: I) -> Result<(), Error<I::Error>> {
    /// let mut pmic = Axp209::new(i2c);
    /// pmic.open()?;
    /// pmic.register_analog_interest(Pin::Bat)?;
    /// pmic.tick(&mut |observation: Observation| {
    ///     let _ = observation.value.as_f64();
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn tick<S>(&mut self, sink: &mut S) -> Result<(), Error<I::Error>>
    where
        S: ObservationSink,
    {
        self.ensure_open()?;
        for pin in self.interest.polled() {
            match self.sample(pin) {
                Ok(Some(observation)) => sink.observe(observation),
                Ok(None) => {}
                Err(e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("tick aborted while sampling {}", pin);
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Run one [`tick`](Self::tick) and collect its observations
    pub fn poll(&mut self) -> Result<Observations, Error<I::Error>> {
        let mut observations = Observations::new();
        self.tick(&mut observations)?;
        Ok(observations)
    }
}
