//! Async AXP209 PMIC driver implementation

use crate::{
    conversion,
    error::Error,
    interest::PinInterest,
    registers::*,
    sequence::{self, RegisterWrite},
    sink::{ObservationSink, Observations},
    types::*,
};

#[cfg(feature = "async")]
use embedded_hal_async::i2c::I2c as AsyncI2c;

/// Async AXP209 PMIC driver
///
/// This implementation provides async operations for all AXP209 functionality
/// when the `async` feature is enabled. All methods mirror the synchronous API
/// but return futures that can be awaited.
///
/// # Example
/// ```no_run
/// # #[cfg(feature = "async")]
/// # async fn example<I: embedded_hal_async::i2c::I2c>(i2c: I) -> Result<(), axp209::Error<I::Error>> {
/// use axp209::{AsyncAxp209, Pin};
///
/// let mut pmic = AsyncAxp209::new(i2c);
/// pmic.open().await?;
///
/// pmic.register_analog_interest(Pin::Bat)?;
/// pmic.register_digital_interest(Pin::Btn)?;
///
/// for observation in pmic.poll().await? {
///     let _ = (observation.pin, observation.value);
/// }
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "async")]
pub struct AsyncAxp209<I> {
    i2c: I,
    addr: u8,
    open: bool,
    interest: PinInterest,
}

#[cfg(feature = "async")]
impl<I> AsyncAxp209<I>
where
    I: AsyncI2c,
{
    /// Create a new async AXP209 driver instance
    ///
    /// # Arguments
    /// * `i2c` - Async I2C bus instance
    pub fn new(i2c: I) -> Self {
        Self::with_address(i2c, AXP209_SLAVE_ADDRESS)
    }

    /// Create a new async AXP209 driver instance with custom I2C address
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

    /// Open the device and configure the GPIO0 ADC
    pub async fn open(&mut self) -> Result<(), Error<I::Error>> {
        self.apply(&sequence::vcc_1v8_adc(AdcRange::default()))
            .await?;
        self.open = true;
        #[cfg(feature = "defmt")]
        defmt::debug!("AXP209 opened at {=u8:#x}", self.addr);
        Ok(())
    }

    /// Close the device and clear registered interest
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

    async fn read_register(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        let mut buf = [0u8];
        self.i2c
            .write_read(self.addr, &[reg], &mut buf)
            .await
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.i2c
            .write(self.addr, &[reg, value])
            .await
            .map_err(Error::I2c)
    }

    async fn apply(&mut self, writes: &[RegisterWrite]) -> Result<(), Error<I::Error>> {
        for write in writes {
            #[cfg(feature = "defmt")]
            defmt::trace!("write {=u8:#x} <- {=u8:#x}", write.reg, write.value);
            self.write_register(write.reg, write.value).await?;
        }
        Ok(())
    }

    async fn read_adc_12bit(&mut self, msb_reg: u8, lsb_reg: u8) -> Result<u16, Error<I::Error>> {
        let msb = self.read_register(msb_reg).await?;
        let lsb = self.read_register(lsb_reg).await?;
        Ok(conversion::adc_code_12bit(msb, lsb))
    }

    // ========================================
    // Pin operations
    // ========================================

    /// Configure a pin
    pub async fn set_mode(&mut self, pin: Pin, mode: PinMode) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        match (pin, mode) {
            (Pin::Bat, _) => self.apply(&sequence::BAT_ADC).await,
            (Pin::Vcc1v8, PinMode::Analog) => {
                self.apply(&sequence::vcc_1v8_adc(AdcRange::default()))
                    .await
            }
            _ => Ok(()),
        }
    }

    /// Register interest in analog samples of `pin`
    pub fn register_analog_interest(&mut self, pin: Pin) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        self.interest.insert(pin);
        Ok(())
    }

    /// Register interest in digital samples of `pin`
    pub fn register_digital_interest(&mut self, pin: Pin) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        self.interest.insert(pin);
        Ok(())
    }

    /// Check if a pin has registered interest
    pub fn is_interested(&self, pin: Pin) -> bool {
        self.interest.contains(pin)
    }

    /// Write a digital value, only `STATUS` is writable
    pub async fn write_digital(&mut self, pin: Pin, value: u8) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        match pin {
            Pin::Status => self.write_register(AXP209_GPIO2_STATUS, value).await,
            _ => Ok(()),
        }
    }

    // ========================================
    // ADC configuration
    // ========================================

    /// Force-enable the battery voltage and current ADC
    pub async fn configure_battery_adc(&mut self) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        self.apply(&sequence::BAT_ADC).await
    }

    /// Put GPIO0 into 12-bit ADC mode with the given input range
    pub async fn configure_vcc_1v8_adc(&mut self, range: AdcRange) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        self.apply(&sequence::vcc_1v8_adc(range)).await
    }

    /// Switch GPIO0 back to its 1.8V LDO output
    pub async fn restore_vcc_1v8_ldo(&mut self) -> Result<(), Error<I::Error>> {
        self.ensure_open()?;
        self.apply(&sequence::VCC_1V8_LDO).await
    }

    // ========================================
    // Readings
    // ========================================

    /// Get the raw 12-bit battery voltage ADC code
    pub async fn read_battery_voltage_raw(&mut self) -> Result<u16, Error<I::Error>> {
        self.ensure_open()?;
        self.read_adc_12bit(AXP209_BAT_VOLT_MSB, AXP209_BAT_VOLT_LSB)
            .await
    }

    /// Get the raw 12-bit internal temperature ADC code
    pub async fn read_internal_temperature_raw(&mut self) -> Result<u16, Error<I::Error>> {
        self.ensure_open()?;
        self.read_adc_12bit(AXP209_INT_TEMP_MSB, AXP209_INT_TEMP_LSB)
            .await
    }

    /// Check for a latched power key press, acknowledging it if set
    pub async fn read_button(&mut self) -> Result<bool, Error<I::Error>> {
        self.ensure_open()?;
        self.sample_button().await
    }

    /// Get the GPIO0 ADC voltage in millivolts
    pub async fn read_vcc_1v8_millivolts(&mut self) -> Result<f64, Error<I::Error>> {
        self.ensure_open()?;
        self.sample_vcc_1v8().await
    }

    async fn sample_button(&mut self) -> Result<bool, Error<I::Error>> {
        let pressed = conversion::button_pressed(self.read_register(AXP209_BUTTON).await?);
        if pressed {
            #[cfg(feature = "defmt")]
            defmt::trace!("acknowledging power key press");
            self.write_register(AXP209_BUTTON, AXP209_BUTTON_SHORT_PRESS)
                .await?;
        }
        Ok(pressed)
    }

    async fn sample_vcc_1v8(&mut self) -> Result<f64, Error<I::Error>> {
        let range = self.read_register(AXP209_GPIO_ADC_RANGE).await?;
        let high = self.read_register(AXP209_GPIO0_ADC_HIGH).await?;
        let low = self.read_register(AXP209_GPIO0_ADC_LOW).await?;
        Ok(conversion::vcc_1v8_millivolts(range, high, low))
    }

    // ========================================
    // Polling
    // ========================================

    async fn sample(&mut self, pin: Pin) -> Result<Option<Observation>, Error<I::Error>> {
        let (kind, value) = match pin {
            Pin::Bat => (
                EventKind::AnalogRead,
                Reading::AdcCode(
                    self.read_adc_12bit(AXP209_BAT_VOLT_MSB, AXP209_BAT_VOLT_LSB).await?,
                ),
            ),
            Pin::IntTemp => (
                EventKind::AnalogRead,
                Reading::AdcCode(
                    self.read_adc_12bit(AXP209_INT_TEMP_MSB, AXP209_INT_TEMP_LSB).await?,
                ),
            ),
            Pin::Btn => (
                EventKind::DigitalRead,
                Reading::Level(self.sample_button().await?),
            ),
            Pin::Vcc1v8 => (
                EventKind::AnalogRead,
                Reading::Millivolts(self.sample_vcc_1v8().await?),
            ),
            Pin::Status => return Ok(None),
        };
        Ok(Some(Observation { kind, pin, value }))
    }

    /// Sample every pin with registered interest
    ///
    /// Same ordering and failure behaviour as [`Axp209::tick`](crate::Axp209::tick).
    pub async fn tick<S>(&mut self, sink: &mut S) -> Result<(), Error<I::Error>>
    where
        S: ObservationSink,
    {
        self.ensure_open()?;
        for pin in self.interest.polled() {
            match self.sample(pin).await {
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
    pub async fn poll(&mut self) -> Result<Observations, Error<I::Error>> {
        let mut observations = Observations::new();
        self.tick(&mut observations).await?;
        Ok(observations)
    }
}
