#![no_std]
//! # AXP209 Power Management IC Driver
//!
//! This crate provides a polling driver for the AXP209 Power Management IC
//! (PMIC). Instead of register addresses the caller works with five logical
//! pins:
//! - `BAT` - battery voltage ADC (raw 12-bit code)
//! - `INTTEMP` - internal temperature ADC (raw 12-bit code)
//! - `BTN` - power key short press latch
//! - `VCC-1V8` - GPIO0 as 12-bit ADC input (millivolts)
//! - `STATUS` - GPIO2 output
//!
//! Interest in a pin is registered once; every call to
//! [`tick`](Axp209::tick) then samples the registered pins and delivers one
//! [`Observation`] per pin.
//!
//! ## Example
//!
//! ```no_run
//! use axp209::{Axp209, Error, PinMode, Pin};
//! # use embedded_hal::i2c::I2c;
//! # fn example<I: I2c>(i2c: I) -> Result<(), Error<I::Error>> {
//! let mut pmic = Axp209::new(i2c);
//!
//! // Configure the GPIO0 ADC and start accepting pin operations
//! pmic.open()?;
//!
//! // Enable the battery ADC and watch the battery and the power key
//! pmic.set_mode(Pin::Bat, PinMode::Analog)?;
//! pmic.register_analog_interest(Pin::Bat)?;
//! pmic.register_digital_interest(Pin::Btn)?;
//!
//! // Drive the STATUS output
//! pmic.write_digital(Pin::Status, 1)?;
//!
//! // Sample once per loop iteration
//! for observation in pmic.poll()? {
//!     let _ = (observation.kind, observation.pin, observation.value);
//! }
//!
//! pmic.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## Async Support
//!
//! When the `async` feature is enabled, the crate provides `AsyncAxp209`
//! with the same API but async/await support:
//!
//! ```no_run
//! # #[cfg(feature = "async")]
//! # async fn example<I: embedded_hal_async::i2c::I2c>(i2c: I) -> Result<(), axp209::Error<I::Error>> {
//! use axp209::{AsyncAxp209, Pin};
//!
//! let mut pmic = AsyncAxp209::new(i2c);
//! pmic.open().await?;
//! pmic.register_analog_interest(Pin::Vcc1v8)?;
//! let observations = pmic.poll().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **`async`** - `AsyncAxp209` on top of `embedded-hal-async`.
//! - **`defmt`** - logging via [`defmt`](https://docs.rs/defmt) and
//!   `defmt::Format` for the public types.

pub mod conversion;
mod driver;
#[cfg(feature = "async")]
mod driver_async;
mod error;
mod interest;
mod registers;
pub mod sequence;
mod sink;
mod types;

// Re-export main types
pub use driver::Axp209;
#[cfg(feature = "async")]
pub use driver_async::AsyncAxp209;
pub use error::Error;
pub use interest::PinInterest;
pub use registers::*;
pub use sink::{ObservationSink, Observations};
pub use types::*;
