//! Async driver against the same register-file mock.

mod common;

use axp209::{AsyncAxp209, Error, EventKind, Observation, Pin, PinMode, Reading};
use common::{Access, MockError, MockI2c, VCC_1V8_ADC_WRITES};
use futures_lite::future::block_on;

#[test]
fn open_configures_gpio0_adc_once() {
    let bus = MockI2c::axp209();
    let mut pmic = AsyncAxp209::new(bus.clone());

    block_on(pmic.open()).unwrap();

    assert!(pmic.is_open());
    assert_eq!(bus.writes(), VCC_1V8_ADC_WRITES);
}

#[test]
fn closed_driver_rejects_operations() {
    let bus = MockI2c::axp209();
    let mut pmic = AsyncAxp209::new(bus.clone());

    assert_eq!(pmic.register_analog_interest(Pin::Bat), Err(Error::NotOpen));
    assert_eq!(block_on(pmic.write_digital(Pin::Status, 1)), Err(Error::NotOpen));
    assert_eq!(block_on(pmic.poll()), Err(Error::NotOpen));
    assert!(bus.log().is_empty());
}

#[test]
fn tick_emits_in_fixed_order() {
    let bus = MockI2c::axp209();
    let mut pmic = AsyncAxp209::new(bus.clone());
    block_on(pmic.open()).unwrap();
    bus.set(0x4A, 0x02);
    bus.set(0x78, 0x10);
    bus.set(0x79, 0x01);
    bus.clear_log();

    pmic.register_digital_interest(Pin::Btn).unwrap();
    pmic.register_analog_interest(Pin::Bat).unwrap();

    let mut seen = Vec::new();
    block_on(pmic.tick(&mut |o: Observation| seen.push(o))).unwrap();

    assert_eq!(
        seen,
        [
            Observation {
                kind: EventKind::AnalogRead,
                pin: Pin::Bat,
                value: Reading::AdcCode(0x101),
            },
            Observation {
                kind: EventKind::DigitalRead,
                pin: Pin::Btn,
                value: Reading::Level(true),
            },
        ]
    );
    assert_eq!(
        bus.log(),
        [
            Access::Read(0x78),
            Access::Read(0x79),
            Access::Read(0x4A),
            Access::Write(0x4A, 0x02),
        ]
    );
}

#[test]
fn set_mode_and_status_write() {
    let bus = MockI2c::axp209();
    let mut pmic = AsyncAxp209::new(bus.clone());
    block_on(pmic.open()).unwrap();
    bus.clear_log();

    block_on(pmic.set_mode(Pin::Bat, PinMode::Analog)).unwrap();
    block_on(pmic.set_mode(Pin::Vcc1v8, PinMode::Analog)).unwrap();
    block_on(pmic.write_digital(Pin::Status, 1)).unwrap();

    let mut expected = vec![(0x82, 0xC3)];
    expected.extend(VCC_1V8_ADC_WRITES);
    expected.push((0x93, 1));
    assert_eq!(bus.writes(), expected);
}

#[test]
fn bus_error_keeps_device_open() {
    let bus = MockI2c::axp209();
    let mut pmic = AsyncAxp209::new(bus.clone());
    block_on(pmic.open()).unwrap();
    pmic.register_analog_interest(Pin::Vcc1v8).unwrap();
    bus.fail_on(0x64);

    assert_eq!(block_on(pmic.poll()), Err(Error::I2c(MockError::Bus)));
    assert!(pmic.is_open());

    bus.heal();
    let observations = block_on(pmic.poll()).unwrap();
    assert_eq!(observations[0].value, Reading::Millivolts(0.0));
}
