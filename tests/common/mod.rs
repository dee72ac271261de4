//! Register-file I2C mock for integration tests.
//!
//! Records every register access so tests can assert on the exact bus
//! traffic. Clones share state, so a test keeps one handle for inspection
//! while the driver owns the other.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

pub const ADDRESS: u8 = 0x34;

// ── Access record ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(u8),
    Write(u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// Transaction touched a register marked as failing
    Bus,
    /// Wrong device address
    Nack,
}

impl embedded_hal::i2c::Error for MockError {
    fn kind(&self) -> ErrorKind {
        match self {
            MockError::Bus => ErrorKind::Bus,
            MockError::Nack => {
                ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address)
            }
        }
    }
}

// ── MockI2c ───────────────────────────────────────────────────

struct State {
    address: u8,
    registers: [u8; 256],
    clear_on_write: Vec<u8>,
    failing: Option<u8>,
    log: Vec<Access>,
}

#[derive(Clone)]
pub struct MockI2c {
    state: Rc<RefCell<State>>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::with_address(ADDRESS)
    }

    pub fn with_address(address: u8) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                address,
                registers: [0; 256],
                clear_on_write: Vec::new(),
                failing: None,
                log: Vec::new(),
            })),
        }
    }

    /// Mock with the power key status register behaving like the chip:
    /// writing a 1 clears that bit.
    pub fn axp209() -> Self {
        let mock = Self::new();
        mock.state.borrow_mut().clear_on_write.push(0x4A);
        mock
    }

    pub fn set(&self, reg: u8, value: u8) {
        self.state.borrow_mut().registers[reg as usize] = value;
    }

    pub fn get(&self, reg: u8) -> u8 {
        self.state.borrow().registers[reg as usize]
    }

    /// Fail every transaction addressing `reg`
    pub fn fail_on(&self, reg: u8) {
        self.state.borrow_mut().failing = Some(reg);
    }

    pub fn heal(&self) {
        self.state.borrow_mut().failing = None;
    }

    pub fn log(&self) -> Vec<Access> {
        self.state.borrow().log.clone()
    }

    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.log()
            .into_iter()
            .filter_map(|access| match access {
                Access::Write(reg, value) => Some((reg, value)),
                Access::Read(_) => None,
            })
            .collect()
    }

    pub fn reads(&self) -> Vec<u8> {
        self.log()
            .into_iter()
            .filter_map(|access| match access {
                Access::Read(reg) => Some(reg),
                Access::Write(..) => None,
            })
            .collect()
    }

    pub fn clear_log(&self) {
        self.state.borrow_mut().log.clear();
    }

    fn run(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), MockError> {
        let mut state = self.state.borrow_mut();
        if address != state.address {
            return Err(MockError::Nack);
        }

        let mut pointer = None;
        for operation in operations {
            match operation {
                Operation::Write(bytes) => {
                    let (&reg, data) = bytes.split_first().ok_or(MockError::Bus)?;
                    if state.failing == Some(reg) {
                        return Err(MockError::Bus);
                    }
                    pointer = Some(reg);
                    for (offset, &value) in data.iter().enumerate() {
                        let reg = reg.wrapping_add(offset as u8);
                        state.log.push(Access::Write(reg, value));
                        if state.clear_on_write.contains(&reg) {
                            state.registers[reg as usize] &= !value;
                        } else {
                            state.registers[reg as usize] = value;
                        }
                    }
                }
                Operation::Read(buf) => {
                    let reg = pointer.ok_or(MockError::Bus)?;
                    for (offset, byte) in buf.iter_mut().enumerate() {
                        let reg = reg.wrapping_add(offset as u8);
                        state.log.push(Access::Read(reg));
                        *byte = state.registers[reg as usize];
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for MockI2c {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorType for MockI2c {
    type Error = MockError;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::i2c::I2c for MockI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.run(address, operations)
    }
}

/// The GPIO0 ADC configuration issued by `open`
pub const VCC_1V8_ADC_WRITES: [(u8, u8); 4] = [(0x83, 0x80), (0x90, 0x04), (0x85, 0x00), (0x83, 0x88)];
