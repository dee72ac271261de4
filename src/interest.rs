//! Pin interest registry
//!
//! Tracks which pins the caller has asked to observe. Pure state, owned by
//! the driver instance.

use crate::types::Pin;

/// Set of pins a tick should sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinInterest {
    mask: u8,
}

impl PinInterest {
    pub const fn new() -> Self {
        Self { mask: 0 }
    }

    /// Mark `pin` as observed. Idempotent.
    pub fn insert(&mut self, pin: Pin) {
        self.mask |= 1 << (pin as u8);
    }

    pub fn contains(&self, pin: Pin) -> bool {
        self.mask & (1 << (pin as u8)) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn clear(&mut self) {
        self.mask = 0;
    }

    /// Observed pins a tick will sample, in sampling order
    pub fn polled(self) -> impl Iterator<Item = Pin> {
        Pin::POLLED.into_iter().filter(move |pin| self.contains(*pin))
    }
}
