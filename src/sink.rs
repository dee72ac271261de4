//! Delivery of observations produced by a tick

use crate::types::Observation;

/// Buffer holding every observation of a single tick
pub type Observations = heapless::Vec<Observation, { crate::Pin::POLLED.len() }>;

/// Receiver for observations emitted by a tick
///
/// Implemented for any `FnMut(Observation)` closure and for [`Observations`].
pub trait ObservationSink {
    fn observe(&mut self, observation: Observation);
}

impl<F> ObservationSink for F
where
    F: FnMut(Observation),
{
    fn observe(&mut self, observation: Observation) {
        self(observation)
    }
}

impl ObservationSink for Observations {
    fn observe(&mut self, observation: Observation) {
        let pushed = self.push(observation);
        debug_assert!(pushed.is_ok(), "more observations than polled pins");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EventKind, Pin, Reading};

    fn observation(pin: Pin) -> Observation {
        Observation {
            kind: EventKind::AnalogRead,
            pin,
            value: Reading::AdcCode(0),
        }
    }

    #[test]
    fn buffer_holds_one_observation_per_polled_pin() {
        let mut observations = Observations::new();
        for pin in Pin::POLLED {
            observations.observe(observation(pin));
        }
        assert_eq!(observations.len(), Pin::POLLED.len());
        assert_eq!(observations[3].pin, Pin::Vcc1v8);
    }

    #[test]
    fn closure_receives_each_observation() {
        let mut count = 0;
        let mut sink = |o: Observation| {
            assert_eq!(o.pin, Pin::Btn);
            count += 1;
        };
        sink.observe(observation(Pin::Btn));
        sink.observe(observation(Pin::Btn));
        assert_eq!(count, 2);
    }
}
