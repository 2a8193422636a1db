//! Shared test infrastructure for pixled integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::RefCell;

use pixled::{Pulse, PulseTransmitter};

/// Largest pulse train the mock can record (10 RGBW pixels need 321).
pub const MOCK_CAPACITY: usize = 512;

/// Error the mock raises when armed to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockTransmitError;

/// Mock transmitter that records the last transmitted pulse train.
///
/// State lives behind a `RefCell` so a strip can drive the mock through a
/// shared reference (`PulseTransmitter` is implemented for
/// `&MockTransmitter`) while the test keeps inspecting it between renders.
/// It can also be armed to fail the next transmission to exercise error
/// paths.
pub struct MockTransmitter {
    inner: RefCell<MockState>,
}

struct MockState {
    last_pulses: heapless::Vec<Pulse, MOCK_CAPACITY>,
    last_bit_count: Option<usize>,
    transmit_count: usize,
    fail_next: bool,
}

impl MockTransmitter {
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(MockState {
                last_pulses: heapless::Vec::new(),
                last_bit_count: None,
                transmit_count: 0,
                fail_next: false,
            }),
        }
    }

    /// The pulse train from the most recent successful transmission.
    pub fn last_pulses(&self) -> heapless::Vec<Pulse, MOCK_CAPACITY> {
        self.inner.borrow().last_pulses.clone()
    }

    /// The bit count from the most recent successful transmission.
    pub fn last_bit_count(&self) -> Option<usize> {
        self.inner.borrow().last_bit_count
    }

    /// Number of successful transmissions.
    pub fn transmit_count(&self) -> usize {
        self.inner.borrow().transmit_count
    }

    /// Makes the next transmit call fail with `MockTransmitError`.
    pub fn fail_next_transmit(&self) {
        self.inner.borrow_mut().fail_next = true;
    }

    fn record(&self, pulses: &[Pulse], bit_count: usize) -> Result<(), MockTransmitError> {
        let mut state = self.inner.borrow_mut();

        if state.fail_next {
            state.fail_next = false;
            return Err(MockTransmitError);
        }

        state.last_pulses.clear();
        state
            .last_pulses
            .extend_from_slice(pulses)
            .expect("pulse train exceeds mock capacity");
        state.last_bit_count = Some(bit_count);
        state.transmit_count += 1;
        Ok(())
    }
}

impl PulseTransmitter for &MockTransmitter {
    type Error = MockTransmitError;

    fn transmit(&mut self, pulses: &[Pulse], bit_count: usize) -> Result<(), Self::Error> {
        self.record(pulses, bit_count)
    }
}

impl PulseTransmitter for MockTransmitter {
    type Error = MockTransmitError;

    fn transmit(&mut self, pulses: &[Pulse], bit_count: usize) -> Result<(), Self::Error> {
        self.record(pulses, bit_count)
    }
}
