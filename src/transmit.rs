//! The pulse transmission boundary.
//!
//! The driver core never touches hardware directly: it produces a flat
//! sequence of [`Pulse`] descriptors and hands it to a [`PulseTransmitter`]
//! implementation. On an ESP32 that is the RMT peripheral; elsewhere it
//! may be a PIO block, a FlexIO timer, or a test mock.

/// Output line level during one half of a pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Line driven low.
    Low,
    /// Line driven high.
    High,
}

/// One encoded bit's waveform: two (level, duration) halves.
///
/// Durations are in transmitter ticks. Every data pulse the driver emits is
/// high-then-low; the all-zero [`Pulse::TERMINATOR`] marks the end of a
/// transmission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    /// Level of the first half.
    pub level0: Level,
    /// Duration of the first half, in ticks.
    pub duration0: u16,
    /// Level of the second half.
    pub level1: Level,
    /// Duration of the second half, in ticks.
    pub duration1: u16,
}

impl Pulse {
    /// End-of-transmission sentinel: both halves low with zero duration.
    pub const TERMINATOR: Self = Self::new(Level::Low, 0, Level::Low, 0);

    /// Creates a pulse descriptor.
    pub const fn new(level0: Level, duration0: u16, level1: Level, duration1: u16) -> Self {
        Self {
            level0,
            duration0,
            level1,
            duration1,
        }
    }
}

/// Capability to emit a pulse train on a data pin.
///
/// Implementations own one exclusively reserved output channel, configured
/// (pin, tick clock divider) when the implementation is constructed and
/// released when it is dropped or handed back by the strip. Configuration
/// failures (e.g. channel already in use) belong to that constructor; by
/// the time a transmitter reaches a strip it must be ready to transmit.
///
/// One transmitter drives exactly one strip. The strip takes the
/// transmitter by value, so sharing a channel between two strips is
/// unrepresentable without deliberate effort.
pub trait PulseTransmitter {
    /// Hardware transmission error type.
    type Error;

    /// Transmits `pulses` as a single atomic waveform.
    ///
    /// `pulses` holds one descriptor per encoded bit followed by the
    /// [`Pulse::TERMINATOR`] sentinel; `bit_count` is the number of valid
    /// data bits (`pulses.len() - 1`). Implementations must block until
    /// the waveform has been physically emitted: the caller reuses the
    /// pulse buffer for its next render, so returning early would let a
    /// buffer mutation race the ongoing transfer.
    ///
    /// # Errors
    /// Returns the hardware error on transmission failure (driver busy,
    /// peripheral fault). The driver performs no retries.
    fn transmit(&mut self, pulses: &[Pulse], bit_count: usize) -> Result<(), Self::Error>;
}
