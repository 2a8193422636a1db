//! Per-model pulse timing configuration.
//!
//! Addressable LEDs encode each bit as a high pulse followed by a low pulse;
//! the two durations distinguish a 0-bit from a 1-bit, with tolerances in
//! the hundreds of nanoseconds. [`StripTiming`] holds those four durations
//! in transmitter ticks, and the vendor presets carry the datasheet values.

use crate::transmit::{Level, Pulse};

/// Transmitter clock in units of 10 MHz (i.e. 80 MHz).
///
/// Expressed in tens of MHz so `ns * CLOCK / DIVIDER / 100` stays within
/// integer range without losing precision.
const TICK_CLOCK: u32 = 8;

/// Transmitter clock divider. 80 MHz / 8 gives a 100 ns tick.
const TICK_DIVIDER: u32 = 8;

/// Converts a nanosecond duration to transmitter ticks.
const fn ns_to_ticks(ns: u16) -> u16 {
    (ns as u32 * TICK_CLOCK / TICK_DIVIDER / 100) as u16
}

/// Pulse-width constants defining what a 0-bit and a 1-bit look like on the
/// wire, in transmitter ticks.
///
/// Use a preset ([`StripTiming::WS2812`], ...) for supported models, or
/// [`StripTiming::from_ns`] to drive other strips with datasheet values.
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripTiming {
    /// High duration of a 0-bit, in ticks.
    pub t0h: u16,
    /// Low duration of a 0-bit, in ticks.
    pub t0l: u16,
    /// High duration of a 1-bit, in ticks.
    pub t1h: u16,
    /// Low duration of a 1-bit, in ticks.
    pub t1l: u16,
}

impl StripTiming {
    /// WS2812 (NeoPixel) timing: 350/800 ns for a 0, 700/600 ns for a 1.
    pub const WS2812: Self = Self::from_ns(350, 800, 700, 600);

    /// WS2815 timing: 300/800 ns for a 0, 800/300 ns for a 1.
    pub const WS2815: Self = Self::from_ns(300, 800, 800, 300);

    /// SK6812 (RGB) timing: 300/900 ns for a 0, 600/600 ns for a 1.
    pub const SK6812: Self = Self::from_ns(300, 900, 600, 600);

    /// SK6812 RGBW timing: identical bit timing to the RGB variant.
    pub const SK6812W: Self = Self::from_ns(300, 900, 600, 600);

    /// Creates a timing config from datasheet nanosecond values.
    ///
    /// The conversion to ticks happens once, here.
    pub const fn from_ns(t0h: u16, t0l: u16, t1h: u16, t1l: u16) -> Self {
        Self {
            t0h: ns_to_ticks(t0h),
            t0l: ns_to_ticks(t0l),
            t1h: ns_to_ticks(t1h),
            t1l: ns_to_ticks(t1l),
        }
    }

    /// Creates a timing config directly from tick counts.
    pub const fn from_ticks(t0h: u16, t0l: u16, t1h: u16, t1l: u16) -> Self {
        Self { t0h, t0l, t1h, t1l }
    }

    /// The pulse descriptor encoding a 0-bit: high for `t0h`, low for `t0l`.
    #[inline]
    pub const fn zero_pulse(&self) -> Pulse {
        Pulse::new(Level::High, self.t0h, Level::Low, self.t0l)
    }

    /// The pulse descriptor encoding a 1-bit: high for `t1h`, low for `t1l`.
    #[inline]
    pub const fn one_pulse(&self) -> Pulse {
        Pulse::new(Level::High, self.t1h, Level::Low, self.t1l)
    }
}
