//! Strip controllers: the owners of the color buffer and the render path.
//!
//! A controller holds the channel-ordered color buffer, the conversion and
//! ordering configuration, and the reusable pulse buffer. Pixel-set
//! operations are idempotent buffer writes; [`RgbStrip::render`] /
//! [`RgbwStrip::render`] serialize the whole buffer into a pulse train and
//! hand it to the [`PulseTransmitter`], blocking until transmission is done.
//!
//! Everything is single-threaded and synchronous by construction: all
//! mutating operations take `&mut self`, and each controller exclusively
//! owns its transmitter channel, so there is nothing to lock.

use crate::convert::{RgbToRgbw, hsb_to_rgb};
use crate::order::{RgbOrder, RgbwOrder};
use crate::pixel::{HsbPixel, RgbPixel, RgbwPixel};
use crate::timing::StripTiming;
use crate::transmit::{Pulse, PulseTransmitter};

/// Bytes per pixel on an RGB strip.
pub const RGB_BYTES_PER_PIXEL: usize = 3;

/// Bytes per pixel on an RGBW strip.
pub const RGBW_BYTES_PER_PIXEL: usize = 4;

/// Encoded bits per pixel on an RGB strip.
pub const RGB_BITS_PER_PIXEL: usize = 24;

/// Encoded bits per pixel on an RGBW strip.
pub const RGBW_BITS_PER_PIXEL: usize = 32;

/// Pulse buffer length needed for an RGB strip of `pixel_count` pixels:
/// one pulse per bit plus the terminator.
///
/// Use it to derive the `P` parameter of [`RgbStrip`]:
///
/// ```
/// use pixled::rgb_pulse_buffer_len;
/// const NUM_LEDS: usize = 30;
/// const P: usize = rgb_pulse_buffer_len(NUM_LEDS);
/// assert_eq!(P, 30 * 24 + 1);
/// ```
pub const fn rgb_pulse_buffer_len(pixel_count: usize) -> usize {
    pixel_count * RGB_BITS_PER_PIXEL + 1
}

/// Pulse buffer length needed for an RGBW strip of `pixel_count` pixels.
pub const fn rgbw_pulse_buffer_len(pixel_count: usize) -> usize {
    pixel_count * RGBW_BITS_PER_PIXEL + 1
}

/// Errors from strip buffer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    /// Pixel index beyond the strip's length.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The strip's pixel count.
        len: usize,
    },
}

impl core::fmt::Display for StripError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StripError::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {} out of range for strip of {} pixels", index, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StripError {}

/// Encodes `word`'s top `bits` bits, MSB first, into pulse descriptors.
fn encode_word(word: u32, bits: usize, timing: &StripTiming, out: &mut [Pulse]) {
    for (slot, bit) in out.iter_mut().zip((0..bits).rev()) {
        *slot = if word & (1 << bit) != 0 {
            timing.one_pulse()
        } else {
            timing.zero_pulse()
        };
    }
}

/// Controller for an RGB strip (WS2812, WS2815, SK6812, ...).
///
/// Owns the channel-ordered color buffer and the pulse buffer, plus the
/// transmitter channel for its lifetime.
///
/// # Type Parameters
/// * `Tx` - Transmitter implementation
/// * `N` - Pixel count
/// * `P` - Pulse buffer length; must equal [`rgb_pulse_buffer_len`]`(N)`
///   (checked at compile time)
///
/// # Example
///
/// ```
/// use pixled::{RgbOrder, RgbPixel, RgbStrip, StripTiming, rgb_pulse_buffer_len};
/// # use pixled::{Pulse, PulseTransmitter};
/// # struct NullTransmitter;
/// # impl PulseTransmitter for NullTransmitter {
/// #     type Error = core::convert::Infallible;
/// #     fn transmit(&mut self, _: &[Pulse], _: usize) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
///
/// const NUM_LEDS: usize = 8;
/// let mut strip = RgbStrip::<_, NUM_LEDS, { rgb_pulse_buffer_len(NUM_LEDS) }>::new(
///     NullTransmitter,
///     RgbOrder::GRB,
///     StripTiming::WS2812,
/// );
/// strip.set_pixel(0, RgbPixel::new(255, 0, 0)).unwrap();
/// strip.render().unwrap();
/// ```
pub struct RgbStrip<Tx: PulseTransmitter, const N: usize, const P: usize> {
    transmitter: Tx,
    order: RgbOrder,
    timing: StripTiming,
    buffer: [[u8; RGB_BYTES_PER_PIXEL]; N],
    pulses: [Pulse; P],
}

impl<Tx: PulseTransmitter, const N: usize, const P: usize> RgbStrip<Tx, N, P> {
    /// Creates a strip with a zeroed color buffer.
    ///
    /// The transmitter must already be configured for its pin and channel;
    /// the strip owns it until [`RgbStrip::free`].
    pub fn new(transmitter: Tx, order: RgbOrder, timing: StripTiming) -> Self {
        const {
            assert!(
                P == N * RGB_BITS_PER_PIXEL + 1,
                "P must equal rgb_pulse_buffer_len(N)"
            );
        }

        Self {
            transmitter,
            order,
            timing,
            buffer: [[0; RGB_BYTES_PER_PIXEL]; N],
            pulses: [Pulse::TERMINATOR; P],
        }
    }

    /// Returns the number of pixels on the strip.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` for a zero-pixel strip.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the channel order.
    pub const fn order(&self) -> RgbOrder {
        self.order
    }

    /// Returns the bit timing config.
    pub const fn timing(&self) -> StripTiming {
        self.timing
    }

    /// Sets a pixel's color. The strip is not updated until [`RgbStrip::render`].
    ///
    /// # Errors
    /// Returns [`StripError::IndexOutOfRange`] if `index >= len()`.
    pub fn set_pixel(&mut self, index: usize, pixel: RgbPixel) -> Result<(), StripError> {
        self.check_index(index)?;
        self.order.serialize(
            pixel,
            self.buffer.as_flattened_mut(),
            index * RGB_BYTES_PER_PIXEL,
        );
        Ok(())
    }

    /// Sets a pixel from an HSB color, converting through
    /// [`hsb_to_rgb`](crate::convert::hsb_to_rgb).
    ///
    /// # Errors
    /// Returns [`StripError::IndexOutOfRange`] if `index >= len()`.
    pub fn set_hsb_pixel(&mut self, index: usize, pixel: HsbPixel) -> Result<(), StripError> {
        self.set_pixel(index, hsb_to_rgb(pixel))
    }

    /// Turns every pixel off by zero-filling the color buffer.
    pub fn clear(&mut self) {
        self.buffer = [[0; RGB_BYTES_PER_PIXEL]; N];
    }

    /// Raw view of the color buffer: `len() * 3` bytes in channel order.
    ///
    /// Escape hatch for bulk reads; layout follows [`RgbStrip::order`].
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_flattened()
    }

    /// Mutable raw view of the color buffer.
    ///
    /// Escape hatch for bulk writes. The caller must respect the strip's
    /// channel order; there is no further validation.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.buffer.as_flattened_mut()
    }

    /// Encodes the color buffer into pulses and transmits it.
    ///
    /// Each pixel's three ordered bytes are concatenated into a 24-bit word
    /// and streamed MSB first, one pulse descriptor per bit, followed by
    /// the terminator. Blocks until the transmitter reports the waveform
    /// fully emitted. Rendering twice without intervening writes
    /// retransmits identical data.
    ///
    /// # Errors
    /// Propagates the transmitter's error; no retry is attempted and the
    /// strip remains usable.
    pub fn render(&mut self) -> Result<(), Tx::Error> {
        for (i, bytes) in self.buffer.iter().enumerate() {
            let word = u32::from(bytes[0]) << 16 | u32::from(bytes[1]) << 8 | u32::from(bytes[2]);
            let start = i * RGB_BITS_PER_PIXEL;
            encode_word(
                word,
                RGB_BITS_PER_PIXEL,
                &self.timing,
                &mut self.pulses[start..start + RGB_BITS_PER_PIXEL],
            );
        }
        self.pulses[N * RGB_BITS_PER_PIXEL] = Pulse::TERMINATOR;

        self.transmitter
            .transmit(&self.pulses, N * RGB_BITS_PER_PIXEL)
    }

    /// Consumes the strip and hands the transmitter channel back.
    pub fn free(self) -> Tx {
        self.transmitter
    }

    fn check_index(&self, index: usize) -> Result<(), StripError> {
        if index >= N {
            return Err(StripError::IndexOutOfRange { index, len: N });
        }
        Ok(())
    }
}

/// Controller for an RGBW strip (SK6812W, ...).
///
/// Like [`RgbStrip`] with a fourth channel and an [`RgbToRgbw`] policy for
/// the RGB and HSB set operations. `P` must equal
/// [`rgbw_pulse_buffer_len`]`(N)`.
pub struct RgbwStrip<Tx: PulseTransmitter, const N: usize, const P: usize> {
    transmitter: Tx,
    order: RgbwOrder,
    converter: RgbToRgbw,
    timing: StripTiming,
    buffer: [[u8; RGBW_BYTES_PER_PIXEL]; N],
    pulses: [Pulse; P],
}

impl<Tx: PulseTransmitter, const N: usize, const P: usize> RgbwStrip<Tx, N, P> {
    /// Creates a strip with a zeroed color buffer.
    ///
    /// `converter` fixes the RGB→RGBW policy for the strip's lifetime.
    pub fn new(
        transmitter: Tx,
        order: RgbwOrder,
        converter: RgbToRgbw,
        timing: StripTiming,
    ) -> Self {
        const {
            assert!(
                P == N * RGBW_BITS_PER_PIXEL + 1,
                "P must equal rgbw_pulse_buffer_len(N)"
            );
        }

        Self {
            transmitter,
            order,
            converter,
            timing,
            buffer: [[0; RGBW_BYTES_PER_PIXEL]; N],
            pulses: [Pulse::TERMINATOR; P],
        }
    }

    /// Returns the number of pixels on the strip.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` for a zero-pixel strip.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the channel order.
    pub const fn order(&self) -> RgbwOrder {
        self.order
    }

    /// Returns the RGB→RGBW conversion policy.
    pub const fn converter(&self) -> RgbToRgbw {
        self.converter
    }

    /// Returns the bit timing config.
    pub const fn timing(&self) -> StripTiming {
        self.timing
    }

    /// Sets a pixel's four channels directly, bypassing conversion.
    ///
    /// # Errors
    /// Returns [`StripError::IndexOutOfRange`] if `index >= len()`.
    pub fn set_pixel(&mut self, index: usize, pixel: RgbwPixel) -> Result<(), StripError> {
        self.check_index(index)?;
        self.order.serialize(
            pixel,
            self.buffer.as_flattened_mut(),
            index * RGBW_BYTES_PER_PIXEL,
        );
        Ok(())
    }

    /// Sets a pixel from an RGB color through the configured converter.
    ///
    /// # Errors
    /// Returns [`StripError::IndexOutOfRange`] if `index >= len()`.
    pub fn set_rgb_pixel(&mut self, index: usize, pixel: RgbPixel) -> Result<(), StripError> {
        self.set_pixel(index, self.converter.convert(pixel))
    }

    /// Sets a pixel from an HSB color: HSB to RGB, then RGB to RGBW.
    ///
    /// # Errors
    /// Returns [`StripError::IndexOutOfRange`] if `index >= len()`.
    pub fn set_hsb_pixel(&mut self, index: usize, pixel: HsbPixel) -> Result<(), StripError> {
        self.set_rgb_pixel(index, hsb_to_rgb(pixel))
    }

    /// Turns every pixel off by zero-filling the color buffer.
    pub fn clear(&mut self) {
        self.buffer = [[0; RGBW_BYTES_PER_PIXEL]; N];
    }

    /// Raw view of the color buffer: `len() * 4` bytes in channel order.
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_flattened()
    }

    /// Mutable raw view of the color buffer.
    ///
    /// The caller must respect the strip's channel order.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        self.buffer.as_flattened_mut()
    }

    /// Encodes the color buffer into pulses and transmits it.
    ///
    /// Same contract as [`RgbStrip::render`], with 32-bit pixel words.
    ///
    /// # Errors
    /// Propagates the transmitter's error; the strip remains usable.
    pub fn render(&mut self) -> Result<(), Tx::Error> {
        for (i, bytes) in self.buffer.iter().enumerate() {
            let word = u32::from(bytes[0]) << 24
                | u32::from(bytes[1]) << 16
                | u32::from(bytes[2]) << 8
                | u32::from(bytes[3]);
            let start = i * RGBW_BITS_PER_PIXEL;
            encode_word(
                word,
                RGBW_BITS_PER_PIXEL,
                &self.timing,
                &mut self.pulses[start..start + RGBW_BITS_PER_PIXEL],
            );
        }
        self.pulses[N * RGBW_BITS_PER_PIXEL] = Pulse::TERMINATOR;

        self.transmitter
            .transmit(&self.pulses, N * RGBW_BITS_PER_PIXEL)
    }

    /// Consumes the strip and hands the transmitter channel back.
    pub fn free(self) -> Tx {
        self.transmitter
    }

    fn check_index(&self, index: usize) -> Result<(), StripError> {
        if index >= N {
            return Err(StripError::IndexOutOfRange { index, len: N });
        }
        Ok(())
    }
}
