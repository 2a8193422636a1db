#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`RgbPixel` / `RgbwPixel` / `HsbPixel`**: plain color value types (8 bits per channel; HSB in floats)
//! - **`hsb_to_rgb`**: HSB to 8-bit RGB conversion
//! - **`RgbToRgbw`**: policy for extracting a white component from an RGB color (`Simple` or `Complex`)
//! - **`RgbOrder` / `RgbwOrder`**: which byte position on the wire carries which channel
//! - **`StripTiming`**: per-model pulse widths for a 0-bit and a 1-bit, with WS2812/WS2815/SK6812 presets
//! - **`Pulse` / `PulseTransmitter`**: the encoded waveform and the trait to implement for your pulse peripheral
//! - **`RgbStrip` / `RgbwStrip`**: strip controllers owning the color buffer and the render path
//!
//! Pixel-set operations only write the internal color buffer; `render()`
//! encodes the buffer into a pulse train and blocks until the transmitter
//! has emitted it. Colors can also come from `palette::Srgb` (0.0-1.0
//! range) via the `From` conversions on `RgbPixel`.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod convert;
pub mod order;
pub mod pixel;
pub mod strip;
pub mod timing;
pub mod transmit;

pub use convert::{RgbToRgbw, hsb_to_rgb};
pub use order::{RgbOrder, RgbwOrder};
pub use pixel::{HsbPixel, RgbPixel, RgbwPixel};
pub use strip::{
    RGB_BITS_PER_PIXEL, RGB_BYTES_PER_PIXEL, RGBW_BITS_PER_PIXEL, RGBW_BYTES_PER_PIXEL, RgbStrip,
    RgbwStrip, StripError, rgb_pulse_buffer_len, rgbw_pulse_buffer_len,
};
pub use timing::StripTiming;
pub use transmit::{Level, Pulse, PulseTransmitter};
