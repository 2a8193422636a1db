//! Channel orders: the permutation between logical color channels and their
//! byte positions on the wire.
//!
//! Strips from different vendors expect their channels in different orders
//! (WS2812 wants GRB, SK6812W wants GRBW, ...). An order is captured once at
//! strip construction and determines the color buffer layout for the
//! strip's whole lifetime.

use crate::pixel::{RgbPixel, RgbwPixel};

/// Byte order for the three channels of an RGB pixel.
///
/// Each field is the byte offset (0-2) at which that channel is written.
/// The named constants cover every distinct ordering; their names read as
/// the output byte sequence (e.g. [`RgbOrder::GRB`] emits green first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbOrder {
    r: usize,
    g: usize,
    b: usize,
}

impl RgbOrder {
    /// Red, green, blue.
    pub const RGB: Self = Self::new(0, 1, 2);
    /// Red, blue, green.
    pub const RBG: Self = Self::new(0, 2, 1);
    /// Green, red, blue (WS2812 family).
    pub const GRB: Self = Self::new(1, 0, 2);
    /// Green, blue, red.
    pub const GBR: Self = Self::new(2, 0, 1);
    /// Blue, red, green.
    pub const BRG: Self = Self::new(1, 2, 0);
    /// Blue, green, red.
    pub const BGR: Self = Self::new(2, 1, 0);

    /// Creates an order from the byte offset of each channel.
    ///
    /// Offsets must form a permutation of `{0, 1, 2}`; the named constants
    /// are usually what you want.
    pub const fn new(r: usize, g: usize, b: usize) -> Self {
        Self { r, g, b }
    }

    /// Writes the pixel's channels into `buffer` starting at `offset`.
    ///
    /// `buffer[offset..offset + 3]` must be in bounds; like any slice
    /// access, violating this panics.
    #[inline]
    pub fn serialize(&self, pixel: RgbPixel, buffer: &mut [u8], offset: usize) {
        buffer[offset + self.r] = pixel.red;
        buffer[offset + self.g] = pixel.green;
        buffer[offset + self.b] = pixel.blue;
    }
}

/// Byte order for the four channels of an RGBW pixel.
///
/// Same scheme as [`RgbOrder`], with offsets 0-3. All 24 orderings are
/// provided as named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbwOrder {
    r: usize,
    g: usize,
    b: usize,
    w: usize,
}

impl RgbwOrder {
    /// Red, green, blue, white.
    pub const RGBW: Self = Self::new(0, 1, 2, 3);
    /// Red, green, white, blue.
    pub const RGWB: Self = Self::new(0, 1, 3, 2);
    /// Red, blue, green, white.
    pub const RBGW: Self = Self::new(0, 2, 1, 3);
    /// Red, blue, white, green.
    pub const RBWG: Self = Self::new(0, 3, 1, 2);
    /// Red, white, green, blue.
    pub const RWGB: Self = Self::new(0, 2, 3, 1);
    /// Red, white, blue, green.
    pub const RWBG: Self = Self::new(0, 3, 2, 1);
    /// Green, red, blue, white (SK6812W family).
    pub const GRBW: Self = Self::new(1, 0, 2, 3);
    /// Green, red, white, blue.
    pub const GRWB: Self = Self::new(1, 0, 3, 2);
    /// Green, blue, red, white.
    pub const GBRW: Self = Self::new(2, 0, 1, 3);
    /// Green, blue, white, red.
    pub const GBWR: Self = Self::new(3, 0, 1, 2);
    /// Green, white, red, blue.
    pub const GWRB: Self = Self::new(2, 0, 3, 1);
    /// Green, white, blue, red.
    pub const GWBR: Self = Self::new(3, 0, 2, 1);
    /// Blue, red, green, white.
    pub const BRGW: Self = Self::new(1, 2, 0, 3);
    /// Blue, red, white, green.
    pub const BRWG: Self = Self::new(1, 3, 0, 2);
    /// Blue, green, red, white.
    pub const BGRW: Self = Self::new(2, 1, 0, 3);
    /// Blue, green, white, red.
    pub const BGWR: Self = Self::new(3, 1, 0, 2);
    /// Blue, white, red, green.
    pub const BWRG: Self = Self::new(2, 3, 0, 1);
    /// Blue, white, green, red.
    pub const BWGR: Self = Self::new(3, 2, 0, 1);
    /// White, red, green, blue.
    pub const WRGB: Self = Self::new(1, 2, 3, 0);
    /// White, red, blue, green.
    pub const WRBG: Self = Self::new(1, 3, 2, 0);
    /// White, green, red, blue.
    pub const WGRB: Self = Self::new(2, 1, 3, 0);
    /// White, green, blue, red.
    pub const WGBR: Self = Self::new(3, 1, 2, 0);
    /// White, blue, red, green.
    pub const WBRG: Self = Self::new(2, 3, 1, 0);
    /// White, blue, green, red.
    pub const WBGR: Self = Self::new(3, 2, 1, 0);

    /// Creates an order from the byte offset of each channel.
    ///
    /// Offsets must form a permutation of `{0, 1, 2, 3}`.
    pub const fn new(r: usize, g: usize, b: usize, w: usize) -> Self {
        Self { r, g, b, w }
    }

    /// Writes the pixel's channels into `buffer` starting at `offset`.
    ///
    /// `buffer[offset..offset + 4]` must be in bounds.
    #[inline]
    pub fn serialize(&self, pixel: RgbwPixel, buffer: &mut [u8], offset: usize) {
        buffer[offset + self.r] = pixel.red;
        buffer[offset + self.g] = pixel.green;
        buffer[offset + self.b] = pixel.blue;
        buffer[offset + self.w] = pixel.white;
    }
}
