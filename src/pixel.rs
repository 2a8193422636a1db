//! Pixel value types for the supported color representations.
//!
//! These are plain value types with no behavior beyond construction and
//! equality. Channel relationships (e.g. how much white an RGBW pixel
//! carries for a given RGB color) are decided by the converters in
//! [`crate::convert`], never by the types themselves.

use palette::Srgb;

/// An RGB pixel with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbPixel {
    /// The red component, 0-255.
    pub red: u8,
    /// The green component, 0-255.
    pub green: u8,
    /// The blue component, 0-255.
    pub blue: u8,
}

impl RgbPixel {
    /// Creates a new RGB pixel.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// An RGBW pixel with 8 bits per channel.
///
/// No numeric invariant ties `white` to the RGB channels; callers and
/// converters choose the relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbwPixel {
    /// The red component, 0-255.
    pub red: u8,
    /// The green component, 0-255.
    pub green: u8,
    /// The blue component, 0-255.
    pub blue: u8,
    /// The white component, 0-255.
    pub white: u8,
}

impl RgbwPixel {
    /// Creates a new RGBW pixel.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }
}

/// An HSB (hue, saturation, brightness) pixel.
///
/// Hue is in degrees, `[0, 360)`; values >= 360 are normalized to 0 by the
/// converter. Saturation and brightness are in `[0, 1]`. Out-of-range
/// saturation/brightness values are not validated; the conversion result is
/// deterministic but possibly visually wrong (see [`crate::convert::hsb_to_rgb`]).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HsbPixel {
    /// Color hue in degrees, `[0, 360)`.
    pub hue: f32,
    /// Color saturation, `[0, 1]`.
    pub saturation: f32,
    /// Color brightness, `[0, 1]`.
    pub brightness: f32,
}

impl HsbPixel {
    /// Creates a new HSB pixel.
    #[inline]
    pub const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }
}

impl From<Srgb> for RgbPixel {
    /// Converts a `palette` float color (0.0-1.0 range) to 8-bit channels.
    fn from(color: Srgb) -> Self {
        let (red, green, blue) = color.into_format::<u8>().into_components();
        Self { red, green, blue }
    }
}

impl From<RgbPixel> for Srgb {
    fn from(pixel: RgbPixel) -> Self {
        Srgb::<u8>::new(pixel.red, pixel.green, pixel.blue).into_format()
    }
}
