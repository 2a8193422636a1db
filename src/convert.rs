//! Color space converters.
//!
//! Pure functions with no state: [`hsb_to_rgb`] maps hue/saturation/brightness
//! to 8-bit RGB channels, and [`RgbToRgbw`] extracts a white component from
//! common RGB energy. The RGB→RGBW policy is chosen once at strip
//! construction and never switched at runtime.

use crate::pixel::{HsbPixel, RgbPixel, RgbwPixel};

/// Converts an HSB color to an RGB pixel.
///
/// Hue is interpreted in degrees; values >= 360 are normalized to 0.
/// Saturation <= 0 produces an achromatic (grey) pixel from brightness alone.
/// Each output channel is scaled by 255 and truncated to 8 bits.
///
/// Saturation/brightness outside `[0, 1]` are not rejected: the result is
/// deterministic (the final float-to-u8 cast saturates at 0 and 255) but may
/// be visually wrong. Callers own their input ranges.
pub fn hsb_to_rgb(pixel: HsbPixel) -> RgbPixel {
    let HsbPixel {
        hue,
        saturation,
        brightness,
    } = pixel;

    if saturation <= 0.0 {
        let value = (brightness * 255.0) as u8;
        return RgbPixel::new(value, value, value);
    }

    let mut hh = hue;
    if hh >= 360.0 {
        hh = 0.0;
    }
    hh /= 60.0;

    // Sector 0-5 of the color wheel plus the fractional position within it.
    let sector = hh as i32;
    let ff = hh - sector as f32;

    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * ff);
    let t = brightness * (1.0 - saturation * (1.0 - ff));

    let (red, green, blue) = match sector {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    RgbPixel::new(
        (red * 255.0) as u8,
        (green * 255.0) as u8,
        (blue * 255.0) as u8,
    )
}

/// Policy for deriving an RGBW pixel from an RGB pixel.
///
/// Selected at strip construction (see [`crate::strip::RgbwStrip::new`]) and
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbToRgbw {
    /// `w = min(r, g, b)`; each color channel is reduced by `w`.
    ///
    /// Cheap, but tends to wash out saturated colors less gracefully than
    /// [`RgbToRgbw::Complex`].
    Simple,

    /// Whiteness extraction via the scaled-luminance method.
    ///
    /// Scales the input so its largest channel maps to 255, computes a
    /// whiteness value from the scaled extremes remapped around the 127.5
    /// midpoint, scales it back, then moves that amount from the color
    /// channels to the white channel. Based on
    /// <https://stackoverflow.com/questions/40312216/converting-rgb-to-rgbw>.
    #[default]
    Complex,
}

impl RgbToRgbw {
    /// Converts an RGB pixel to RGBW using this policy.
    pub fn convert(self, pixel: RgbPixel) -> RgbwPixel {
        match self {
            RgbToRgbw::Simple => simple_rgb_to_rgbw(pixel),
            RgbToRgbw::Complex => complex_rgb_to_rgbw(pixel),
        }
    }
}

fn simple_rgb_to_rgbw(pixel: RgbPixel) -> RgbwPixel {
    let white = pixel.red.min(pixel.green).min(pixel.blue);
    RgbwPixel::new(
        pixel.red - white,
        pixel.green - white,
        pixel.blue - white,
        white,
    )
}

fn complex_rgb_to_rgbw(pixel: RgbPixel) -> RgbwPixel {
    let max = pixel.red.max(pixel.green).max(pixel.blue);

    // Pure black: bail out before the division below.
    if max == 0 {
        return RgbwPixel::new(0, 0, 0, 0);
    }

    // Scale the color so its largest channel hits 255 (the 100%-hue color).
    let multiplier = 255.0 / f32::from(max);
    let hr = f32::from(pixel.red) * multiplier;
    let hg = f32::from(pixel.green) * multiplier;
    let hb = f32::from(pixel.blue) * multiplier;

    // Whiteness (not strictly luminance) of the scaled color, mapped back
    // to the original scale.
    let max_h = hr.max(hg).max(hb);
    let min_h = hr.min(hg).min(hb);
    let luminance = ((max_h + min_h) / 2.0 - 127.5) * (255.0 / 127.5) / multiplier;

    // The saturating float-to-u8 casts clamp at 0, so rounding error in the
    // subtraction can never wrap a dark channel up to near-white.
    RgbwPixel::new(
        (f32::from(pixel.red) - luminance) as u8,
        (f32::from(pixel.green) - luminance) as u8,
        (f32::from(pixel.blue) - luminance) as u8,
        luminance as u8,
    )
}
