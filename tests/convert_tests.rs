//! Integration tests for color converters

use pixled::{HsbPixel, RgbPixel, RgbToRgbw, RgbwPixel, Srgb, hsb_to_rgb};

#[test]
fn hsb_zero_saturation_is_achromatic_for_any_hue() {
    for hue in [0.0, 42.0, 120.0, 240.0, 359.0] {
        let pixel = hsb_to_rgb(HsbPixel::new(hue, 0.0, 0.5));
        // 0.5 * 255 truncates to 127
        assert_eq!(pixel, RgbPixel::new(127, 127, 127));
    }
}

#[test]
fn hsb_primary_hues_map_to_pure_channels() {
    assert_eq!(
        hsb_to_rgb(HsbPixel::new(0.0, 1.0, 1.0)),
        RgbPixel::new(255, 0, 0)
    );
    assert_eq!(
        hsb_to_rgb(HsbPixel::new(120.0, 1.0, 1.0)),
        RgbPixel::new(0, 255, 0)
    );
    assert_eq!(
        hsb_to_rgb(HsbPixel::new(240.0, 1.0, 1.0)),
        RgbPixel::new(0, 0, 255)
    );
}

#[test]
fn hsb_secondary_hues_mix_two_channels() {
    assert_eq!(
        hsb_to_rgb(HsbPixel::new(60.0, 1.0, 1.0)),
        RgbPixel::new(255, 255, 0)
    );
    assert_eq!(
        hsb_to_rgb(HsbPixel::new(180.0, 1.0, 1.0)),
        RgbPixel::new(0, 255, 255)
    );
    assert_eq!(
        hsb_to_rgb(HsbPixel::new(300.0, 1.0, 1.0)),
        RgbPixel::new(255, 0, 255)
    );
}

#[test]
fn hsb_hue_360_wraps_to_zero() {
    assert_eq!(
        hsb_to_rgb(HsbPixel::new(360.0, 1.0, 1.0)),
        hsb_to_rgb(HsbPixel::new(0.0, 1.0, 1.0))
    );
}

#[test]
fn hsb_zero_brightness_is_black() {
    assert_eq!(
        hsb_to_rgb(HsbPixel::new(200.0, 1.0, 0.0)),
        RgbPixel::new(0, 0, 0)
    );
}

#[test]
fn hsb_out_of_range_brightness_saturates_instead_of_wrapping() {
    // Documented policy: not validated, but the float-to-u8 cast clamps.
    assert_eq!(
        hsb_to_rgb(HsbPixel::new(0.0, 0.0, 2.0)),
        RgbPixel::new(255, 255, 255)
    );
    assert_eq!(
        hsb_to_rgb(HsbPixel::new(0.0, 0.0, -1.0)),
        RgbPixel::new(0, 0, 0)
    );
}

#[test]
fn simple_converter_extracts_min_channel_as_white() {
    let converted = RgbToRgbw::Simple.convert(RgbPixel::new(200, 100, 50));
    assert_eq!(converted, RgbwPixel::new(150, 50, 0, 50));
}

#[test]
fn simple_converter_maps_black_to_black() {
    // min(0, 0, 0) = 0, so no special case is needed
    let converted = RgbToRgbw::Simple.convert(RgbPixel::new(0, 0, 0));
    assert_eq!(converted, RgbwPixel::new(0, 0, 0, 0));
}

#[test]
fn simple_converter_moves_grey_entirely_to_white() {
    let converted = RgbToRgbw::Simple.convert(RgbPixel::new(90, 90, 90));
    assert_eq!(converted, RgbwPixel::new(0, 0, 0, 90));
}

#[test]
fn complex_converter_maps_black_to_black() {
    // max(0, 0, 0) = 0 must short-circuit before the division
    let converted = RgbToRgbw::Complex.convert(RgbPixel::new(0, 0, 0));
    assert_eq!(converted, RgbwPixel::new(0, 0, 0, 0));
}

#[test]
fn complex_converter_moves_grey_entirely_to_white() {
    // Grey levels chosen so 255 / v and the backscaling stay exact in f32.
    for value in [51, 128, 255] {
        let converted = RgbToRgbw::Complex.convert(RgbPixel::new(value, value, value));
        assert_eq!(converted, RgbwPixel::new(0, 0, 0, value));
    }
}

#[test]
fn complex_converter_leaves_saturated_primary_untouched() {
    let converted = RgbToRgbw::Complex.convert(RgbPixel::new(255, 0, 0));
    assert_eq!(converted, RgbwPixel::new(255, 0, 0, 0));
}

#[test]
fn complex_converter_extracts_whiteness_from_mixed_color() {
    // 255 / 30 = 8.5 keeps every intermediate exact: luminance works out to 10.
    let converted = RgbToRgbw::Complex.convert(RgbPixel::new(10, 20, 30));
    assert_eq!(converted, RgbwPixel::new(0, 10, 20, 10));
}

#[test]
fn complex_is_the_default_policy() {
    assert_eq!(RgbToRgbw::default(), RgbToRgbw::Complex);
}

#[test]
fn srgb_conversions_round_trip() {
    let pixel = RgbPixel::new(238, 7, 12);
    let srgb: Srgb = pixel.into();
    assert_eq!(RgbPixel::from(srgb), pixel);

    assert_eq!(
        RgbPixel::from(Srgb::new(1.0, 0.0, 1.0)),
        RgbPixel::new(255, 0, 255)
    );
}
