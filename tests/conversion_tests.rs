//! Integration tests for the pure color conversions

mod common;
use common::*;

use homekit_color::{
    Chromaticity, ConversionError, Hsb, Rgb8, hsv_to_rgb, kelvin_to_rgb, rgb_to_hsv,
    rgb_to_kelvin, rgb_to_xy, xy_to_rgb,
};
use palette::{FromColor, Hsv, Srgb};

// ============================================================================
// HSB <-> RGB
// ============================================================================

#[test]
fn hsv_to_rgb_creates_primary_colors() {
    assert_eq!(hsv_to_rgb(Hsb::new(0.0, 100.0, 100.0)), RED);
    assert_eq!(hsv_to_rgb(Hsb::new(120.0, 100.0, 100.0)), GREEN);
    assert_eq!(hsv_to_rgb(Hsb::new(240.0, 100.0, 100.0)), BLUE);
    assert_eq!(hsv_to_rgb(Hsb::new(0.0, 0.0, 100.0)), WHITE);
}

#[test]
fn rgb_round_trips_through_hsb_within_one_step() {
    for rgb in rgb_grid(5) {
        let back = hsv_to_rgb(rgb_to_hsv(rgb));
        assert!(
            channels_within(back, rgb, 1),
            "{:?} came back as {:?}",
            rgb,
            back
        );
    }
}

#[test]
fn hue_is_never_negative_or_full_turn() {
    for rgb in rgb_grid(15) {
        let hsb = rgb_to_hsv(rgb);
        assert!(hsb.hue >= 0.0 && hsb.hue < 360.0, "{:?} -> {}", rgb, hsb.hue);
        assert!(hsb.saturation >= 0.0 && hsb.saturation <= 100.0);
        assert!(hsb.brightness >= 0.0 && hsb.brightness <= 100.0);
    }
}

#[test]
fn grey_is_achromatic() {
    let hsb = rgb_to_hsv(Rgb8::new(128, 128, 128));
    assert_eq!(hsb.saturation, 0.0);
    assert_eq!(hsb.hue, 0.0);
}

#[test]
fn rgb_to_hsv_agrees_with_palette() {
    for rgb in rgb_grid(51) {
        let ours = rgb_to_hsv(rgb);
        let reference: Hsv = Hsv::from_color(Srgb::new(
            f32::from(rgb.red) / 255.0,
            f32::from(rgb.green) / 255.0,
            f32::from(rgb.blue) / 255.0,
        ));

        if ours.saturation > 0.0 {
            let hue = f64::from(reference.hue.into_positive_degrees());
            let delta = (ours.hue - hue).abs() % 360.0;
            assert!(delta.min(360.0 - delta) < 0.01, "{:?}: {} vs {}", rgb, ours.hue, hue);
        }
        assert!((ours.saturation - f64::from(reference.saturation) * 100.0).abs() < 0.01);
        assert!((ours.brightness - f64::from(reference.value) * 100.0).abs() < 0.01);
    }
}

// ============================================================================
// RGB <-> xy
// ============================================================================

#[test]
fn pure_red_has_srgb_primary_chromaticity() {
    let xy = rgb_to_xy(RED);
    assert!((xy.x - 0.64).abs() < 0.001);
    assert!((xy.y - 0.33).abs() < 0.001);
}

#[test]
fn chromaticity_stays_in_unit_square() {
    for rgb in rgb_grid(15) {
        let xy = rgb_to_xy(rgb);
        assert!((0.0..=1.0).contains(&xy.x), "{:?} -> x = {}", rgb, xy.x);
        assert!((0.0..=1.0).contains(&xy.y), "{:?} -> y = {}", rgb, xy.y);
    }
}

#[test]
fn black_chromaticity_falls_back_to_zero() {
    assert_eq!(rgb_to_xy(Rgb8::new(0, 0, 0)), Chromaticity::new(0.0, 0.0));
}

#[test]
fn extreme_chromaticities_clamp_into_range() {
    let corners = [
        (0.0, 0.0),
        (1.0, 0.0),
        (0.0, 1.0),
        (1.0, 1.0),
        (0.735, 0.265),
        (0.115, 0.826),
        (0.157, 0.018),
        (0.001, 0.999),
    ];

    for (x, y) in corners {
        let rgb = xy_to_rgb(Chromaticity::new(x, y));
        // At least one channel carries the color unless everything clipped to zero
        let brightest = rgb.red.max(rgb.green).max(rgb.blue);
        assert!(brightest == 255 || brightest == 0, "({}, {}) -> {:?}", x, y, rgb);
    }
}

#[test]
fn srgb_primaries_come_back_dominant() {
    let red = xy_to_rgb(rgb_to_xy(RED));
    assert_eq!(red.red, 255);
    assert!(red.green < 128 && red.blue < 128);

    let green = xy_to_rgb(rgb_to_xy(GREEN));
    assert_eq!(green.green, 255);
    assert!(green.red < 192 && green.blue < 128);
}

// ============================================================================
// Kelvin <-> RGB
// ============================================================================

#[test]
fn kelvin_reference_values() {
    assert_eq!(kelvin_to_rgb(1000.0), Rgb8::new(255, 58, 0));
    assert_eq!(kelvin_to_rgb(2000.0).blue, 0);
    assert_eq!(kelvin_to_rgb(6600.0), Rgb8::new(255, 249, 255));
}

#[test]
fn warm_blue_red_ratio_is_monotonic() {
    let mut previous = blue_red_ratio(kelvin_to_rgb(1000.0));
    for kelvin in (1000u32..6600).step_by(25) {
        let ratio = blue_red_ratio(kelvin_to_rgb(f64::from(kelvin)));
        assert!(ratio + 1e-12 >= previous, "ratio dropped at {} K", kelvin);
        previous = ratio;
    }
}

#[test]
fn cool_blue_red_ratio_is_monotonic() {
    let mut previous = blue_red_ratio(kelvin_to_rgb(6600.0));
    for kelvin in (6600u32..=40000).step_by(100) {
        let ratio = blue_red_ratio(kelvin_to_rgb(f64::from(kelvin)));
        assert!(ratio + 1e-12 >= previous, "ratio dropped at {} K", kelvin);
        previous = ratio;
    }
}

#[test]
fn kelvin_round_trip_lands_on_same_color() {
    for kelvin in (2500u32..=12000).step_by(250) {
        let rgb = kelvin_to_rgb(f64::from(kelvin));
        let estimate = rgb_to_kelvin(rgb).unwrap();
        let back = kelvin_to_rgb(f64::from(estimate));

        // Quantised channels make every Kelvin value on a plateau map to the
        // same RGB; the search lands on the low edge of that plateau.
        assert!(estimate <= kelvin + 1, "{} K estimated as {} K", kelvin, estimate);
        assert!(kelvin.abs_diff(estimate) <= 250, "{} K estimated as {} K", kelvin, estimate);
        assert!(
            (blue_red_ratio(back) - blue_red_ratio(rgb)).abs() < 0.02,
            "{} K: {:?} vs {:?}",
            kelvin,
            rgb,
            back
        );
    }
}

#[test]
fn kelvin_estimate_needs_red() {
    assert_eq!(
        rgb_to_kelvin(BLUE),
        Err(ConversionError::InvalidInput {
            field: "r",
            expected: "greater than 0 to estimate a color temperature",
        })
    );
}

#[test]
fn white_estimates_near_daylight() {
    let kelvin = rgb_to_kelvin(WHITE).unwrap();
    assert!((6400..=6700).contains(&kelvin), "white estimated as {} K", kelvin);
}
