//! HSB/HSV to RGB conversions.

use crate::types::{Hsb, Rgb8, quantize};

/// Converts HSB (hue 0-360, saturation and brightness 0-100) to 8-bit RGB.
///
/// Each channel is `v - v*s*clamp(min(k, 4-k, 1), 0, 1)` with
/// `k = (n + h/60) mod 6`, where red uses `n = 5`, green `n = 3` and blue
/// `n = 1`. Hues outside 0-360 wrap around.
pub fn hsv_to_rgb(hsb: Hsb) -> Rgb8 {
    let s = hsb.saturation / 100.0;
    let v = hsb.brightness / 100.0;
    let sector = hsb.hue / 60.0;

    let channel = |n: f64| {
        let mut k = (n + sector) % 6.0;
        if k < 0.0 {
            k += 6.0;
        }
        let weight = k.min(4.0 - k).min(1.0).clamp(0.0, 1.0);
        quantize((v - v * s * weight) * 255.0)
    };

    Rgb8::new(channel(5.0), channel(3.0), channel(1.0))
}

/// Converts 8-bit RGB to HSB.
///
/// Hue is in `[0, 360)` and is 0 for achromatic colors. Saturation is 0
/// for black.
pub fn rgb_to_hsv(rgb: Rgb8) -> Hsb {
    let r = f64::from(rgb.red) / 255.0;
    let g = f64::from(rgb.green) / 255.0;
    let b = f64::from(rgb.blue) / 255.0;

    let value = r.max(g).max(b);
    let chroma = value - r.min(g).min(b);

    let sector = if chroma == 0.0 {
        0.0
    } else if value == r {
        (g - b) / chroma
    } else if value == g {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };

    let mut hue = sector * 60.0;
    if hue < 0.0 {
        hue += 360.0;
    }

    let saturation = if value == 0.0 {
        0.0
    } else {
        chroma / value * 100.0
    };

    Hsb::new(hue, saturation, value * 100.0)
}
