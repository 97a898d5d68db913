//! RGB to CIE 1931 xy chromaticity and back.

use crate::gamma;
use crate::types::{Rgb8, quantize};

/// A CIE 1931 xy chromaticity coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    /// Creates a new chromaticity coordinate.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Linear sRGB (D65) to CIE XYZ, rows X, Y, Z.
#[allow(clippy::excessive_precision)]
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4123955889674142161, 0.3575834307637148171, 0.1804926473817015735],
    [0.2125862307855955516, 0.7151703037034108499, 0.07220049864333622685],
    [0.01929721549174694484, 0.1191838645808485318, 0.9504971251315797660],
];

/// CIE XYZ to linear Wide RGB D65, rows R, G, B.
const XYZ_TO_WIDE_RGB: [[f64; 3]; 3] = [
    [1.656492, -0.354851, -0.255038],
    [-0.707196, 1.655397, 0.036152],
    [0.051713, -0.121364, 1.011530],
];

/// Substituted for `y == 0` before dividing by it.
const MIN_Y: f64 = 1e-11;

#[inline]
fn apply(matrix: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let row = |m: &[f64; 3]| m[0] * v[0] + m[1] * v[1] + m[2] * v[2];
    [row(&matrix[0]), row(&matrix[1]), row(&matrix[2])]
}

/// Converts 8-bit RGB to xy chromaticity.
///
/// Black has no defined chromaticity and maps to `(0, 0)`.
pub fn rgb_to_xy(rgb: Rgb8) -> Chromaticity {
    let linear = [
        gamma::decode(f64::from(rgb.red) / 255.0),
        gamma::decode(f64::from(rgb.green) / 255.0),
        gamma::decode(f64::from(rgb.blue) / 255.0),
    ];

    let [x, y, z] = apply(&SRGB_TO_XYZ, linear);
    let sum = x + y + z;

    if sum > 0.0 {
        Chromaticity::new(x / sum, y / sum)
    } else {
        Chromaticity::new(0.0, 0.0)
    }
}

/// Converts xy chromaticity at full luminance (`Y = 1`) to 8-bit RGB.
///
/// Negative components are clipped to zero. When the brightest component
/// exceeds 1, all three are divided by it, which keeps their ratio but is
/// not a full gamut mapping.
pub fn xy_to_rgb(xy: Chromaticity) -> Rgb8 {
    let x = xy.x;
    let y = if xy.y == 0.0 { MIN_Y } else { xy.y };

    let tristimulus = [x / y, 1.0, (1.0 - x - y) / y];
    let [r, g, b] = apply(&XYZ_TO_WIDE_RGB, tristimulus)
        .map(gamma::encode)
        .map(|c| c.max(0.0));

    let max = r.max(g).max(b);
    let scale = if max > 1.0 { max } else { 1.0 };

    Rgb8::new(
        quantize(r / scale * 255.0),
        quantize(g / scale * 255.0),
        quantize(b / scale * 255.0),
    )
}
