//! sRGB transfer curves used by the chromaticity conversions.
//!
//! The decode threshold is the exact crossover of the two curve segments
//! (`0.0404482362771076`) rather than the rounded `0.04045` found in most
//! references, so encoded values near the knee map the same way the
//! lighting bridges downstream expect.

/// Encoded values at or below this use the linear segment when decoding.
pub const DECODE_THRESHOLD: f64 = 0.040_448_236_277_107_6;

/// Linear values at or below this use the linear segment when encoding.
pub const ENCODE_THRESHOLD: f64 = 0.003_130_8;

const LINEAR_SLOPE: f64 = 12.92;
const OFFSET: f64 = 0.055;
const GAMMA: f64 = 2.4;

/// Inverse gamma: sRGB-encoded component (0.0-1.0) to linear light.
#[inline]
pub fn decode(encoded: f64) -> f64 {
    if encoded <= DECODE_THRESHOLD {
        encoded / LINEAR_SLOPE
    } else {
        libm::pow((encoded + OFFSET) / (1.0 + OFFSET), GAMMA)
    }
}

/// Forward gamma: linear light to sRGB-encoded component.
///
/// Negative input stays on the linear segment and is returned negative;
/// callers clamp afterwards.
#[inline]
pub fn encode(linear: f64) -> f64 {
    if linear <= ENCODE_THRESHOLD {
        LINEAR_SLOPE * linear
    } else {
        (1.0 + OFFSET) * libm::pow(linear, 1.0 / GAMMA) - OFFSET
    }
}
