//! Core value types and error kinds.

use palette::Srgb;

/// 8-bit RGB triple, the pivot every conversion chain passes through.
pub type Rgb8 = Srgb<u8>;

/// Hue (0-360), saturation (0-100) and brightness (0-100).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsb {
    /// Hue in degrees.
    pub hue: f64,

    /// Saturation in percent.
    pub saturation: f64,

    /// Brightness in percent.
    pub brightness: f64,
}

impl Hsb {
    /// White at full brightness, used when nothing has been remembered yet.
    pub const DEFAULT: Hsb = Hsb::new(0.0, 0.0, 100.0);

    /// Creates a new HSB triple.
    #[inline]
    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }
}

impl Default for Hsb {
    fn default() -> Self {
        Hsb::DEFAULT
    }
}

/// Errors reported by conversions and by [`process`](crate::process).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionError {
    /// An input value lies outside the domain of the conversion.
    InvalidInput {
        /// Payload key of the offending value, e.g. `"r"` or `"Hue"`.
        field: &'static str,
        /// What the value must satisfy.
        expected: &'static str,
    },
}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConversionError::InvalidInput { field, expected } => {
                write!(f, "invalid input: `{}` must be {}", field, expected)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {}

/// Kelvin search configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SearchConfigError {
    /// A bound is NaN or infinite.
    NonFiniteBound,

    /// Lower bound is not below the upper bound.
    EmptyRange,

    /// Tolerance is zero, negative or NaN.
    NonPositiveTolerance,
}

impl core::fmt::Display for SearchConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SearchConfigError::NonFiniteBound => {
                write!(f, "search bounds must be finite")
            }
            SearchConfigError::EmptyRange => {
                write!(f, "lower search bound must be below the upper bound")
            }
            SearchConfigError::NonPositiveTolerance => {
                write!(f, "search tolerance must be greater than zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SearchConfigError {}

/// Rounds a 0-255 channel value to the nearest integer, ties away from zero.
#[inline]
pub(crate) fn quantize(channel: f64) -> u8 {
    libm::round(channel).clamp(0.0, 255.0) as u8
}
