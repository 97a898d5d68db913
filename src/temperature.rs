//! Color temperature (Kelvin) to RGB and back.
//!
//! The forward direction is Tanner Helland's empirical fit of blackbody
//! color. The reverse direction has no closed form, so [`KelvinSearch`]
//! bisects over the forward formula comparing blue/red ratios.
//!
//! The bisection relies on blue/red increasing monotonically with
//! temperature. That holds for the fitted curve between 1000 K and 40000 K
//! but is an empirical property of the approximation, so custom search
//! bounds far outside that range may not converge on a meaningful value.

use crate::types::{ConversionError, Rgb8, SearchConfigError, quantize};

#[allow(clippy::excessive_precision)]
mod fit {
    pub const RED_INTERCEPT: f64 = 351.97690566805693;
    pub const RED_SLOPE: f64 = 0.114206453784165;
    pub const RED_LOG: f64 = -40.25366309332127;

    pub const GREEN_WARM_INTERCEPT: f64 = -155.25485562709179;
    pub const GREEN_WARM_SLOPE: f64 = -0.44596950469579133;
    pub const GREEN_WARM_LOG: f64 = 104.49216199393888;

    pub const GREEN_COOL_INTERCEPT: f64 = 325.4494125711974;
    pub const GREEN_COOL_SLOPE: f64 = 0.07943456536662342;
    pub const GREEN_COOL_LOG: f64 = -28.0852963507957;

    pub const BLUE_INTERCEPT: f64 = -254.76935184120902;
    pub const BLUE_SLOPE: f64 = 0.8274096064007395;
    pub const BLUE_LOG: f64 = 115.67994401066147;
}

/// `a + b*t + c*ln(t)`, clamped to the channel range.
#[inline]
fn curve(t: f64, intercept: f64, slope: f64, log: f64) -> f64 {
    (intercept + slope * t + log * libm::log(t)).clamp(0.0, 255.0)
}

/// Converts a color temperature in Kelvin to 8-bit RGB.
pub fn kelvin_to_rgb(kelvin: f64) -> Rgb8 {
    use fit::*;

    let temperature = kelvin / 100.0;

    let red = if temperature < 66.0 {
        255.0
    } else {
        curve(temperature - 55.0, RED_INTERCEPT, RED_SLOPE, RED_LOG)
    };

    let green = if temperature < 66.0 {
        curve(
            temperature - 2.0,
            GREEN_WARM_INTERCEPT,
            GREEN_WARM_SLOPE,
            GREEN_WARM_LOG,
        )
    } else {
        curve(
            temperature - 50.0,
            GREEN_COOL_INTERCEPT,
            GREEN_COOL_SLOPE,
            GREEN_COOL_LOG,
        )
    };

    let blue = if temperature >= 66.0 {
        255.0
    } else if temperature <= 20.0 {
        0.0
    } else {
        curve(temperature - 10.0, BLUE_INTERCEPT, BLUE_SLOPE, BLUE_LOG)
    };

    Rgb8::new(quantize(red), quantize(green), quantize(blue))
}

/// Estimates the color temperature of an RGB color using the default search.
///
/// # Errors
/// * `InvalidInput` - The red channel is zero, leaving the blue/red ratio
///   undefined.
pub fn rgb_to_kelvin(rgb: Rgb8) -> Result<u32, ConversionError> {
    KelvinSearch::DEFAULT.find(rgb)
}

/// Bisection parameters for [`rgb_to_kelvin`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KelvinSearch {
    min_kelvin: f64,
    max_kelvin: f64,
    tolerance: f64,
}

impl KelvinSearch {
    /// 1000 K to 40000 K, stopping once the interval is 0.4 K wide.
    pub const DEFAULT: KelvinSearch = KelvinSearch {
        min_kelvin: 1000.0,
        max_kelvin: 40000.0,
        tolerance: 0.4,
    };

    /// Creates a builder starting from the default parameters.
    pub fn builder() -> KelvinSearchBuilder {
        KelvinSearchBuilder::new()
    }

    /// Returns the lower search bound.
    pub fn min_kelvin(&self) -> f64 {
        self.min_kelvin
    }

    /// Returns the upper search bound.
    pub fn max_kelvin(&self) -> f64 {
        self.max_kelvin
    }

    /// Returns the interval width at which the search stops.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Finds the temperature whose blue/red ratio matches `rgb`.
    ///
    /// Each step evaluates [`kelvin_to_rgb`] at the midpoint; a candidate
    /// ratio at or above the target moves the upper bound down, otherwise
    /// the lower bound moves up. The search stops once the interval is no
    /// wider than the tolerance or the midpoint can no longer move in
    /// `f64`. The final midpoint is rounded.
    ///
    /// # Errors
    /// * `InvalidInput` - The red channel is zero.
    pub fn find(&self, rgb: Rgb8) -> Result<u32, ConversionError> {
        if rgb.red == 0 {
            return Err(ConversionError::InvalidInput {
                field: "r",
                expected: "greater than 0 to estimate a color temperature",
            });
        }

        Ok(self.bisect(f64::from(rgb.blue) / f64::from(rgb.red)))
    }

    /// Like [`find`](Self::find), but a zero red channel resolves to the
    /// upper bound.
    ///
    /// An unbounded blue/red ratio sits above the whole fitted curve, which
    /// is where the bisection ends up when nothing stops it.
    pub fn estimate(&self, rgb: Rgb8) -> u32 {
        if rgb.red == 0 {
            return whole_kelvin(self.max_kelvin);
        }

        self.bisect(f64::from(rgb.blue) / f64::from(rgb.red))
    }

    fn bisect(&self, target: f64) -> u32 {
        let mut low = self.min_kelvin;
        let mut high = self.max_kelvin;
        let mut kelvin = (low + high) / 2.0;

        while high - low > self.tolerance {
            kelvin = (low + high) / 2.0;
            if kelvin <= low || kelvin >= high {
                // Interval is one ulp wide
                break;
            }

            let candidate = kelvin_to_rgb(kelvin);
            // Fitted red never drops below ~156, so the ratio is defined
            let ratio = f64::from(candidate.blue) / f64::from(candidate.red);

            if ratio >= target {
                high = kelvin;
            } else {
                low = kelvin;
            }
        }

        whole_kelvin(kelvin)
    }
}

/// Rounds to whole Kelvin, saturating at the `u32` range.
fn whole_kelvin(kelvin: f64) -> u32 {
    libm::round(kelvin).max(0.0) as u32
}

impl Default for KelvinSearch {
    fn default() -> Self {
        KelvinSearch::DEFAULT
    }
}

/// Builder for validated [`KelvinSearch`] parameters.
#[derive(Debug, Clone, Copy)]
pub struct KelvinSearchBuilder {
    min_kelvin: f64,
    max_kelvin: f64,
    tolerance: f64,
}

impl KelvinSearchBuilder {
    /// Creates a builder with the default parameters.
    pub fn new() -> Self {
        let KelvinSearch {
            min_kelvin,
            max_kelvin,
            tolerance,
        } = KelvinSearch::DEFAULT;

        Self {
            min_kelvin,
            max_kelvin,
            tolerance,
        }
    }

    /// Sets the search interval in Kelvin.
    pub fn bounds(mut self, min_kelvin: f64, max_kelvin: f64) -> Self {
        self.min_kelvin = min_kelvin;
        self.max_kelvin = max_kelvin;
        self
    }

    /// Sets the interval width at which the search stops.
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validates and builds the search parameters.
    ///
    /// # Errors
    /// * `NonFiniteBound` - A bound is NaN or infinite
    /// * `EmptyRange` - The lower bound is not below the upper bound
    /// * `NonPositiveTolerance` - Tolerance is not greater than zero
    pub fn build(self) -> Result<KelvinSearch, SearchConfigError> {
        if !self.min_kelvin.is_finite() || !self.max_kelvin.is_finite() {
            return Err(SearchConfigError::NonFiniteBound);
        }

        if self.min_kelvin >= self.max_kelvin {
            return Err(SearchConfigError::EmptyRange);
        }

        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(SearchConfigError::NonPositiveTolerance);
        }

        Ok(KelvinSearch {
            min_kelvin: self.min_kelvin,
            max_kelvin: self.max_kelvin,
            tolerance: self.tolerance,
        })
    }
}

impl Default for KelvinSearchBuilder {
    fn default() -> Self {
        Self::new()
    }
}
