//! The color descriptor exchanged with the host, and its input groups.
//!
//! A [`ColorDescriptor`] is a flat bag of optional fields. Before any
//! conversion runs it is resolved once into an [`InputGroup`], which fixes
//! the precedence: color temperature, then xy, then RGB, then HSB.

use crate::chromaticity::Chromaticity;
use crate::types::{ConversionError, Hsb, Rgb8};

/// A partial or fully populated color in every supported representation.
///
/// With the `serde` feature, fields use the host payload keys (`Hue`,
/// `Saturation`, `Brightness`, `r`, `g`, `b`, `x`, `y`,
/// `ColorTemperature`) and absent fields are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorDescriptor {
    /// Hue, 0-360.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Hue", default, skip_serializing_if = "Option::is_none")
    )]
    pub hue: Option<f64>,

    /// Saturation, 0-100.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Saturation", default, skip_serializing_if = "Option::is_none")
    )]
    pub saturation: Option<f64>,

    /// Brightness, 0-100.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "Brightness", default, skip_serializing_if = "Option::is_none")
    )]
    pub brightness: Option<f64>,

    /// Red channel, 0-255.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "r",
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "whole_number::deserialize"
        )
    )]
    pub red: Option<u8>,

    /// Green channel, 0-255.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "g",
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "whole_number::deserialize"
        )
    )]
    pub green: Option<u8>,

    /// Blue channel, 0-255.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "b",
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "whole_number::deserialize"
        )
    )]
    pub blue: Option<u8>,

    /// CIE x, 0-1.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub x: Option<f64>,

    /// CIE y, 0-1.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub y: Option<f64>,

    /// Color temperature in Kelvin.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "ColorTemperature",
            default,
            skip_serializing_if = "Option::is_none",
            deserialize_with = "whole_number::deserialize"
        )
    )]
    pub color_temperature: Option<u32>,
}

impl ColorDescriptor {
    /// Creates an empty descriptor.
    pub const fn new() -> Self {
        Self {
            hue: None,
            saturation: None,
            brightness: None,
            red: None,
            green: None,
            blue: None,
            x: None,
            y: None,
            color_temperature: None,
        }
    }

    /// Sets the color temperature.
    pub fn with_color_temperature(mut self, kelvin: u32) -> Self {
        self.color_temperature = Some(kelvin);
        self
    }

    /// Sets both chromaticity coordinates.
    pub fn with_xy(mut self, x: f64, y: f64) -> Self {
        self.set_xy(Chromaticity::new(x, y));
        self
    }

    /// Sets all three RGB channels.
    pub fn with_rgb(mut self, red: u8, green: u8, blue: u8) -> Self {
        self.set_rgb(Rgb8::new(red, green, blue));
        self
    }

    /// Sets hue, saturation and brightness.
    pub fn with_hsb(mut self, hue: f64, saturation: f64, brightness: f64) -> Self {
        self.set_hsb(Hsb::new(hue, saturation, brightness));
        self
    }

    /// Sets only the hue.
    pub fn with_hue(mut self, hue: f64) -> Self {
        self.hue = Some(hue);
        self
    }

    /// Sets only the saturation.
    pub fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = Some(saturation);
        self
    }

    /// Sets only the brightness.
    pub fn with_brightness(mut self, brightness: f64) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Returns the RGB triple when all three channels are set.
    pub fn rgb(&self) -> Option<Rgb8> {
        match (self.red, self.green, self.blue) {
            (Some(r), Some(g), Some(b)) => Some(Rgb8::new(r, g, b)),
            _ => None,
        }
    }

    /// Returns the chromaticity when both coordinates are set.
    pub fn xy(&self) -> Option<Chromaticity> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some(Chromaticity::new(x, y)),
            _ => None,
        }
    }

    /// Returns the HSB triple when all three components are set.
    pub fn hsb(&self) -> Option<Hsb> {
        match (self.hue, self.saturation, self.brightness) {
            (Some(h), Some(s), Some(b)) => Some(Hsb::new(h, s, b)),
            _ => None,
        }
    }

    pub(crate) fn set_rgb(&mut self, rgb: Rgb8) {
        self.red = Some(rgb.red);
        self.green = Some(rgb.green);
        self.blue = Some(rgb.blue);
    }

    pub(crate) fn set_xy(&mut self, xy: Chromaticity) {
        self.x = Some(xy.x);
        self.y = Some(xy.y);
    }

    pub(crate) fn set_hsb(&mut self, hsb: Hsb) {
        self.hue = Some(hsb.hue);
        self.saturation = Some(hsb.saturation);
        self.brightness = Some(hsb.brightness);
    }

    /// Rejects NaN or infinite floating point fields.
    fn validate(&self) -> Result<(), ConversionError> {
        let fields = [
            ("Hue", self.hue),
            ("Saturation", self.saturation),
            ("Brightness", self.brightness),
            ("x", self.x),
            ("y", self.y),
        ];

        for (field, value) in fields {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(ConversionError::InvalidInput {
                        field,
                        expected: "a finite number",
                    });
                }
            }
        }

        Ok(())
    }
}

/// Integer payload fields that also accept integral floats (`255.0`), which
/// JSON hosts often emit.
#[cfg(feature = "serde")]
mod whole_number {
    use core::fmt;
    use core::marker::PhantomData;
    use serde::de::{self, Deserializer, Unexpected, Visitor};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<u64>,
    {
        deserializer.deserialize_any(WholeNumber(PhantomData))
    }

    struct WholeNumber<T>(PhantomData<T>);

    impl<'de, T: TryFrom<u64>> Visitor<'de> for WholeNumber<T> {
        type Value = Option<T>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a non-negative whole number within range")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
            deserializer.deserialize_any(self)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            match T::try_from(value) {
                Ok(value) => Ok(Some(value)),
                Err(_) => Err(E::invalid_value(Unexpected::Unsigned(value), &self)),
            }
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            match u64::try_from(value) {
                Ok(value) => self.visit_u64(value),
                Err(_) => Err(E::invalid_value(Unexpected::Signed(value), &self)),
            }
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            // NaN fails the trunc comparison
            if value >= 0.0 && value <= u64::MAX as f64 && libm::trunc(value) == value {
                self.visit_u64(value as u64)
            } else {
                Err(E::invalid_value(Unexpected::Float(value), &self))
            }
        }
    }
}

/// Individual HSB components supplied on a descriptor.
///
/// Missing components are taken from the remembered state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HsbPatch {
    pub hue: Option<f64>,
    pub saturation: Option<f64>,
    pub brightness: Option<f64>,
}

impl HsbPatch {
    /// Returns true if no component is set.
    pub fn is_empty(&self) -> bool {
        self.hue.is_none() && self.saturation.is_none() && self.brightness.is_none()
    }

    /// Overlays the set components on `base`.
    pub fn apply(&self, base: Hsb) -> Hsb {
        Hsb::new(
            self.hue.unwrap_or(base.hue),
            self.saturation.unwrap_or(base.saturation),
            self.brightness.unwrap_or(base.brightness),
        )
    }
}

/// The one input representation a descriptor is converted from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputGroup {
    /// `ColorTemperature` is set.
    Temperature(u32),

    /// Both `x` and `y` are set.
    Chromaticity(Chromaticity),

    /// All of `r`, `g` and `b` are set.
    Rgb(Rgb8),

    /// At least one of `Hue`, `Saturation` or `Brightness` is set.
    Hsb(HsbPatch),

    /// Nothing usable; the remembered HSB is replayed.
    None,
}

impl InputGroup {
    /// Picks the input group of `descriptor`, highest precedence first.
    ///
    /// Incomplete groups (only `x`, or two of three RGB channels) are
    /// skipped rather than rejected.
    ///
    /// # Errors
    /// * `InvalidInput` - A floating point field is NaN or infinite
    pub fn resolve(descriptor: &ColorDescriptor) -> Result<Self, ConversionError> {
        descriptor.validate()?;

        if let Some(kelvin) = descriptor.color_temperature {
            return Ok(InputGroup::Temperature(kelvin));
        }

        if let Some(xy) = descriptor.xy() {
            return Ok(InputGroup::Chromaticity(xy));
        }

        if let Some(rgb) = descriptor.rgb() {
            return Ok(InputGroup::Rgb(rgb));
        }

        let patch = HsbPatch {
            hue: descriptor.hue,
            saturation: descriptor.saturation,
            brightness: descriptor.brightness,
        };

        if patch.is_empty() {
            Ok(InputGroup::None)
        } else {
            Ok(InputGroup::Hsb(patch))
        }
    }

    /// Short name of the group, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            InputGroup::Temperature(_) => "temperature",
            InputGroup::Chromaticity(_) => "xy",
            InputGroup::Rgb(_) => "rgb",
            InputGroup::Hsb(_) => "hsb",
            InputGroup::None => "none",
        }
    }
}
