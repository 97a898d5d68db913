//! Picks and runs the conversion chain for a descriptor.
//!
//! Every chain passes through RGB exactly once and derives the other
//! representations from it. The resulting HSB becomes the new remembered
//! state, except in the HSB branch where the input triple is stored verbatim
//! so replaying the same state never drifts through RGB rounding.

use crate::cache::HsbState;
use crate::chromaticity::{rgb_to_xy, xy_to_rgb};
use crate::descriptor::{ColorDescriptor, InputGroup};
use crate::hsv::{hsv_to_rgb, rgb_to_hsv};
use crate::temperature::{KelvinSearch, kelvin_to_rgb};
use crate::types::{ConversionError, Hsb};

/// Enriches `descriptor` using the default Kelvin search.
///
/// See [`process_with`].
pub fn process(
    descriptor: ColorDescriptor,
    cache: HsbState,
) -> Result<(ColorDescriptor, HsbState), ConversionError> {
    process_with(&KelvinSearch::DEFAULT, descriptor, cache)
}

/// Enriches `descriptor` and returns it together with the updated state.
///
/// Selection order, first match wins:
/// 1. `ColorTemperature` - derives RGB, then xy and HSB
/// 2. `x` and `y` - derives RGB, then Kelvin and HSB
/// 3. `r`, `g` and `b` - derives xy, Kelvin and HSB
/// 4. HSB, merged over `cache` - derives RGB, then Kelvin and xy
///
/// Colors with a zero red channel have no blue/red ratio; their Kelvin
/// estimate is the upper bound of `search`.
///
/// # Errors
/// * `InvalidInput` - A float field is not finite. The state is not updated
///   on error.
pub fn process_with(
    search: &KelvinSearch,
    descriptor: ColorDescriptor,
    cache: HsbState,
) -> Result<(ColorDescriptor, HsbState), ConversionError> {
    let result = dispatch(search, descriptor, cache);

    #[cfg(feature = "defmt")]
    {
        if let Err(err) = &result {
            defmt::debug!("color dispatch rejected input: {}", err);
        }
    }

    result
}

fn dispatch(
    search: &KelvinSearch,
    mut descriptor: ColorDescriptor,
    cache: HsbState,
) -> Result<(ColorDescriptor, HsbState), ConversionError> {
    let group = InputGroup::resolve(&descriptor)?;

    #[cfg(feature = "defmt")]
    defmt::trace!("converting from {=str} input", group.name());

    let hsb = match group {
        InputGroup::Temperature(kelvin) => {
            let rgb = kelvin_to_rgb(f64::from(kelvin));
            descriptor.set_rgb(rgb);
            descriptor.set_xy(rgb_to_xy(rgb));
            rgb_to_hsv(rgb)
        }
        InputGroup::Chromaticity(xy) => {
            let rgb = xy_to_rgb(xy);
            descriptor.color_temperature = Some(search.estimate(rgb));
            descriptor.set_rgb(rgb);
            rgb_to_hsv(rgb)
        }
        InputGroup::Rgb(rgb) => {
            descriptor.color_temperature = Some(search.estimate(rgb));
            descriptor.set_xy(rgb_to_xy(rgb));
            rgb_to_hsv(rgb)
        }
        InputGroup::Hsb(patch) => replay(search, &mut descriptor, patch.apply(cache.current())),
        InputGroup::None => replay(search, &mut descriptor, cache.current()),
    };

    descriptor.set_hsb(hsb);
    Ok((descriptor, HsbState::with(hsb)))
}

/// Fills RGB, Kelvin and xy from `hsb`, returning `hsb` unchanged.
fn replay(search: &KelvinSearch, descriptor: &mut ColorDescriptor, hsb: Hsb) -> Hsb {
    let rgb = hsv_to_rgb(hsb);
    descriptor.color_temperature = Some(search.estimate(rgb));
    descriptor.set_rgb(rgb);
    descriptor.set_xy(rgb_to_xy(rgb));
    hsb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb8;

    #[test]
    fn temperature_branch_overwrites_input_xy() {
        let input = ColorDescriptor::new()
            .with_color_temperature(4000)
            .with_xy(0.3, 0.3);

        let (output, state) = process(input, HsbState::new()).unwrap();
        let rgb = kelvin_to_rgb(4000.0);
        let xy = rgb_to_xy(rgb);

        assert_eq!(output.rgb(), Some(rgb));
        assert_eq!(output.x, Some(xy.x));
        assert_eq!(output.y, Some(xy.y));
        assert_eq!(output.color_temperature, Some(4000));
        assert_eq!(state.current(), rgb_to_hsv(rgb));
    }

    #[test]
    fn xy_branch_keeps_input_coordinates() {
        let input = ColorDescriptor::new().with_xy(0.45, 0.41);
        let (output, _) = process(input, HsbState::new()).unwrap();

        assert_eq!(output.x, Some(0.45));
        assert_eq!(output.y, Some(0.41));
        assert_eq!(output.rgb(), Some(xy_to_rgb(input.xy().unwrap())));
        assert!(output.color_temperature.is_some());
        assert!(output.hsb().is_some());
    }

    #[test]
    fn rgb_branch_keeps_input_channels() {
        let input = ColorDescriptor::new().with_rgb(255, 128, 0);
        let (output, state) = process(input, HsbState::new()).unwrap();

        assert_eq!(output.rgb(), Some(Rgb8::new(255, 128, 0)));
        assert_eq!(output.hsb(), Some(rgb_to_hsv(Rgb8::new(255, 128, 0))));
        assert_eq!(state.remembered(), output.hsb());
    }

    #[test]
    fn empty_descriptor_replays_default_white() {
        let (output, state) = process(ColorDescriptor::new(), HsbState::new()).unwrap();

        assert_eq!(output.rgb(), Some(Rgb8::new(255, 255, 255)));
        assert_eq!(output.hsb(), Some(Hsb::DEFAULT));
        assert_eq!(state.current(), Hsb::DEFAULT);
    }

    #[test]
    fn zero_red_rgb_input_uses_upper_bound() {
        let input = ColorDescriptor::new().with_rgb(0, 0, 255);
        let (output, state) = process(input, HsbState::new()).unwrap();

        assert_eq!(output.color_temperature, Some(40_000));
        assert_eq!(output.rgb(), Some(Rgb8::new(0, 0, 255)));
        assert_eq!(state.current(), Hsb::new(240.0, 100.0, 100.0));
    }

    #[test]
    fn black_rgb_is_fully_populated() {
        let (output, state) =
            process(ColorDescriptor::new().with_rgb(0, 0, 0), HsbState::new()).unwrap();

        assert_eq!(output.x, Some(0.0));
        assert_eq!(output.y, Some(0.0));
        assert_eq!(output.color_temperature, Some(40_000));
        assert_eq!(output.hsb(), Some(Hsb::new(0.0, 0.0, 0.0)));
        assert!(state.is_set());
    }

    #[test]
    fn cyan_hsb_is_fully_populated() {
        let input = ColorDescriptor::new().with_hsb(180.0, 100.0, 100.0);
        let (output, state) = process(input, HsbState::new()).unwrap();

        assert_eq!(output.rgb(), Some(Rgb8::new(0, 255, 255)));
        assert_eq!(output.color_temperature, Some(40_000));
        assert!(output.xy().is_some());
        assert_eq!(state.current(), Hsb::new(180.0, 100.0, 100.0));
    }

    #[test]
    fn dimming_to_zero_is_remembered() {
        let cache = HsbState::from(Hsb::new(30.0, 100.0, 100.0));
        let (output, state) =
            process(ColorDescriptor::new().with_brightness(0.0), cache).unwrap();

        assert_eq!(output.rgb(), Some(Rgb8::new(0, 0, 0)));
        assert_eq!(output.color_temperature, Some(40_000));
        assert_eq!(state.current(), Hsb::new(30.0, 100.0, 0.0));
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let result = process(ColorDescriptor::new().with_hue(f64::NAN), HsbState::new());
        assert!(matches!(
            result,
            Err(ConversionError::InvalidInput { field: "Hue", .. })
        ));
    }
}
