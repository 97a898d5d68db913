#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorDescriptor`**: Flat bag of optional HSB, RGB, xy and Kelvin fields exchanged with the host
//! - **`InputGroup`**: The single representation a descriptor is converted from, resolved by precedence
//! - **`HsbState`**: The remembered HSB triple of one logical instance, defaulting to (0, 0, 100)
//! - **`process`**: One-shot conversion of a descriptor against a state, returning both updated
//! - **`ColorProcessor`**: Owns the state of one instance and serialises its read-convert-write cycle
//! - **`ProcessorCollection`**: Fixed-capacity set of processors keyed by host identity
//! - **`KelvinSearch`**: Bisection parameters for estimating a color temperature from RGB
//!
//! Every conversion chain passes through an 8-bit RGB triple (`Srgb<u8>`, aliased as
//! `Rgb8`) exactly once and derives the remaining representations from it.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod cache;
pub mod chromaticity;
pub mod collection;
pub mod descriptor;
pub mod dispatch;
pub mod gamma;
pub mod hsv;
pub mod message;
pub mod processor;
pub mod temperature;
pub mod types;

pub use cache::HsbState;
pub use chromaticity::{Chromaticity, rgb_to_xy, xy_to_rgb};
pub use collection::{CollectionError, ProcessorCollection};
pub use descriptor::{ColorDescriptor, HsbPatch, InputGroup};
pub use dispatch::{process, process_with};
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use message::ColorMessage;
pub use processor::ColorProcessor;
#[cfg(feature = "std")]
pub use processor::SharedColorProcessor;
pub use temperature::{KelvinSearch, KelvinSearchBuilder, kelvin_to_rgb, rgb_to_kelvin};
pub use types::{ConversionError, Hsb, Rgb8, SearchConfigError};
