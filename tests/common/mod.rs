//! Shared test infrastructure for homekit-color integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use homekit_color::Rgb8;

// ============================================================================
// Reference Colors
// ============================================================================

pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
pub const RED: Rgb8 = Rgb8::new(255, 0, 0);
pub const GREEN: Rgb8 = Rgb8::new(0, 255, 0);
pub const BLUE: Rgb8 = Rgb8::new(0, 0, 255);

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Largest per-channel difference between two colors
pub fn channel_distance(a: Rgb8, b: Rgb8) -> u8 {
    a.red
        .abs_diff(b.red)
        .max(a.green.abs_diff(b.green))
        .max(a.blue.abs_diff(b.blue))
}

/// Compare two colors allowing `tolerance` per channel
pub fn channels_within(a: Rgb8, b: Rgb8, tolerance: u8) -> bool {
    channel_distance(a, b) <= tolerance
}

/// Every RGB triple on a grid with the given step, always including 255
pub fn rgb_grid(step: usize) -> impl Iterator<Item = Rgb8> {
    let levels = move || (0..=255u8).step_by(step).chain(core::iter::once(255));
    levels().flat_map(move |r| {
        levels().flat_map(move |g| levels().map(move |b| Rgb8::new(r, g, b)))
    })
}

/// Blue/red ratio used by the Kelvin search
pub fn blue_red_ratio(rgb: Rgb8) -> f64 {
    f64::from(rgb.blue) / f64::from(rgb.red)
}
