//! The remembered HSB triple of one logical instance.

use crate::types::Hsb;

/// Last HSB value produced for one logical instance.
///
/// A never-written state reads as [`Hsb::DEFAULT`] (0, 0, 100). Once
/// written, every stored value is remembered as is, including a
/// brightness of 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HsbState {
    remembered: Option<Hsb>,
}

impl HsbState {
    /// Creates an empty state.
    pub const fn new() -> Self {
        Self { remembered: None }
    }

    /// Creates a state that already remembers `hsb`.
    pub const fn with(hsb: Hsb) -> Self {
        Self {
            remembered: Some(hsb),
        }
    }

    /// Returns the remembered value, or the default if nothing was stored.
    pub fn current(&self) -> Hsb {
        self.remembered.unwrap_or(Hsb::DEFAULT)
    }

    /// Returns the remembered value without applying the default.
    pub fn remembered(&self) -> Option<Hsb> {
        self.remembered
    }

    /// Returns true if a value has been stored.
    pub fn is_set(&self) -> bool {
        self.remembered.is_some()
    }

    /// Stores `hsb`.
    pub fn remember(&mut self, hsb: Hsb) {
        self.remembered = Some(hsb);
    }

    /// Forgets the stored value.
    pub fn clear(&mut self) {
        self.remembered = None;
    }
}

impl From<Hsb> for HsbState {
    fn from(hsb: Hsb) -> Self {
        HsbState::with(hsb)
    }
}
