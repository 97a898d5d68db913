//! Stateful color processor for one logical instance.
//!
//! Provides [`ColorProcessor`], which owns the remembered HSB state of a
//! single instance and runs every request through the dispatcher. With the
//! `std` feature, [`SharedColorProcessor`] wraps one in a mutex for hosts
//! that deliver requests from several threads.

use crate::cache::HsbState;
use crate::descriptor::ColorDescriptor;
use crate::dispatch;
use crate::temperature::KelvinSearch;
use crate::types::ConversionError;

/// Converts descriptors for one logical instance, remembering its last HSB.
///
/// `process` takes `&mut self`, so the read of the state, the conversion and
/// the write back happen as one unit. Separate processors share nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorProcessor {
    state: HsbState,
    search: KelvinSearch,
}

impl ColorProcessor {
    /// Creates a processor with an empty state and the default Kelvin search.
    pub const fn new() -> Self {
        Self {
            state: HsbState::new(),
            search: KelvinSearch::DEFAULT,
        }
    }

    /// Creates a processor using custom Kelvin search parameters.
    pub const fn with_search(search: KelvinSearch) -> Self {
        Self {
            state: HsbState::new(),
            search,
        }
    }

    /// Enriches `descriptor` and remembers the resulting HSB.
    ///
    /// # Errors
    /// * `InvalidInput` - See [`dispatch::process_with`]. The remembered
    ///   state is left unchanged.
    pub fn process(
        &mut self,
        descriptor: ColorDescriptor,
    ) -> Result<ColorDescriptor, ConversionError> {
        let (enriched, state) = dispatch::process_with(&self.search, descriptor, self.state)?;
        self.state = state;
        Ok(enriched)
    }

    /// Returns the remembered HSB state.
    pub fn hsb_state(&self) -> HsbState {
        self.state
    }

    /// Returns the Kelvin search parameters.
    pub fn search(&self) -> &KelvinSearch {
        &self.search
    }

    /// Forgets the remembered HSB, so the next fallback uses the default.
    pub fn reset(&mut self) {
        self.state.clear();
    }
}

/// A [`ColorProcessor`] that can be shared between threads.
///
/// Concurrent calls on the same instance are serialised by a mutex.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct SharedColorProcessor {
    inner: std::sync::Mutex<ColorProcessor>,
}

#[cfg(feature = "std")]
impl SharedColorProcessor {
    /// Wraps `processor`.
    pub fn new(processor: ColorProcessor) -> Self {
        Self {
            inner: std::sync::Mutex::new(processor),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ColorProcessor> {
        // The guarded value is plain data and never left half-written
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Enriches `descriptor` while holding the instance lock.
    ///
    /// # Errors
    /// * `InvalidInput` - See [`ColorProcessor::process`].
    pub fn process(&self, descriptor: ColorDescriptor) -> Result<ColorDescriptor, ConversionError> {
        self.lock().process(descriptor)
    }

    /// Returns the remembered HSB state.
    pub fn hsb_state(&self) -> HsbState {
        self.lock().hsb_state()
    }

    /// Forgets the remembered HSB.
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Returns the wrapped processor.
    pub fn into_inner(self) -> ColorProcessor {
        self.inner
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
