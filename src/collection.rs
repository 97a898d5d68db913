use crate::cache::HsbState;
use crate::descriptor::ColorDescriptor;
use crate::message::ColorMessage;
use crate::processor::ColorProcessor;
use crate::temperature::KelvinSearch;
use crate::types::ConversionError;
use heapless::LinearMap;

/// Errors that can occur during collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CollectionError {
    /// No processor is registered under the given id.
    UnknownInstance,

    /// A processor is already registered under the given id.
    DuplicateInstance,

    /// The collection is full and cannot accept more processors.
    CollectionFull,

    /// The processor rejected the request.
    Conversion(ConversionError),
}

impl core::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CollectionError::UnknownInstance => {
                write!(f, "no processor registered for this instance")
            }
            CollectionError::DuplicateInstance => {
                write!(f, "a processor is already registered for this instance")
            }
            CollectionError::CollectionFull => {
                write!(f, "collection is full, cannot add more processors")
            }
            CollectionError::Conversion(err) => {
                write!(f, "conversion error: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CollectionError {}

impl From<ConversionError> for CollectionError {
    fn from(err: ConversionError) -> Self {
        CollectionError::Conversion(err)
    }
}

/// Color processors for many logical instances, keyed by host identity.
///
/// Each instance keeps its own remembered HSB; nothing is shared between
/// them. Storage is fixed-capacity, so no heap allocation is needed.
///
/// # Type Parameters
/// * `Id` - Host-chosen instance identity (node id, index, ...)
/// * `MAX` - Maximum number of instances this collection can hold
pub struct ProcessorCollection<Id: Eq, const MAX: usize> {
    processors: LinearMap<Id, ColorProcessor, MAX>,
    search: KelvinSearch,
}

impl<Id: Eq, const MAX: usize> ProcessorCollection<Id, MAX> {
    /// Creates an empty collection. New instances use `search`.
    pub fn new(search: KelvinSearch) -> Self {
        Self {
            processors: LinearMap::new(),
            search,
        }
    }

    /// Registers a new instance with an empty HSB state.
    ///
    /// # Errors
    /// * `DuplicateInstance` - The id is already registered
    /// * `CollectionFull` - The collection holds `MAX` instances
    pub fn add_instance(&mut self, id: Id) -> Result<(), CollectionError> {
        if self.processors.contains_key(&id) {
            return Err(CollectionError::DuplicateInstance);
        }

        self.processors
            .insert(id, ColorProcessor::with_search(self.search))
            .map_err(|_| CollectionError::CollectionFull)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("registered color instance ({=usize}/{=usize})", self.len(), MAX);

        Ok(())
    }

    /// Removes an instance and its remembered state.
    ///
    /// # Errors
    /// * `UnknownInstance` - The id is not registered
    pub fn remove_instance(&mut self, id: &Id) -> Result<(), CollectionError> {
        self.processors
            .remove(id)
            .ok_or(CollectionError::UnknownInstance)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("removed color instance ({=usize}/{=usize})", self.len(), MAX);

        Ok(())
    }

    /// Routes a descriptor to the instance `id`.
    ///
    /// # Errors
    /// * `UnknownInstance` - The id is not registered
    /// * `Conversion` - The processor rejected the descriptor
    pub fn process(
        &mut self,
        id: &Id,
        descriptor: ColorDescriptor,
    ) -> Result<ColorDescriptor, CollectionError> {
        let processor = self
            .processors
            .get_mut(id)
            .ok_or(CollectionError::UnknownInstance)?;

        Ok(processor.process(descriptor)?)
    }

    /// Handles a message and returns the reply for the same instance.
    ///
    /// # Errors
    /// Same as [`process`](Self::process).
    pub fn handle_message(
        &mut self,
        message: ColorMessage<Id>,
    ) -> Result<ColorMessage<Id>, CollectionError> {
        let payload = self.process(&message.instance_id, message.payload)?;
        Ok(ColorMessage::new(message.instance_id, payload))
    }

    /// Returns the remembered HSB state of an instance.
    ///
    /// # Errors
    /// * `UnknownInstance` - The id is not registered
    pub fn hsb_state(&self, id: &Id) -> Result<HsbState, CollectionError> {
        self.processors
            .get(id)
            .map(ColorProcessor::hsb_state)
            .ok_or(CollectionError::UnknownInstance)
    }

    /// Returns the number of registered instances.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Returns true if no instance is registered.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Returns true if `id` is registered.
    pub fn contains(&self, id: &Id) -> bool {
        self.processors.contains_key(id)
    }
}

impl<Id: Eq, const MAX: usize> Default for ProcessorCollection<Id, MAX> {
    fn default() -> Self {
        Self::new(KelvinSearch::DEFAULT)
    }
}
