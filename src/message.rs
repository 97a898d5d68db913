//! Message boundary between a host and its color processors.

use crate::descriptor::ColorDescriptor;

/// A descriptor addressed to one logical instance.
///
/// Requests and replies share this shape: the reply keeps the instance id
/// and carries the enriched payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMessage<Id> {
    pub instance_id: Id,
    pub payload: ColorDescriptor,
}

impl<Id> ColorMessage<Id> {
    /// Creates a message.
    pub fn new(instance_id: Id, payload: ColorDescriptor) -> Self {
        Self {
            instance_id,
            payload,
        }
    }
}
