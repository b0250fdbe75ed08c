use serde_json::Value;

use crate::error::DeserializeError;
use crate::mapper::Mapper;

/// State handed to a [`crate::NodeDeserializer`] while it runs.
///
/// Gives access to the mapper driving the parse, so a deserializer can bind
/// nested nodes with whatever is registered for their type.
#[derive(Debug, Clone, Copy)]
pub struct DeserializationContext<'m> {
    mapper: &'m Mapper,
}

impl<'m> DeserializationContext<'m> {
    pub(crate) fn new(mapper: &'m Mapper) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &'m Mapper {
        self.mapper
    }

    /// Binds `node` with the deserializer registered for `T`.
    ///
    /// Errors are returned as-is so the root cause reaches the top-level
    /// parse call unchanged.
    pub fn read_value<T: 'static>(&self, node: &Value) -> Result<T, DeserializeError> {
        self.mapper.convert_node(node)
    }
}
