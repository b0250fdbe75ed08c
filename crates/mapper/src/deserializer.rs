//! Custom deserializers that bind a JSON node to a domain type.

use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::context::DeserializationContext;
use crate::error::DeserializeError;

/// Converts a parsed JSON node into one concrete domain type.
///
/// Implementations typically read their fields through a
/// [`jsonbind_retriever::PropertyRetriever`] and use `?` to surface
/// [`jsonbind_retriever::PropertyError`]s unchanged.
pub trait NodeDeserializer: Send + Sync + 'static {
    /// The handled type.
    type Output: 'static;

    fn convert(&self, root: &Value, ctx: &DeserializationContext<'_>) -> Result<Self::Output, DeserializeError>;
}

/// Identity of the type a deserializer produces.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandledType {
    id: TypeId,
    name: &'static str,
}

impl HandledType {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for HandledType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for HandledType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Object-safe view of a [`NodeDeserializer`], used for storage in modules.
pub trait ErasedDeserializer: Send + Sync {
    fn handled_type(&self) -> HandledType;

    fn convert_erased(&self, root: &Value, ctx: &DeserializationContext<'_>) -> Result<Box<dyn Any>, DeserializeError>;
}

impl<D: NodeDeserializer> ErasedDeserializer for D {
    fn handled_type(&self) -> HandledType {
        HandledType::of::<D::Output>()
    }

    fn convert_erased(&self, root: &Value, ctx: &DeserializationContext<'_>) -> Result<Box<dyn Any>, DeserializeError> {
        self.convert(root, ctx).map(|value| Box::new(value) as Box<dyn Any>)
    }
}

/// Shared, type-erased deserializer.
pub type DynDeserializer = Arc<dyn ErasedDeserializer>;

/// Wraps a deserializer for registration.
pub fn erase<D: NodeDeserializer>(deserializer: D) -> DynDeserializer {
    Arc::new(deserializer)
}
