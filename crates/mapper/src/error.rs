//! Error types for deserialization and mapping.

use jsonbind_retriever::PropertyError;
use thiserror::Error;

/// Failure raised inside a [`crate::NodeDeserializer`].
#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error("no deserializer registered for {type_name}")]
    Unregistered { type_name: &'static str },

    #[error("deserializer registered for {type_name} produced a different type")]
    TypeMismatch { type_name: &'static str },

    /// The node has a shape the deserializer cannot bind.
    #[error("{message}")]
    Invalid { message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeserializeError {
    pub fn invalid(message: impl Into<String>) -> Self {
        DeserializeError::Invalid { message: message.into() }
    }

    /// The property error at the root of this failure, if any.
    pub fn property_error(&self) -> Option<&PropertyError> {
        match self {
            DeserializeError::Property(error) => Some(error),
            DeserializeError::Other(error) => error.downcast_ref::<PropertyError>(),
            _ => None,
        }
    }
}

/// The single error type returned by [`crate::Mapper`] parse calls.
#[derive(Debug, Error)]
pub enum MapperError {
    /// Input is not valid JSON, or reading it failed.
    #[error("malformed JSON input: {0}")]
    Syntax(#[from] serde_json::Error),

    /// Input is valid JSON but could not be bound to the target type.
    #[error("failed to deserialize {target}: {source}")]
    Deserialize {
        target: &'static str,
        #[source]
        source: DeserializeError,
    },
}

impl MapperError {
    pub(crate) fn deserialize(target: &'static str, source: DeserializeError) -> Self {
        MapperError::Deserialize { target, source }
    }

    /// The property error at the root of this failure, if any.
    pub fn property_error(&self) -> Option<&PropertyError> {
        match self {
            MapperError::Deserialize { source, .. } => source.property_error(),
            MapperError::Syntax(_) => None,
        }
    }
}

/// Failure to load a [`crate::MapperConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown duplicate policy '{value}' (expected 'replace' or 'keep-first')")]
    UnknownDuplicatePolicy { value: String },

    #[error("mapper configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
