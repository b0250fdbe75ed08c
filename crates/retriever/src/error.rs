//! Errors raised while retrieving a property from a JSON node.

use std::fmt;

use thiserror::Error;

use crate::factory::MalformedError;

/// Representation a property was expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpectedType {
    String,
    Integer,
    Long,
    Uri,
    Url,
}

impl ExpectedType {
    /// Short description used in error messages, without the article.
    pub fn description(self) -> &'static str {
        match self {
            ExpectedType::String => "string",
            ExpectedType::Integer => "integer",
            ExpectedType::Long => "long",
            ExpectedType::Uri => "valid URI",
            ExpectedType::Url => "valid URL",
        }
    }
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let article = match self {
            ExpectedType::Integer => "an",
            _ => "a",
        };
        write!(f, "{} {}", article, self.description())
    }
}

/// Error surfaced by [`crate::PropertyRetriever`].
///
/// Messages are part of the public contract; callers match on them verbatim.
#[derive(Debug, Error)]
pub enum PropertyError {
    /// The property is absent or explicitly `null`.
    #[error("Expected property \"{property}\" to be defined")]
    Missing { property: String },

    /// The property is present but does not hold the expected representation.
    /// When a URI/URL failed to parse, the parser error is kept as the source.
    #[error("Expected property \"{property}\" to be {expected}")]
    InvalidType {
        property: String,
        expected: ExpectedType,
        #[source]
        source: Option<MalformedError>,
    },
}

impl PropertyError {
    /// Error for a property that is absent or `null`.
    ///
    /// # Example
    /// ```rust
    /// use jsonbind_retriever::PropertyError;
    ///
    /// let error = PropertyError::missing("name");
    /// assert_eq!(error.to_string(), "Expected property \"name\" to be defined");
    /// ```
    pub fn missing(property: &str) -> Self {
        PropertyError::Missing {
            property: property.to_string(),
        }
    }

    /// Error for a present value of the wrong representation, with no cause.
    ///
    /// # Arguments
    /// * `property` - Name of the offending property
    /// * `expected` - Representation the caller asked for
    pub fn invalid_type(property: &str, expected: ExpectedType) -> Self {
        PropertyError::InvalidType {
            property: property.to_string(),
            expected,
            source: None,
        }
    }

    /// Like [`PropertyError::invalid_type`], keeping the parser failure as the
    /// error source.
    pub fn malformed(property: &str, expected: ExpectedType, source: MalformedError) -> Self {
        PropertyError::InvalidType {
            property: property.to_string(),
            expected,
            source: Some(source),
        }
    }

    /// Name of the property the error refers to.
    pub fn property(&self) -> &str {
        match self {
            PropertyError::Missing { property } | PropertyError::InvalidType { property, .. } => property,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, PropertyError::Missing { .. })
    }

    pub fn is_invalid_type(&self) -> bool {
        matches!(self, PropertyError::InvalidType { .. })
    }

    /// Expected representation for an [`PropertyError::InvalidType`] error.
    pub fn expected(&self) -> Option<ExpectedType> {
        match self {
            PropertyError::InvalidType { expected, .. } => Some(*expected),
            PropertyError::Missing { .. } => None,
        }
    }
}
