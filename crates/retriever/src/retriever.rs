//! Typed property retriever.

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::error::{ExpectedType, PropertyError};
use crate::factory::{DefaultUriFactory, DefaultUrlFactory, Uri, UriFactory, UrlFactory};
use crate::node::JsonNode;

/// Pulls typed values out of a JSON object node.
///
/// Every `get_*_or_none` method returns `Ok(None)` when the property is absent
/// or `null`, and fails with [`PropertyError::InvalidType`] when the property
/// holds the wrong representation. The matching `get_*` method additionally
/// turns `None` into [`PropertyError::Missing`].
#[derive(Clone)]
pub struct PropertyRetriever {
    uri_factory: Arc<dyn UriFactory>,
    url_factory: Arc<dyn UrlFactory>,
}

impl Default for PropertyRetriever {
    fn default() -> Self {
        Self::new(Arc::new(DefaultUriFactory), Arc::new(DefaultUrlFactory))
    }
}

impl fmt::Debug for PropertyRetriever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyRetriever").finish_non_exhaustive()
    }
}

impl PropertyRetriever {
    /// Creates a retriever that parses locators with the given factories.
    ///
    /// [`PropertyRetriever::default`] uses [`DefaultUriFactory`] and
    /// [`DefaultUrlFactory`].
    pub fn new(uri_factory: Arc<dyn UriFactory>, url_factory: Arc<dyn UrlFactory>) -> Self {
        Self {
            uri_factory,
            url_factory,
        }
    }

    /// Returns the raw child node, or `None` when it is absent or `null`.
    pub fn get_property_or_none<'n, N>(&self, node: &'n N, property: &str) -> Option<&'n N>
    where
        N: JsonNode + ?Sized,
    {
        node.child(property).filter(|prop| !prop.is_null())
    }

    /// Returns the raw child node.
    ///
    /// # Errors
    /// [`PropertyError::Missing`] when the property is absent or `null`.
    pub fn get_property<'n, N>(&self, node: &'n N, property: &str) -> Result<&'n N, PropertyError>
    where
        N: JsonNode + ?Sized,
    {
        require(self.get_property_or_none(node, property), property)
    }

    /// Returns the textual value of `property`, or `None` when it is absent
    /// or `null`.
    ///
    /// # Errors
    /// [`PropertyError::InvalidType`] with "a string" when the value is not
    /// textual. Numbers and booleans are not converted.
    pub fn get_string_or_none<'n, N>(&self, node: &'n N, property: &str) -> Result<Option<&'n str>, PropertyError>
    where
        N: JsonNode + ?Sized,
    {
        let Some(prop) = self.get_property_or_none(node, property) else {
            return Ok(None);
        };
        prop.as_text()
            .map(Some)
            .ok_or_else(|| invalid(property, ExpectedType::String))
    }

    /// Required form of [`PropertyRetriever::get_string_or_none`].
    ///
    /// # Errors
    /// [`PropertyError::Missing`] when the property is absent or `null`, and
    /// [`PropertyError::InvalidType`] when it is not textual.
    ///
    /// # Example
    /// ```rust
    /// use jsonbind_retriever::PropertyRetriever;
    /// use serde_json::json;
    ///
    /// let retriever = PropertyRetriever::default();
    /// let root = json!({"name": "Bob", "age": 20});
    /// assert_eq!(retriever.get_string(&root, "name").unwrap(), "Bob");
    ///
    /// let error = retriever.get_string(&root, "age").unwrap_err();
    /// assert_eq!(error.to_string(), "Expected property \"age\" to be a string");
    /// ```
    pub fn get_string<'n, N>(&self, node: &'n N, property: &str) -> Result<&'n str, PropertyError>
    where
        N: JsonNode + ?Sized,
    {
        require(self.get_string_or_none(node, property)?, property)
    }

    /// Returns `property` as an `i32`, or `None` when it is absent or `null`.
    ///
    /// # Errors
    /// [`PropertyError::InvalidType`] with "an integer" when the value is not
    /// an integral number in `i32` range. Numeric text such as `"42"` is
    /// rejected.
    pub fn get_int_or_none<N>(&self, node: &N, property: &str) -> Result<Option<i32>, PropertyError>
    where
        N: JsonNode + ?Sized,
    {
        let Some(prop) = self.get_property_or_none(node, property) else {
            return Ok(None);
        };
        prop.as_int()
            .map(Some)
            .ok_or_else(|| invalid(property, ExpectedType::Integer))
    }

    /// Required form of [`PropertyRetriever::get_int_or_none`].
    ///
    /// # Errors
    /// [`PropertyError::Missing`] when the property is absent or `null`, and
    /// [`PropertyError::InvalidType`] when it is not an `i32`.
    pub fn get_int<N>(&self, node: &N, property: &str) -> Result<i32, PropertyError>
    where
        N: JsonNode + ?Sized,
    {
        require(self.get_int_or_none(node, property)?, property)
    }

    /// Returns `property` as an `i64`, or `None` when it is absent or `null`.
    /// Short and int values widen to `i64`.
    ///
    /// # Errors
    /// [`PropertyError::InvalidType`] with "a long" when the value is not an
    /// integral number in `i64` range.
    pub fn get_long_or_none<N>(&self, node: &N, property: &str) -> Result<Option<i64>, PropertyError>
    where
        N: JsonNode + ?Sized,
    {
        let Some(prop) = self.get_property_or_none(node, property) else {
            return Ok(None);
        };
        prop.as_long()
            .map(Some)
            .ok_or_else(|| invalid(property, ExpectedType::Long))
    }

    /// Required form of [`PropertyRetriever::get_long_or_none`].
    ///
    /// # Errors
    /// [`PropertyError::Missing`] when the property is absent or `null`, and
    /// [`PropertyError::InvalidType`] when it is not an `i64`.
    pub fn get_long<N>(&self, node: &N, property: &str) -> Result<i64, PropertyError>
    where
        N: JsonNode + ?Sized,
    {
        require(self.get_long_or_none(node, property)?, property)
    }

    /// Parses a textual property through the configured [`UriFactory`].
    ///
    /// Relative references such as `../up` are accepted by the default
    /// factory.
    ///
    /// # Errors
    /// [`PropertyError::InvalidType`] with "a valid URI" when the value is not
    /// textual or the factory refuses it. In the second case the factory's
    /// [`crate::MalformedError`] is the error source.
    pub fn get_uri_or_none<N>(&self, node: &N, property: &str) -> Result<Option<Uri>, PropertyError>
    where
        N: JsonNode + ?Sized,
    {
        let Some(text) = self.locator_text(node, property, ExpectedType::Uri)? else {
            return Ok(None);
        };
        self.uri_factory.create(text).map(Some).map_err(|error| {
            debug!(property, error = %error, "property is not a valid URI");
            PropertyError::malformed(property, ExpectedType::Uri, error)
        })
    }

    /// Required form of [`PropertyRetriever::get_uri_or_none`].
    ///
    /// # Errors
    /// [`PropertyError::Missing`] when the property is absent or `null`, and
    /// [`PropertyError::InvalidType`] when it is not a valid URI.
    pub fn get_uri<N>(&self, node: &N, property: &str) -> Result<Uri, PropertyError>
    where
        N: JsonNode + ?Sized,
    {
        require(self.get_uri_or_none(node, property)?, property)
    }

    /// Parses a textual property through the configured [`UrlFactory`].
    ///
    /// # Errors
    /// [`PropertyError::InvalidType`] with "a valid URL" when the value is not
    /// textual or the factory refuses it. The default factory refuses relative
    /// URLs.
    pub fn get_url_or_none<N>(&self, node: &N, property: &str) -> Result<Option<Url>, PropertyError>
    where
        N: JsonNode + ?Sized,
    {
        let Some(text) = self.locator_text(node, property, ExpectedType::Url)? else {
            return Ok(None);
        };
        self.url_factory.create(text).map(Some).map_err(|error| {
            debug!(property, error = %error, "property is not a valid URL");
            PropertyError::malformed(property, ExpectedType::Url, error)
        })
    }

    /// Required form of [`PropertyRetriever::get_url_or_none`].
    ///
    /// # Errors
    /// [`PropertyError::Missing`] when the property is absent or `null`, and
    /// [`PropertyError::InvalidType`] when it is not a valid URL.
    pub fn get_url<N>(&self, node: &N, property: &str) -> Result<Url, PropertyError>
    where
        N: JsonNode + ?Sized,
    {
        require(self.get_url_or_none(node, property)?, property)
    }

    // Non-textual locators report the locator type, not "a string".
    fn locator_text<'n, N>(
        &self,
        node: &'n N,
        property: &str,
        expected: ExpectedType,
    ) -> Result<Option<&'n str>, PropertyError>
    where
        N: JsonNode + ?Sized,
    {
        let Some(prop) = self.get_property_or_none(node, property) else {
            return Ok(None);
        };
        prop.as_text().map(Some).ok_or_else(|| invalid(property, expected))
    }
}

fn require<T>(value: Option<T>, property: &str) -> Result<T, PropertyError> {
    value.ok_or_else(|| PropertyError::missing(property))
}

fn invalid(property: &str, expected: ExpectedType) -> PropertyError {
    debug!(property, expected = %expected, "property has an unexpected type");
    PropertyError::invalid_type(property, expected)
}
