//! Typed property retrieval for JSON object nodes.
//!
//! This crate provides a [`PropertyRetriever`] that pulls string, integer,
//! URI and URL values out of a JSON object node with one consistent contract:
//!
//! - `get_*_or_none` treats an absent or `null` property as `Ok(None)`.
//! - `get_*` treats the same situation as a [`PropertyError::Missing`].
//! - A present value of the wrong shape is always a [`PropertyError::InvalidType`].
//!
//! Node access goes through the [`JsonNode`] trait, implemented for
//! [`serde_json::Value`].

pub mod error;
pub mod factory;
pub mod node;
pub mod retriever;

pub use error::{ExpectedType, PropertyError};
pub use factory::{
    DefaultUriFactory, DefaultUrlFactory, MalformedError, SchemeRestrictedUrlFactory, Uri, UriFactory, UrlFactory,
};
pub use node::JsonNode;
pub use retriever::PropertyRetriever;
pub use url::Url;
