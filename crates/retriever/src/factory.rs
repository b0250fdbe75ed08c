//! URI and URL construction used by the retriever.
//!
//! The retriever never parses locators itself; it delegates to a
//! [`UriFactory`] / [`UrlFactory`] so callers can tighten or replace the
//! parsing rules.

use iri_string::types::{UriReferenceStr, UriReferenceString};
use thiserror::Error;
use url::Url;

/// An RFC 3986 URI reference: absolute (`urn:isbn:0451450523`,
/// `file:///etc/hosts`) or relative (`../up`, `#frag`).
pub type Uri = UriReferenceString;

/// Failure to turn text into a URI or URL.
#[derive(Debug, Error)]
pub enum MalformedError {
    #[error("invalid URI syntax: {0}")]
    Uri(#[from] iri_string::validate::Error),

    #[error("malformed URL: {0}")]
    Url(#[from] url::ParseError),

    /// The text parsed but a factory refused it.
    #[error("rejected {input:?}: {reason}")]
    Rejected { input: String, reason: String },
}

impl MalformedError {
    /// Builds a [`MalformedError::Rejected`] for `input`.
    ///
    /// # Arguments
    /// * `input` - The text the factory refused
    /// * `reason` - Why it was refused, rendered after the input
    pub fn rejected(input: &str, reason: impl Into<String>) -> Self {
        MalformedError::Rejected {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Builds a [`Uri`] from text.
pub trait UriFactory: Send + Sync {
    fn create(&self, text: &str) -> Result<Uri, MalformedError>;
}

/// Builds a [`Url`] from text.
pub trait UrlFactory: Send + Sync {
    fn create(&self, text: &str) -> Result<Url, MalformedError>;
}

/// Parses any RFC 3986 URI reference, absolute or relative.
///
/// Nothing is resolved or normalized; the text is kept as written.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultUriFactory;

impl UriFactory for DefaultUriFactory {
    fn create(&self, text: &str) -> Result<Uri, MalformedError> {
        Ok(UriReferenceStr::new(text)?.to_owned())
    }
}

/// Parses absolute URLs with [`Url::parse`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultUrlFactory;

impl UrlFactory for DefaultUrlFactory {
    fn create(&self, text: &str) -> Result<Url, MalformedError> {
        Ok(Url::parse(text)?)
    }
}

/// URL factory that only accepts an allow-list of schemes.
///
/// Scheme comparison is case-insensitive; [`Url`] already lowercases the
/// parsed scheme.
#[derive(Debug, Clone)]
pub struct SchemeRestrictedUrlFactory {
    schemes: Vec<String>,
}

impl SchemeRestrictedUrlFactory {
    pub fn new<I, S>(schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            schemes: schemes.into_iter().map(|s| s.as_ref().to_ascii_lowercase()).collect(),
        }
    }

    /// Accepts `http` and `https` only.
    pub fn web() -> Self {
        Self::new(["http", "https"])
    }

    pub fn schemes(&self) -> &[String] {
        &self.schemes
    }
}

impl UrlFactory for SchemeRestrictedUrlFactory {
    fn create(&self, text: &str) -> Result<Url, MalformedError> {
        let url = Url::parse(text)?;
        if !self.schemes.iter().any(|scheme| scheme == url.scheme()) {
            return Err(MalformedError::rejected(text, format!("unknown protocol: {}", url.scheme())));
        }
        Ok(url)
    }
}
