//! Auto-registering JSON mapper.
//!
//! Applications implement [`NodeDeserializer`] once per domain type, hand the
//! set to an [`AutoRegistrationMapperProvider`], and parse through the
//! [`Mapper`] it builds:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use jsonbind_mapper::{
//!     AutoRegistrationMapperProvider, DeserializationContext, DeserializeError, MapperProvider, NodeDeserializer,
//!     erase,
//! };
//! use jsonbind_retriever::PropertyRetriever;
//! use serde_json::Value;
//!
//! struct Greeting(String);
//!
//! struct GreetingDeserializer {
//!     retriever: Arc<PropertyRetriever>,
//! }
//!
//! impl NodeDeserializer for GreetingDeserializer {
//!     type Output = Greeting;
//!
//!     fn convert(&self, root: &Value, _ctx: &DeserializationContext<'_>) -> Result<Greeting, DeserializeError> {
//!         Ok(Greeting(self.retriever.get_string(root, "text")?.to_string()))
//!     }
//! }
//!
//! let retriever = Arc::new(PropertyRetriever::default());
//! let provider = AutoRegistrationMapperProvider::new(vec![erase(GreetingDeserializer { retriever })]);
//! let greeting: Greeting = provider.get().read_value(r#"{"text": "hi"}"#).expect("parse greeting");
//! assert_eq!(greeting.0, "hi");
//! ```

pub mod config;
pub mod context;
pub mod deserializer;
pub mod error;
pub mod mapper;
pub mod module;
pub mod provider;

pub use config::{DuplicatePolicy, MapperConfig};
pub use context::DeserializationContext;
pub use deserializer::{DynDeserializer, ErasedDeserializer, HandledType, NodeDeserializer, erase};
pub use error::{ConfigError, DeserializeError, MapperError};
pub use jsonbind_retriever as retriever;
pub use mapper::Mapper;
pub use module::DeserializerModule;
pub use provider::{AutoRegistrationMapperProvider, MapperProvider};
