//! Sample domain used to exercise the mapper end to end.

pub mod organization;
pub mod person;

use std::sync::Arc;

use jsonbind_mapper::{AutoRegistrationMapperProvider, MapperConfig, erase};
use jsonbind_retriever::PropertyRetriever;

use organization::OrganizationDeserializer;
use person::PersonDeserializer;

/// Wires both sample deserializers into one provider.
pub fn provider() -> AutoRegistrationMapperProvider {
    provider_with_config(MapperConfig::default())
}

pub fn provider_with_config(config: MapperConfig) -> AutoRegistrationMapperProvider {
    let retriever = Arc::new(PropertyRetriever::default());
    AutoRegistrationMapperProvider::with_config(
        vec![
            erase(PersonDeserializer::new(Arc::clone(&retriever))),
            erase(OrganizationDeserializer::new(retriever)),
        ],
        config,
    )
}

pub fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
