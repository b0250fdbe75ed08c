//! Mapper providers.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::config::MapperConfig;
use crate::deserializer::DynDeserializer;
use crate::mapper::Mapper;
use crate::module::DeserializerModule;

/// Source of the shared [`Mapper`].
pub trait MapperProvider: Send + Sync {
    fn get(&self) -> Arc<Mapper>;
}

/// An already built mapper is its own provider.
impl MapperProvider for Arc<Mapper> {
    fn get(&self) -> Arc<Mapper> {
        Arc::clone(self)
    }
}

/// Builds one [`Mapper`] on first use with every supplied deserializer
/// registered, then hands out that same instance.
///
/// Deserializers are registered in the order given. Concurrent first calls
/// to [`MapperProvider::get`] still build exactly once.
pub struct AutoRegistrationMapperProvider {
    deserializers: Vec<DynDeserializer>,
    config: MapperConfig,
    mapper: OnceCell<Arc<Mapper>>,
}

impl AutoRegistrationMapperProvider {
    pub fn new(deserializers: Vec<DynDeserializer>) -> Self {
        Self::with_config(deserializers, MapperConfig::default())
    }

    pub fn with_config(deserializers: Vec<DynDeserializer>, config: MapperConfig) -> Self {
        Self {
            deserializers,
            config,
            mapper: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Whether the mapper has been built.
    pub fn is_built(&self) -> bool {
        self.mapper.get().is_some()
    }

    fn create(&self) -> Arc<Mapper> {
        let mut module =
            DeserializerModule::new(self.config.module_name.clone()).with_duplicate_policy(self.config.duplicate_policy);
        for deserializer in &self.deserializers {
            module.add_deserializer(Arc::clone(deserializer));
        }

        let mut mapper = Mapper::with_config(&self.config);
        mapper.register_module(module);
        debug!(
            module = %self.config.module_name,
            deserializers = self.deserializers.len(),
            "built auto-registered mapper"
        );
        Arc::new(mapper)
    }
}

impl MapperProvider for AutoRegistrationMapperProvider {
    fn get(&self) -> Arc<Mapper> {
        Arc::clone(self.mapper.get_or_init(|| self.create()))
    }
}

impl fmt::Debug for AutoRegistrationMapperProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoRegistrationMapperProvider")
            .field("deserializers", &self.deserializers.len())
            .field("config", &self.config)
            .field("built", &self.is_built())
            .finish()
    }
}
