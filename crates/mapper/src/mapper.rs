//! JSON mapper dispatching to registered node deserializers.

use std::any::{TypeId, type_name};
use std::fmt;
use std::io::Read;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::{DuplicatePolicy, MapperConfig};
use crate::context::DeserializationContext;
use crate::deserializer::{DynDeserializer, HandledType};
use crate::error::{DeserializeError, MapperError};
use crate::module::{DeserializerModule, insert_deserializer};

/// Parses JSON input and binds it with the deserializer registered for the
/// requested type.
///
/// A mapper is configured with [`Mapper::register_module`] and then shared
/// read-only, usually through a [`crate::MapperProvider`].
pub struct Mapper {
    duplicate_policy: DuplicatePolicy,
    module_names: Vec<String>,
    deserializers: IndexMap<TypeId, DynDeserializer>,
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Mapper {
    pub fn new() -> Self {
        Self::with_config(&MapperConfig::default())
    }

    pub fn with_config(config: &MapperConfig) -> Self {
        Self {
            duplicate_policy: config.duplicate_policy,
            module_names: Vec::new(),
            deserializers: IndexMap::new(),
        }
    }

    /// Merges every deserializer of `module` into this mapper.
    ///
    /// A type already handled by an earlier module is resolved with the
    /// mapper's duplicate policy.
    pub fn register_module(&mut self, module: DeserializerModule) -> &mut Self {
        let name = module.name().to_string();
        debug!(module = %name, deserializers = module.len(), "registering module");
        for deserializer in module.into_deserializers() {
            insert_deserializer(&mut self.deserializers, deserializer, self.duplicate_policy, &name);
        }
        self.module_names.push(name);
        self
    }

    pub fn module_names(&self) -> &[String] {
        &self.module_names
    }

    pub fn handles<T: 'static>(&self) -> bool {
        self.deserializers.contains_key(&TypeId::of::<T>())
    }

    pub fn handled_types(&self) -> impl Iterator<Item = HandledType> + '_ {
        self.deserializers.values().map(|deserializer| deserializer.handled_type())
    }

    /// Parses `content` and binds the root node to `T`.
    pub fn read_value<T: 'static>(&self, content: &str) -> Result<T, MapperError> {
        let root: Value = serde_json::from_str(content)?;
        self.tree_to_value(&root)
    }

    pub fn read_slice<T: 'static>(&self, content: &[u8]) -> Result<T, MapperError> {
        let root: Value = serde_json::from_slice(content)?;
        self.tree_to_value(&root)
    }

    pub fn read_from<T: 'static, R: Read>(&self, reader: R) -> Result<T, MapperError> {
        let root: Value = serde_json::from_reader(reader)?;
        self.tree_to_value(&root)
    }

    /// Parses `content` without binding it.
    pub fn read_tree(&self, content: &str) -> Result<Value, MapperError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Binds an already parsed node to `T`.
    pub fn tree_to_value<T: 'static>(&self, root: &Value) -> Result<T, MapperError> {
        trace!(target_type = type_name::<T>(), "binding JSON tree");
        self.convert_node(root)
            .map_err(|source| MapperError::deserialize(type_name::<T>(), source))
    }

    pub(crate) fn convert_node<T: 'static>(&self, node: &Value) -> Result<T, DeserializeError> {
        let deserializer = self
            .deserializers
            .get(&TypeId::of::<T>())
            .ok_or(DeserializeError::Unregistered {
                type_name: type_name::<T>(),
            })?;
        let ctx = DeserializationContext::new(self);
        let value = deserializer.convert_erased(node, &ctx)?;
        value
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| DeserializeError::TypeMismatch {
                type_name: type_name::<T>(),
            })
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("duplicate_policy", &self.duplicate_policy)
            .field("module_names", &self.module_names)
            .field("handled_types", &self.handled_types().collect::<Vec<_>>())
            .finish()
    }
}
