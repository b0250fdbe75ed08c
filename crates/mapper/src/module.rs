//! Named group of deserializers registered into a mapper together.

use std::any::TypeId;
use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, warn};

use crate::config::DuplicatePolicy;
use crate::deserializer::{DynDeserializer, HandledType, NodeDeserializer, erase};

/// Insertion-ordered set of deserializers keyed by handled type.
pub struct DeserializerModule {
    name: String,
    duplicate_policy: DuplicatePolicy,
    deserializers: IndexMap<TypeId, DynDeserializer>,
}

impl DeserializerModule {
    /// Creates an empty module using [`DuplicatePolicy::default`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            duplicate_policy: DuplicatePolicy::default(),
            deserializers: IndexMap::new(),
        }
    }

    /// Sets how a second deserializer for an already handled type is treated.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Registers `deserializer` under its handled type.
    ///
    /// Never fails. A duplicate handled type is logged at `warn` and resolved
    /// with the module's [`DuplicatePolicy`].
    pub fn add_deserializer(&mut self, deserializer: DynDeserializer) -> &mut Self {
        let handled = deserializer.handled_type();
        debug!(module = %self.name, handled_type = %handled, "registering deserializer");
        insert_deserializer(&mut self.deserializers, deserializer, self.duplicate_policy, &self.name);
        self
    }

    /// Typed convenience over [`DeserializerModule::add_deserializer`].
    pub fn add<D: NodeDeserializer>(&mut self, deserializer: D) -> &mut Self {
        self.add_deserializer(erase(deserializer))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.deserializers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deserializers.is_empty()
    }

    /// Whether a deserializer producing `T` is registered.
    pub fn contains<T: 'static>(&self) -> bool {
        self.deserializers.contains_key(&TypeId::of::<T>())
    }

    /// Handled types in registration order.
    pub fn handled_types(&self) -> impl Iterator<Item = HandledType> + '_ {
        self.deserializers.values().map(|deserializer| deserializer.handled_type())
    }

    pub(crate) fn into_deserializers(self) -> impl Iterator<Item = DynDeserializer> {
        self.deserializers.into_values()
    }
}

impl fmt::Debug for DeserializerModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeserializerModule")
            .field("name", &self.name)
            .field("duplicate_policy", &self.duplicate_policy)
            .field("handled_types", &self.handled_types().collect::<Vec<_>>())
            .finish()
    }
}

/// Shared by modules and mappers so both resolve duplicates the same way.
/// A replaced entry keeps its first position.
pub(crate) fn insert_deserializer(
    deserializers: &mut IndexMap<TypeId, DynDeserializer>,
    deserializer: DynDeserializer,
    policy: DuplicatePolicy,
    owner: &str,
) {
    let handled = deserializer.handled_type();
    match deserializers.entry(handled.id()) {
        Entry::Vacant(slot) => {
            slot.insert(deserializer);
        }
        Entry::Occupied(mut slot) => {
            warn!(owner, handled_type = %handled, policy = %policy, "duplicate deserializer registration");
            if policy == DuplicatePolicy::Replace {
                slot.insert(deserializer);
            }
        }
    }
}
