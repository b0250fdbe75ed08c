use std::sync::Arc;

use jsonbind_mapper::{DeserializationContext, DeserializeError, NodeDeserializer};
use jsonbind_retriever::PropertyRetriever;
use serde_json::Value;

const KEY_NAME: &str = "name";
const KEY_AGE: &str = "age";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self { name: name.into(), age }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

pub struct PersonDeserializer {
    retriever: Arc<PropertyRetriever>,
}

impl PersonDeserializer {
    pub fn new(retriever: Arc<PropertyRetriever>) -> Self {
        Self { retriever }
    }
}

impl NodeDeserializer for PersonDeserializer {
    type Output = Person;

    fn convert(&self, root: &Value, _ctx: &DeserializationContext<'_>) -> Result<Person, DeserializeError> {
        let name = self.retriever.get_string(root, KEY_NAME)?;
        let age = self.retriever.get_int(root, KEY_AGE)?;
        Ok(Person::new(name, age))
    }
}
