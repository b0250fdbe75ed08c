use std::sync::Arc;

use jsonbind_mapper::{DeserializationContext, DeserializeError, NodeDeserializer};
use jsonbind_retriever::PropertyRetriever;
use serde_json::Value;

use super::person::Person;

const KEY_NAME: &str = "name";
const KEY_MEMBERS: &str = "members";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    name: String,
    members: Vec<Person>,
}

impl Organization {
    pub fn new(name: impl Into<String>, members: Vec<Person>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Person] {
        &self.members
    }
}

pub struct OrganizationDeserializer {
    retriever: Arc<PropertyRetriever>,
}

impl OrganizationDeserializer {
    pub fn new(retriever: Arc<PropertyRetriever>) -> Self {
        Self { retriever }
    }
}

impl NodeDeserializer for OrganizationDeserializer {
    type Output = Organization;

    fn convert(&self, root: &Value, ctx: &DeserializationContext<'_>) -> Result<Organization, DeserializeError> {
        let name = self.retriever.get_string(root, KEY_NAME)?;

        let members_node = self.retriever.get_property(root, KEY_MEMBERS)?;
        let Some(member_nodes) = members_node.as_array() else {
            return Err(DeserializeError::invalid(format!(
                "Expected property \"{KEY_MEMBERS}\" to be an array"
            )));
        };
        let members = member_nodes
            .iter()
            .map(|member| ctx.read_value::<Person>(member))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Organization::new(name, members))
    }
}
