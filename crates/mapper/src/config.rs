//! Mapper configuration.
//!
//! Settings can be built in code, read from a JSON document, or pulled from
//! the environment:
//!
//! - `JSONBIND_MODULE_NAME` names the auto-registration module.
//! - `JSONBIND_DUPLICATE_POLICY` is `replace` or `keep-first`.

use std::{env, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable overriding [`MapperConfig::module_name`].
pub const MODULE_NAME_ENV: &str = "JSONBIND_MODULE_NAME";

/// Environment variable overriding [`MapperConfig::duplicate_policy`].
pub const DUPLICATE_POLICY_ENV: &str = "JSONBIND_DUPLICATE_POLICY";

/// Name given to the module the provider builds when none is configured.
pub const DEFAULT_MODULE_NAME: &str = "jsonbind-auto-registration";

/// What happens when two deserializers handle the same type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// The later registration replaces the earlier one.
    #[default]
    Replace,
    /// The earlier registration stays; later ones are dropped.
    KeepFirst,
}

impl FromStr for DuplicatePolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(DuplicatePolicy::Replace),
            "keep-first" | "keep_first" => Ok(DuplicatePolicy::KeepFirst),
            _ => Err(ConfigError::UnknownDuplicatePolicy {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::Replace => f.write_str("replace"),
            DuplicatePolicy::KeepFirst => f.write_str("keep-first"),
        }
    }
}

/// Settings applied when a [`crate::Mapper`] is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Name of the module the auto-registering provider creates.
    pub module_name: String,
    /// Resolution for duplicate handled types.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl MapperConfig {
    /// Parse a configuration document; absent fields keep their defaults.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Defaults overridden by any non-blank environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = MapperConfig::default();
        if let Some(name) = non_blank_var(MODULE_NAME_ENV) {
            config.module_name = name;
        }
        if let Some(policy) = non_blank_var(DUPLICATE_POLICY_ENV) {
            config.duplicate_policy = policy.parse()?;
        }
        Ok(config)
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
