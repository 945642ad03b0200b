//! The string-keyed configuration tree handed to the plugin by the host.
//!
//! Config files are JSON with the usual relaxations (comments, trailing
//! commas, unquoted keys), parsed via `json5`. Sections are immutable once
//! loaded; lookups take an explicit default rather than propagating absence.

use serde_json::{Map, Value};
use std::{collections::BTreeSet, fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration format error: {0}")]
    Format(#[from] json5::Error),
    #[error("Configuration root is not an object")]
    NotASection,
}

/// One section of the configuration tree.
///
/// Keys map to strings or to nested sections. Anything else a config author
/// writes is ignored by the typed accessors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigSection(Map<String, Value>);

impl ConfigSection {
    /// Load a configuration tree from a file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse a configuration tree from already-loaded text.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        match json5::from_str(text)? {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ConfigError::NotASection),
        }
    }

    /// The nested section under `name`. A missing or non-section key yields
    /// an empty section, so lookups further down fall through to defaults.
    pub fn get_section(&self, name: &str) -> ConfigSection {
        match self.0.get(name) {
            Some(Value::Object(map)) => Self(map.clone()),
            _ => Self::default(),
        }
    }

    /// The set of keys present in this section.
    pub fn keys(&self) -> BTreeSet<String> {
        self.0.keys().cloned().collect()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The string value stored under `key`, or `default` when the key is
    /// missing or not a string.
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.get_string_opt(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// The string value stored under `key`, if there is one.
    pub fn get_string_opt(&self, key: &str) -> Option<String> {
        match self.0.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }
}
