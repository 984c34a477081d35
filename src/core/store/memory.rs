//! In-memory configuration store.

use std::collections::BTreeMap;

use serde_json::Value;

use super::ConfigStore;
use crate::core::constants::DEFAULT_DESTINATION_SEPARATOR;
use crate::error::{ConfigError, Result};

/// Ordered in-memory configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw key-value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Parse a JSON document into flat configuration keys.
    ///
    /// Nested objects are joined with `:` and array elements use their
    /// index, so `{"Db": {"Hosts": ["a"]}}` yields `Db:Hosts:0 = a`.
    /// `null` becomes an empty string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the document is malformed, or
    /// `ConfigError::InvalidValue` if its root is not an object.
    pub fn from_json(contents: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(contents).map_err(ConfigError::Json)?;
        if !root.is_object() {
            return Err(ConfigError::InvalidValue {
                field: "json",
                reason: "document root must be an object".to_string(),
            }
            .into());
        }

        let mut pairs = Vec::new();
        flatten_json(None, &root, &mut pairs);
        Ok(Self::from_pairs(pairs))
    }

    /// Iterate over all entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as a flat JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        )
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.entries
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

fn flatten_json(prefix: Option<&str>, value: &Value, out: &mut Vec<(String, String)>) {
    let child_key = |name: &str| match prefix {
        Some(p) => format!("{}{}{}", p, DEFAULT_DESTINATION_SEPARATOR, name),
        None => name.to_string(),
    };

    match value {
        Value::Object(map) => {
            for (name, child) in map {
                flatten_json(Some(&child_key(name)), child, out);
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                flatten_json(Some(&child_key(&idx.to_string())), child, out);
            }
        }
        scalar => {
            if let Some(key) = prefix {
                out.push((key.to_string(), scalar_text(scalar)));
            }
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
