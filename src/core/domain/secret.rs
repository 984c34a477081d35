//! Secret types.
//!
//! Represents a single secret as returned by the remote store.

use serde::{Deserialize, Serialize};

use crate::core::types::SourceKey;
use crate::error::FetchError;

/// Value of a secret as delivered by the store.
///
/// Stores hand back arbitrary JSON. Only text can land in configuration, so
/// everything else is kept apart and rejected at merge time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecretValue {
    Text(String),
    Other(serde_json::Value),
}

impl SecretValue {
    /// Borrow the text, if this is a string value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SecretValue::Text(s) => Some(s),
            SecretValue::Other(_) => None,
        }
    }
}

impl From<serde_json::Value> for SecretValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => SecretValue::Text(s),
            other => SecretValue::Other(other),
        }
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        SecretValue::Text(value)
    }
}

impl From<&str> for SecretValue {
    fn from(value: &str) -> Self {
        SecretValue::Text(value.to_string())
    }
}

/// A secret key with its raw value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSecret {
    key: SourceKey,
    value: SecretValue,
}

impl RawSecret {
    /// Create a new secret from a key and value
    pub fn new(key: impl Into<SourceKey>, value: impl Into<SecretValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Key as stored remotely
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw value
    pub fn value(&self) -> &SecretValue {
        &self.value
    }

    /// Consume the secret, returning its text.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::NonStringValue` if the value is not a string.
    pub fn into_text(self) -> Result<(SourceKey, String), FetchError> {
        match self.value {
            SecretValue::Text(text) => Ok((self.key, text)),
            SecretValue::Other(_) => Err(FetchError::NonStringValue { key: self.key }),
        }
    }
}

impl std::fmt::Display for RawSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}
