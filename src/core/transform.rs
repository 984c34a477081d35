//! Secret key transformation.
//!
//! Rewrites a key from the secret store into an application configuration
//! key: `ENV_Database__Host` becomes `Database:Host` with default options.

use crate::core::options::ProviderOptions;
use crate::core::types::DestinationKey;

/// Transform a source key into a destination key.
///
/// A non-blank `prefix` removes exactly as many leading characters as the
/// prefix has, whatever those characters are. The rest is split on every
/// `source_separator` (empty segments kept) and joined with
/// `destination_separator`.
pub fn transform(
    source_key: &str,
    prefix: &str,
    source_separator: &str,
    destination_separator: &str,
) -> DestinationKey {
    let stripped = if prefix.trim().is_empty() {
        source_key
    } else {
        skip_chars(source_key, prefix.chars().count())
    };

    if source_separator.is_empty() {
        return stripped.to_string();
    }

    stripped
        .split(source_separator)
        .collect::<Vec<_>>()
        .join(destination_separator)
}

/// Remainder of `s` after its first `n` characters.
fn skip_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

/// Key transformation settings taken from the provider options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTransformer {
    prefix: String,
    source_separator: String,
    destination_separator: String,
}

impl KeyTransformer {
    pub fn new(
        prefix: impl Into<String>,
        source_separator: impl Into<String>,
        destination_separator: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            source_separator: source_separator.into(),
            destination_separator: destination_separator.into(),
        }
    }

    pub fn from_options(options: &ProviderOptions) -> Self {
        Self::new(
            options.environment_variable_prefix.as_str(),
            options.source_separator.as_str(),
            options.destination_separator.as_str(),
        )
    }

    /// Destination key for a source key.
    pub fn apply(&self, source_key: &str) -> DestinationKey {
        transform(
            source_key,
            &self.prefix,
            &self.source_separator,
            &self.destination_separator,
        )
    }
}
