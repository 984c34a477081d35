//! Override policy.
//!
//! Decides whether a secret may overwrite a configuration key. Except keys
//! protect a key and every key nested under it; required keys are exact
//! matches that win over any except rule.

use std::collections::HashSet;

use tracing::trace;

use crate::core::constants::DEFAULT_EXCEPT_KEYS;
use crate::core::options::ProviderOptions;

/// Whether a secret may overwrite `destination_key`.
///
/// Rules, first match wins:
/// 1. exact member of `required_keys`: yes
/// 2. exact member of `except_keys`: no
/// 3. nested under a member of `except_keys` (`key` + separator + ...): no
/// 4. otherwise: yes
pub fn may_overwrite(
    destination_key: &str,
    except_keys: &HashSet<String>,
    required_keys: &HashSet<String>,
    destination_separator: &str,
) -> bool {
    if required_keys.contains(destination_key) {
        return true;
    }

    if except_keys.contains(destination_key) {
        return false;
    }

    !except_keys
        .iter()
        .any(|section| is_nested_under(destination_key, section, destination_separator))
}

fn is_nested_under(key: &str, section: &str, separator: &str) -> bool {
    key.strip_prefix(section)
        .is_some_and(|rest| rest.starts_with(separator))
}

/// Except and required key sets resolved from options.
///
/// Built once per merge.
#[derive(Debug, Clone)]
pub struct OverridePolicy {
    except_keys: HashSet<String>,
    required_keys: HashSet<String>,
    separator: String,
}

impl OverridePolicy {
    pub fn new(
        except_keys: impl IntoIterator<Item = String>,
        required_keys: impl IntoIterator<Item = String>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            except_keys: except_keys.into_iter().collect(),
            required_keys: required_keys.into_iter().collect(),
            separator: separator.into(),
        }
    }

    /// Build the policy, adding `DEFAULT_EXCEPT_KEYS` when enabled.
    pub fn from_options(options: &ProviderOptions) -> Self {
        let defaults: &[&str] = if options.use_default_except_keys {
            DEFAULT_EXCEPT_KEYS
        } else {
            &[]
        };
        let except_keys = defaults
            .iter()
            .map(|k| k.to_string())
            .chain(options.except_keys.iter().cloned());

        Self::new(
            except_keys,
            options.required_keys.iter().cloned(),
            options.destination_separator.as_str(),
        )
    }

    pub fn may_overwrite(&self, destination_key: &str) -> bool {
        let allowed = may_overwrite(
            destination_key,
            &self.except_keys,
            &self.required_keys,
            &self.separator,
        );
        trace!(key = destination_key, allowed, "override decision");
        allowed
    }

    /// Effective except keys.
    pub fn except_keys(&self) -> &HashSet<String> {
        &self.except_keys
    }

    pub fn required_keys(&self) -> &HashSet<String> {
        &self.required_keys
    }
}
