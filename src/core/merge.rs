//! Merge of fetched secrets into configuration.
//!
//! Flattens per-path results into one working set, transforms every key and
//! writes the values the override policy lets through.

use std::collections::HashMap;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::domain::RawSecret;
use crate::core::options::ProviderOptions;
use crate::core::policy::OverridePolicy;
use crate::core::store::ConfigStore;
use crate::core::transform::KeyTransformer;
use crate::core::types::{DestinationKey, SecretPath, SourceKey};
use crate::error::Result;

/// Outcome of a merge: which destination keys were written and which were
/// left to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    applied: Vec<DestinationKey>,
    skipped: Vec<DestinationKey>,
}

impl MergeReport {
    /// Keys written to the store, in write order
    pub fn applied(&self) -> &[DestinationKey] {
        &self.applied
    }

    /// Keys the policy refused to overwrite
    pub fn skipped(&self) -> &[DestinationKey] {
        &self.skipped
    }
}

/// Merge fetched secrets into `store`.
///
/// Results are flattened in path order; when a source key repeats, the later
/// value wins but the key keeps its first-seen position. Each entry is then
/// transformed and written if the override policy allows it.
///
/// # Errors
///
/// Returns a retrieval error if any value is not a string. Nothing is
/// written in that case.
pub fn merge<S>(
    results: Vec<(SecretPath, Vec<RawSecret>)>,
    options: &ProviderOptions,
    store: &mut S,
) -> Result<MergeReport>
where
    S: ConfigStore + ?Sized,
{
    let working = flatten(results)?;
    let transformer = KeyTransformer::from_options(options);
    let policy = OverridePolicy::from_options(options);

    let mut report = MergeReport::default();
    for (source_key, value) in &working {
        let destination = transformer.apply(source_key);
        if policy.may_overwrite(&destination) {
            store.set(&destination, value);
            report.applied.push(destination);
        } else {
            report.skipped.push(destination);
        }
    }

    debug!(
        secrets = working.len(),
        applied = report.applied.len(),
        skipped = report.skipped.len(),
        "secrets merged"
    );
    Ok(report)
}

/// Collapse results into one entry per source key, latest value first-seen order.
fn flatten(
    results: Vec<(SecretPath, Vec<RawSecret>)>,
) -> Result<Vec<(SourceKey, Zeroizing<String>)>> {
    let mut working: Vec<(SourceKey, Zeroizing<String>)> = Vec::new();
    let mut positions: HashMap<SourceKey, usize> = HashMap::new();

    for (path, secrets) in results {
        debug!(path = %path, count = secrets.len(), "flattening secrets");
        for secret in secrets {
            let (key, text) = secret.into_text()?;
            let text = Zeroizing::new(text);
            match positions.get(&key) {
                Some(&idx) => working[idx].1 = text,
                None => {
                    positions.insert(key.clone(), working.len());
                    working.push((key, text));
                }
            }
        }
    }

    Ok(working)
}
