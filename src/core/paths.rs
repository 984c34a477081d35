//! Remote secret path computation.
//!
//! Derives the ordered list of paths to query from the base, common and
//! sub-path options. Order matters: results fetched from later paths
//! overwrite earlier ones when keys collide.

use tracing::debug;

use crate::core::constants::PATH_SEPARATOR;
use crate::core::options::ProviderOptions;
use crate::core::types::SecretPath;
use crate::error::{ConfigError, Result};

/// Compute the remote paths to query, common path first.
///
/// When `UseSecretsCommonPath` is set, the first entry is
/// `base/section/common`, where `section` is the part of the first sub-path
/// before its first `/`. Every sub-path then yields `base/sub_path`.
/// Blank segments are dropped from the join.
///
/// # Errors
///
/// Returns `ConfigError::MissingSubPaths` if no sub-paths are configured.
pub fn secret_paths(options: &ProviderOptions) -> Result<Vec<SecretPath>> {
    let sub_paths = &options.secrets_sub_paths;
    let Some(first) = sub_paths.first() else {
        return Err(ConfigError::MissingSubPaths.into());
    };

    let base = segment(options.secrets_base_path.as_deref());
    let mut paths = Vec::with_capacity(sub_paths.len() + 1);

    if options.use_secrets_common_path {
        let section = segment(Some(section_of(first)));
        let common = segment(options.secrets_common_path.as_deref());
        paths.push(join([base, section, common]));
    }

    for sub_path in sub_paths {
        let path = match base {
            Some(base) => format!("{}{}{}", base, PATH_SEPARATOR, sub_path),
            None => sub_path.clone(),
        };
        paths.push(path);
    }

    debug!(count = paths.len(), "computed secret paths");
    Ok(paths)
}

/// Part of a sub-path before its first separator.
fn section_of(sub_path: &str) -> &str {
    sub_path
        .split_once(PATH_SEPARATOR)
        .map_or(sub_path, |(section, _)| section)
}

/// A path segment with surrounding separators removed, or `None` if blank.
fn segment(value: Option<&str>) -> Option<&str> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim_matches(PATH_SEPARATOR))
        .filter(|v| !v.is_empty())
}

fn join<'a>(segments: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let separator = PATH_SEPARATOR.to_string();
    segments
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(separator.as_str())
}
