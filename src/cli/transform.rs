//! Transform command.
//!
//! Explains what a single secret key becomes and whether it may overwrite
//! existing configuration.

use std::path::Path;

use crate::cli::output;
use crate::core::options::ProviderOptions;
use crate::core::policy::OverridePolicy;
use crate::core::transform::KeyTransformer;
use crate::error::Result;

pub fn execute(key: &str, options_path: Option<&Path>) -> Result<()> {
    let options = match options_path {
        Some(path) => ProviderOptions::load(path)?,
        None => ProviderOptions::default(),
    };

    let destination = KeyTransformer::from_options(&options).apply(key);
    let allowed = OverridePolicy::from_options(&options).may_overwrite(&destination);

    output::kv("source:     ", key);
    output::kv("destination:", &destination);
    output::kv("overwrite:  ", if allowed { "allowed" } else { "blocked" });
    Ok(())
}
