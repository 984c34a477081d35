//! Load command.
//!
//! Builds configuration from base JSON files, merges secrets exported to a
//! local directory on top and prints the result.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::output;
use crate::core::fetch::DirectoryFetcher;
use crate::core::options::ProviderOptions;
use crate::core::provider::SecretProvider;
use crate::core::store::ConfigBuilder;
use crate::error::{Error, Result};

pub fn execute(
    options_path: &Path,
    secrets_dir: &Path,
    bases: &[PathBuf],
    optional: bool,
    json: bool,
) -> Result<()> {
    let options = ProviderOptions::load(options_path)?;
    let fetcher = Arc::new(DirectoryFetcher::new(secrets_dir));
    let provider = SecretProvider::new(fetcher, options, optional);

    let mut builder = ConfigBuilder::new();
    for base in bases {
        builder = builder.add_json_file(base)?;
    }
    let config = builder.add_provider(provider).build_blocking()?;

    if json {
        let rendered = serde_json::to_string_pretty(&config.to_json())
            .map_err(|e| Error::Other(format!("failed to render json: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    output::section("Configuration");
    if config.is_empty() {
        output::dimmed("no configuration keys");
    }
    for (key, value) in config.iter() {
        output::entry(key, value);
    }
    Ok(())
}
