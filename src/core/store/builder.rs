//! Layered configuration builder.
//!
//! Sources are applied in the order they were added. A secret provider sees
//! everything added before it as existing configuration.

use std::path::Path;

use tracing::{debug, info};

use super::{ConfigStore, MemoryStore};
use crate::core::constants::{DEVELOPMENT_ENVIRONMENT, ENVIRONMENT_VARIABLE};
use crate::core::provider::{self, SecretProvider};
use crate::error::{ConfigError, Result};

enum Source {
    Pairs(Vec<(String, String)>),
    Provider(SecretProvider),
}

/// Builds a `MemoryStore` from ordered sources.
#[derive(Default)]
pub struct ConfigBuilder {
    sources: Vec<Source>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add literal key-value pairs.
    pub fn add_in_memory<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.sources.push(Source::Pairs(pairs));
        self
    }

    /// Add a JSON document, flattened into `:`-separated keys.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the document is not a JSON object.
    pub fn add_json(self, contents: &str) -> Result<Self> {
        let store = MemoryStore::from_json(contents)?;
        Ok(self.add_in_memory(store.into_inner()))
    }

    /// Add a JSON file, flattened into `:`-separated keys.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read.
    pub fn add_json_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "adding json source");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        self.add_json(&contents)
    }

    /// Add a secret provider.
    pub fn add_provider(mut self, provider: SecretProvider) -> Self {
        self.sources.push(Source::Provider(provider));
        self
    }

    /// Add a provider only when running in the development environment.
    ///
    /// The environment is read from `APP_ENVIRONMENT`.
    pub fn add_local_development_provider(self, provider: SecretProvider) -> Self {
        let environment = std::env::var(ENVIRONMENT_VARIABLE).ok();
        self.add_provider_for_environment(environment.as_deref(), provider)
    }

    /// Add a provider only if `environment` is `Development` (any case).
    pub fn add_provider_for_environment(
        self,
        environment: Option<&str>,
        provider: SecretProvider,
    ) -> Self {
        let is_development =
            environment.is_some_and(|env| env.eq_ignore_ascii_case(DEVELOPMENT_ENVIRONMENT));
        if !is_development {
            info!(
                environment = environment.unwrap_or("<unset>"),
                "skipping local development secret provider"
            );
            return self;
        }
        self.add_provider(provider)
    }

    /// Number of sources added so far
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Apply all sources in order.
    ///
    /// # Errors
    ///
    /// Fails on the first source that fails; see [`SecretProvider::load`].
    pub async fn build(self) -> Result<MemoryStore> {
        let mut store = MemoryStore::new();

        for source in self.sources {
            match source {
                Source::Pairs(pairs) => {
                    for (key, value) in &pairs {
                        store.set(key, value);
                    }
                }
                Source::Provider(provider) => {
                    provider.load(&mut store).await?;
                }
            }
        }

        debug!(keys = store.len(), "configuration built");
        Ok(store)
    }

    /// Blocking variant of [`build`](Self::build).
    ///
    /// Fails with `Error::Other` when called from inside a tokio runtime.
    pub fn build_blocking(self) -> Result<MemoryStore> {
        provider::block_on(self.build())?
    }
}
