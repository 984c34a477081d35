//! Secret provider.
//!
//! Ties path building, concurrent fetching and merging together, and decides
//! whether a retrieval failure aborts the configuration build.

use std::future::Future;
use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, warn};

use crate::core::domain::RawSecret;
use crate::core::fetch::SecretFetcher;
use crate::core::merge::{self, MergeReport};
use crate::core::options::ProviderOptions;
use crate::core::paths;
use crate::core::store::ConfigStore;
use crate::core::types::SecretPath;
use crate::error::{Error, FetchError, Result};

/// Configuration source backed by a secret store.
#[derive(Clone)]
pub struct SecretProvider {
    fetcher: Arc<dyn SecretFetcher>,
    options: ProviderOptions,
    optional: bool,
}

impl std::fmt::Debug for SecretProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretProvider")
            .field("fetcher", &self.fetcher.name())
            .field("options", &self.options)
            .field("optional", &self.optional)
            .finish()
    }
}

impl SecretProvider {
    /// Create a provider.
    ///
    /// An optional provider leaves the store untouched when secrets cannot
    /// be retrieved; a required one fails the load.
    pub fn new(fetcher: Arc<dyn SecretFetcher>, options: ProviderOptions, optional: bool) -> Self {
        Self {
            fetcher,
            options,
            optional,
        }
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Fetch all secret paths and merge them into `store`.
    ///
    /// Returns `Ok(None)` when an optional provider swallowed a retrieval
    /// failure; the store is unchanged in that case.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for invalid options, whatever `optional` says.
    /// Returns `Error::Retrieval` if fetching fails and the provider is not
    /// optional.
    pub async fn load<S>(&self, store: &mut S) -> Result<Option<MergeReport>>
    where
        S: ConfigStore + ?Sized,
    {
        self.options.validate()?;
        let paths = paths::secret_paths(&self.options)?;

        let outcome = match self.fetch_all(&paths).await {
            Ok(results) => merge::merge(results, &self.options, store),
            Err(e) => Err(e.into()),
        };

        match outcome {
            Ok(report) => Ok(Some(report)),
            Err(Error::Retrieval(e)) if self.optional => {
                warn!(
                    fetcher = self.fetcher.name(),
                    error = %e,
                    "optional secret provider failed, keeping existing configuration"
                );
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Blocking variant of [`load`](Self::load) for callers without a runtime.
    pub fn load_blocking<S>(&self, store: &mut S) -> Result<Option<MergeReport>>
    where
        S: ConfigStore + ?Sized,
    {
        block_on(self.load(store))?
    }

    /// Request every path concurrently; the first failure cancels the rest.
    async fn fetch_all(
        &self,
        paths: &[SecretPath],
    ) -> std::result::Result<Vec<(SecretPath, Vec<RawSecret>)>, FetchError> {
        let mount_point = self.options.mount_point.as_str();
        debug!(
            fetcher = self.fetcher.name(),
            mount_point,
            paths = paths.len(),
            "fetching secrets"
        );

        let requests = paths.iter().map(|path| async move {
            let secrets = self.fetcher.fetch_secrets(path, mount_point).await?;
            Ok::<_, FetchError>((path.clone(), secrets))
        });

        try_join_all(requests).await
    }
}

/// Run a future to completion on a fresh current-thread runtime.
///
/// # Errors
///
/// Returns `Error::Other` when called from inside a tokio runtime, where a
/// nested runtime cannot block.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output> {
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(Error::Other(
            "blocking load called from within an async runtime; use the async variant".to_string(),
        ));
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Other(format!("failed to create runtime: {}", e)))?;

    Ok(rt.block_on(future))
}
