//! In-memory secret fetcher.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::trace;

use super::{FetchResult, SecretFetcher};
use crate::core::domain::RawSecret;
use crate::error::FetchError;

/// Serves secrets from memory, keyed by mount point and path.
///
/// Paths without an entry fall back to the default secrets when set, and
/// are `NotFound` otherwise.
#[derive(Debug, Default)]
pub struct InMemoryFetcher {
    secrets: HashMap<(String, String), Vec<RawSecret>>,
    fallback: Option<Vec<RawSecret>>,
    failure: Option<String>,
    requested: Mutex<Vec<String>>,
}

impl InMemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `secrets` at `mount_point`/`path`.
    pub fn with_secrets(
        mut self,
        mount_point: impl Into<String>,
        path: impl Into<String>,
        secrets: Vec<RawSecret>,
    ) -> Self {
        self.secrets
            .insert((mount_point.into(), path.into()), secrets);
        self
    }

    /// Serve `secrets` at every path without an explicit entry.
    pub fn with_default(mut self, secrets: Vec<RawSecret>) -> Self {
        self.fallback = Some(secrets);
        self
    }

    /// Fail every request with a transport error.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Paths requested so far, in request order.
    pub fn requested_paths(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

#[async_trait]
impl SecretFetcher for InMemoryFetcher {
    async fn fetch_secrets(&self, path: &str, mount_point: &str) -> FetchResult<Vec<RawSecret>> {
        trace!(path, mount_point, "fetching in-memory secrets");
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(path.to_string());

        if let Some(reason) = &self.failure {
            return Err(FetchError::Transport {
                path: path.to_string(),
                reason: reason.clone(),
            });
        }

        self.secrets
            .get(&(mount_point.to_string(), path.to_string()))
            .or(self.fallback.as_ref())
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                mount_point: mount_point.to_string(),
                path: path.to_string(),
            })
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
