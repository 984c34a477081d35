//! Directory-backed secret fetcher.
//!
//! Reads secrets exported to disk as one JSON object per path:
//! `<root>/<mount_point>/<path>.json`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::trace;

use super::{FetchResult, SecretFetcher};
use crate::core::domain::RawSecret;
use crate::error::FetchError;

/// Serves secrets from JSON files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File holding the secrets of `mount_point`/`path`.
    pub fn secret_file(&self, path: &str, mount_point: &str) -> PathBuf {
        let relative = path.trim_matches('/');
        self.root
            .join(mount_point)
            .join(format!("{}.json", relative))
    }
}

#[async_trait]
impl SecretFetcher for DirectoryFetcher {
    async fn fetch_secrets(&self, path: &str, mount_point: &str) -> FetchResult<Vec<RawSecret>> {
        let file = self.secret_file(path, mount_point);
        trace!(file = %file.display(), "reading secret file");

        let contents = tokio::fs::read_to_string(&file)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => FetchError::NotFound {
                    mount_point: mount_point.to_string(),
                    path: path.to_string(),
                },
                _ => FetchError::Transport {
                    path: path.to_string(),
                    reason: e.to_string(),
                },
            })?;

        let data: Map<String, Value> =
            serde_json::from_str(&contents).map_err(|e| FetchError::Malformed {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        Ok(data
            .into_iter()
            .map(|(key, value)| RawSecret::new(key, value))
            .collect())
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}
