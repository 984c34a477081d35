//! Secret retrieval.
//!
//! The provider talks to the remote store only through the `SecretFetcher`
//! trait. Two implementations ship with the crate: `InMemoryFetcher` for
//! tests and embedding, and `DirectoryFetcher` for secrets exported to disk.
//!
//! ## Adding a New Fetcher
//!
//! 1. Implement the `SecretFetcher` trait
//! 2. Map transport and auth failures to `FetchError`
//! 3. Re-export from this module

use async_trait::async_trait;

use crate::core::domain::RawSecret;
use crate::error::FetchError;

mod file;
mod memory;

pub use file::DirectoryFetcher;
pub use memory::InMemoryFetcher;

pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Reads the secrets stored at one path of the remote store.
#[async_trait]
pub trait SecretFetcher: Send + Sync {
    /// Fetch every key/value stored at `path` under `mount_point`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on transport, auth or lookup failure.
    async fn fetch_secrets(&self, path: &str, mount_point: &str) -> FetchResult<Vec<RawSecret>>;

    /// Fetcher name for logs.
    fn name(&self) -> &'static str;
}
