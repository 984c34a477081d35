//! vaultlayer - Merge secrets from a remote store into layered configuration.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── load          # Build configuration with secrets merged in
//! │   ├── paths         # Show the remote paths that would be queried
//! │   ├── transform     # Explain how one key is transformed
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── options       # Provider options (PascalCase TOML/JSON)
//!     ├── paths         # Remote path computation
//!     ├── transform     # Secret key → configuration key
//!     ├── policy        # Except/required key rules
//!     ├── merge         # Flatten, transform, filter, write
//!     ├── provider      # Concurrent fetch + optional-failure handling
//!     ├── fetch/        # SecretFetcher trait and implementations
//!     └── store/        # ConfigStore trait, memory store, builder
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use vaultlayer::{
//!     ConfigBuilder, ConfigStore, InMemoryFetcher, ProviderOptions, RawSecret, SecretProvider,
//! };
//!
//! let fetcher = InMemoryFetcher::new().with_default(vec![
//!     RawSecret::new("ENV_Database__Password", "s3cret"),
//!     RawSecret::new("ENV_Logging__LogLevel", "Trace"),
//! ]);
//! let provider = SecretProvider::new(
//!     Arc::new(fetcher),
//!     ProviderOptions::with_sub_paths(["billing/api"]),
//!     false,
//! );
//!
//! let config = ConfigBuilder::new()
//!     .add_in_memory([("Logging:LogLevel", "Information")])
//!     .add_provider(provider)
//!     .build_blocking()
//!     .unwrap();
//!
//! assert_eq!(config.get("Database:Password"), Some("s3cret"));
//! assert_eq!(config.get("Logging:LogLevel"), Some("Information"));
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::domain::{RawSecret, SecretValue};
pub use crate::core::fetch::{DirectoryFetcher, InMemoryFetcher, SecretFetcher};
pub use crate::core::merge::{merge, MergeReport};
pub use crate::core::options::ProviderOptions;
pub use crate::core::paths::secret_paths;
pub use crate::core::policy::{may_overwrite, OverridePolicy};
pub use crate::core::provider::SecretProvider;
pub use crate::core::store::{ConfigBuilder, ConfigStore, MemoryStore};
pub use crate::core::transform::{transform, KeyTransformer};
pub use crate::error::{Error, Result};
