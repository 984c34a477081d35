//! Error types.
//!
//! Configuration errors are always fatal. Retrieval errors are the only ones
//! an optional provider is allowed to swallow.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Invalid or missing provider options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("SecretsSubPaths must contain at least one path")]
    MissingSubPaths,

    #[error("failed to read options file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse options: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to parse json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Failure while getting secrets out of the remote store.
#[derive(Error, Debug)]
#[error("error occurred while trying to get configuration from vault: {source}")]
pub struct RetrievalError {
    #[source]
    source: FetchError,
}

impl RetrievalError {
    /// The underlying fetch failure.
    pub fn cause(&self) -> &FetchError {
        &self.source
    }
}

impl From<FetchError> for RetrievalError {
    fn from(source: FetchError) -> Self {
        Self { source }
    }
}

impl From<FetchError> for Error {
    fn from(source: FetchError) -> Self {
        Error::Retrieval(source.into())
    }
}

/// Errors raised by a `SecretFetcher` implementation.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error at {path}: {reason}")]
    Transport { path: String, reason: String },

    #[error("secret not found: {mount_point}/{path}")]
    NotFound { mount_point: String, path: String },

    #[error("malformed secret data at {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("secret {key} is not a string value")]
    NonStringValue { key: String },
}

pub type Result<T> = std::result::Result<T, Error>;
