//! Constants used throughout vaultlayer.
//!
//! Centralizes option defaults and built-in key sets.

/// Configuration sections that secrets never overwrite unless opted out.
pub const DEFAULT_EXCEPT_KEYS: &[&str] = &["Logging", "Kestrel"];

/// Default mount point of the secret engine.
pub const DEFAULT_MOUNT_POINT: &str = "secret";

/// Default prefix stripped from secret keys.
pub const DEFAULT_ENVIRONMENT_VARIABLE_PREFIX: &str = "ENV_";

/// Separator for hierarchical keys in the secret store.
pub const DEFAULT_SOURCE_SEPARATOR: &str = "__";

/// Separator for hierarchical keys in application configuration.
pub const DEFAULT_DESTINATION_SEPARATOR: &str = ":";

/// Separator between remote path segments.
pub const PATH_SEPARATOR: char = '/';

/// Environment variable naming the current application environment.
pub const ENVIRONMENT_VARIABLE: &str = "APP_ENVIRONMENT";

/// Environment name that enables the local development provider.
pub const DEVELOPMENT_ENVIRONMENT: &str = "Development";

/// Environment variable holding the log filter for the CLI.
pub const LOG_ENV: &str = "VAULTLAYER_LOG";
