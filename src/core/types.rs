//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A location in the remote secret store (e.g., `services/billing/api`).
pub type SecretPath = String;

/// A key as stored in the remote secret store (e.g., `ENV_Database__Host`).
pub type SourceKey = String;

/// A hierarchical application configuration key (e.g., `Database:Host`).
pub type DestinationKey = String;
