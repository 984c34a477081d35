//! Test fixtures and constants.

/// Options with one sub-path and no common path lookup.
pub const SINGLE_PATH_OPTIONS: &str = r#"
SecretsBasePath = "services"
SecretsSubPaths = ["billing/api"]
UseSecretsCommonPath = false
"#;

/// Options with a common path and two sub-paths.
pub const LAYERED_OPTIONS: &str = r#"
SecretsBasePath = "services"
SecretsCommonPath = "common"
SecretsSubPaths = ["billing/api", "billing/worker"]
"#;

/// Base application configuration.
pub const BASE_CONFIG: &str = r#"{
  "Logging": { "LogLevel": { "Default": "Information" } },
  "Kestrel": "http://0.0.0.0:8080",
  "Database": { "Host": "localhost", "Password": "local" },
  "FeatureFlags": { "Beta": "false" }
}"#;

/// Secrets overlapping the base configuration.
pub const API_SECRETS: &str = r#"{
  "ENV_Logging__LogLevel__Default": "Trace",
  "ENV_Kestrel": "http://0.0.0.0:1",
  "ENV_Database__Password": "vault-password",
  "ENV_FeatureFlags__Beta": "true"
}"#;
