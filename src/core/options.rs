//! Provider options.
//!
//! Handles reading and validating the options that drive path building,
//! key transformation and the override policy. Option names follow the
//! PascalCase spelling used in application configuration files.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Options for the secret provider, supplied once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProviderOptions {
    /// Address of the secret store
    pub base_url: Option<String>,
    /// Mount point of the secret engine
    pub mount_point: String,
    /// Base path to secrets, shared by every service
    pub secrets_base_path: Option<String>,
    /// Path to secrets shared between the services of one section
    pub secrets_common_path: Option<String>,
    /// Whether to query the common path first
    pub use_secrets_common_path: bool,
    /// Service secret paths, relative to the base path. Required.
    pub secrets_sub_paths: Vec<String>,
    /// Whether `DEFAULT_EXCEPT_KEYS` are protected as well
    pub use_default_except_keys: bool,
    /// Keys (or whole sections) that secrets must not overwrite
    pub except_keys: Vec<String>,
    /// Exact keys that are always overwritten, even inside an except section
    pub required_keys: Vec<String>,
    /// Prefix stripped from every secret key
    pub environment_variable_prefix: String,
    /// Separator for hierarchical keys in the secret store
    pub source_separator: String,
    /// Separator for hierarchical keys in application configuration
    pub destination_separator: String,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            mount_point: constants::DEFAULT_MOUNT_POINT.to_string(),
            secrets_base_path: None,
            secrets_common_path: None,
            use_secrets_common_path: true,
            secrets_sub_paths: Vec::new(),
            use_default_except_keys: true,
            except_keys: Vec::new(),
            required_keys: Vec::new(),
            environment_variable_prefix: constants::DEFAULT_ENVIRONMENT_VARIABLE_PREFIX
                .to_string(),
            source_separator: constants::DEFAULT_SOURCE_SEPARATOR.to_string(),
            destination_separator: constants::DEFAULT_DESTINATION_SEPARATOR.to_string(),
        }
    }
}

impl ProviderOptions {
    /// Options for the given sub-paths, everything else defaulted.
    pub fn with_sub_paths<I, S>(sub_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            secrets_sub_paths: sub_paths.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Load options from a file.
    ///
    /// Files ending in `.toml` are parsed as TOML, anything else as JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read,
    /// `ConfigError::Parse`/`ConfigError::Json` if it is malformed, or a
    /// validation error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading provider options");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let options = if is_toml {
            Self::from_toml(&contents)?
        } else {
            Self::from_json(&contents)?
        };

        debug!(
            sub_paths = options.secrets_sub_paths.len(),
            except_keys = options.except_keys.len(),
            required_keys = options.required_keys.len(),
            "provider options loaded"
        );

        options.validate()?;
        Ok(options)
    }

    /// Parse options from a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents).map_err(ConfigError::Parse)?)
    }

    /// Parse options from a JSON document.
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents).map_err(ConfigError::Json)?)
    }

    /// Validate the options.
    ///
    /// At least one sub-path must be configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingSubPaths`.
    pub fn validate(&self) -> Result<()> {
        if self.secrets_sub_paths.is_empty() {
            return Err(ConfigError::MissingSubPaths.into());
        }

        Ok(())
    }
}
