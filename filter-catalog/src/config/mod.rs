//! Catalog configuration.
//!
//! Settings come from an optional `catalog.toml` file. Every key has a
//! default, so an empty file (or no file at all) describes the community
//! filters page of the Regolith docs.

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Label used in validation errors when the config did not come from a file.
const NO_FILE: &str = "<defaults>";

/// Catalog settings as read from `catalog.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// GitHub topic that marks filter repositories.
    pub topic: String,

    /// Owners whose repositories are never catalogued (the maintainers).
    pub excluded_owners: Vec<String>,

    /// Static Markdown placed above the table.
    pub template: PathBuf,

    /// Document that gets overwritten on each run.
    pub output: PathBuf,

    /// Root for the per-run scratch workspace. System temp dir when unset.
    pub scratch_dir: Option<PathBuf>,

    /// Kill a `git clone` that takes longer than this many seconds.
    pub clone_timeout_secs: Option<u64>,

    /// Alternative GitHub API base URL (GitHub Enterprise, tests).
    pub api_url: Option<String>,

    /// Where this config was loaded from, used in error messages.
    #[serde(skip)]
    source_path: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            excluded_owners: default_excluded_owners(),
            template: PathBuf::from("community_base.md"),
            output: PathBuf::from("community-filters.md"),
            scratch_dir: None,
            clone_timeout_secs: None,
            api_url: None,
            source_path: None,
        }
    }
}

fn default_topic() -> String {
    "regolith-filter".to_string()
}

fn default_excluded_owners() -> Vec<String> {
    vec!["Bedrock-OSS".to_string()]
}

impl CatalogConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read, isn't valid TOML,
    /// or fails [`CatalogConfig::validate`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading catalog config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;
        config.source_path = Some(path.to_path_buf());

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for a blank topic, an
    /// unparseable API URL, or a zero clone timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.topic.trim().is_empty() {
            return Err(self.invalid("topic cannot be empty"));
        }

        if self.topic.chars().any(char::is_whitespace) {
            return Err(self.invalid(format!(
                "topic '{}' cannot contain whitespace",
                self.topic
            )));
        }

        if let Some(api_url) = &self.api_url {
            Url::parse(api_url)
                .map_err(|e| self.invalid(format!("api-url '{api_url}' is invalid: {e}")))?;
        }

        if self.clone_timeout_secs == Some(0) {
            return Err(self.invalid("clone-timeout-secs must be greater than zero"));
        }

        Ok(())
    }

    fn invalid(&self, message: impl Into<String>) -> ConfigError {
        ConfigError::ValidationError {
            path: self
                .source_path
                .as_ref()
                .map_or_else(|| NO_FILE.to_string(), |p| p.display().to_string()),
            message: message.into(),
        }
    }
}
