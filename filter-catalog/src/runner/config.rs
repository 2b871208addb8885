//! Runner configuration.

use crate::config::CatalogConfig;
use crate::discovery::ExcludedOwners;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for a catalog run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Topic to search for.
    topic: String,
    /// Owners whose repositories are skipped.
    excluded_owners: ExcludedOwners,
    /// Static Markdown placed above the table.
    template_path: PathBuf,
    /// Document to overwrite.
    output_path: PathBuf,
    /// Root for the scratch workspace.
    scratch_root: Option<PathBuf>,
    /// Limit for a single `git clone`.
    clone_timeout: Option<Duration>,
    /// GitHub API base URL override.
    api_url: Option<String>,
    /// Whether to print the document instead of writing it.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(
        topic: impl Into<String>,
        excluded_owners: ExcludedOwners,
        template_path: PathBuf,
        output_path: PathBuf,
    ) -> Self {
        Self {
            topic: topic.into(),
            excluded_owners,
            template_path,
            output_path,
            scratch_root: None,
            clone_timeout: None,
            api_url: None,
            dry_run: false,
        }
    }

    /// Places the scratch workspace under `scratch_root`.
    pub fn with_scratch_root(mut self, scratch_root: PathBuf) -> Self {
        self.scratch_root = Some(scratch_root);
        self
    }

    /// Kills clones that run longer than `timeout`.
    pub fn with_clone_timeout(mut self, timeout: Duration) -> Self {
        self.clone_timeout = Some(timeout);
        self
    }

    /// Sends API requests to `api_url` instead of api.github.com.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Sets dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the topic.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns the excluded owners.
    pub fn excluded_owners(&self) -> &ExcludedOwners {
        &self.excluded_owners
    }

    /// Returns the template path.
    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Returns the output path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the scratch root, if configured.
    pub fn scratch_root(&self) -> Option<&Path> {
        self.scratch_root.as_deref()
    }

    /// Returns the clone timeout, if configured.
    pub fn clone_timeout(&self) -> Option<Duration> {
        self.clone_timeout
    }

    /// Returns the API base URL override, if configured.
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl From<CatalogConfig> for RunnerConfig {
    fn from(config: CatalogConfig) -> Self {
        let mut runner = Self::new(
            config.topic,
            config.excluded_owners.iter().collect(),
            config.template,
            config.output,
        );
        runner.scratch_root = config.scratch_dir;
        runner.clone_timeout = config.clone_timeout_secs.map(Duration::from_secs);
        runner.api_url = config.api_url;
        runner
    }
}
