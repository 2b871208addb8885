//! Runner error types.

/// Errors that abort a run.
///
/// Per-repository and per-filter problems never show up here; they are
/// logged and counted in the [`RunSummary`](crate::summary::RunSummary).
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Repository search failed.
    #[error(transparent)]
    Discovery(#[from] crate::discovery::DiscoveryError),

    /// Scratch workspace could not be created.
    #[error(transparent)]
    Workspace(#[from] crate::fetcher::FetchError),

    /// Table rendering failed.
    #[error(transparent)]
    Template(#[from] crate::catalog::TemplateError),

    /// Template missing or output not writable.
    #[error(transparent)]
    Publish(#[from] crate::publisher::PublishError),
}
