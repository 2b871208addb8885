//! Repository discovery error types.

use thiserror::Error;

/// Errors that can occur during repository discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// GitHub API error, including non-success responses and malformed JSON.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The topic can't be used as a search qualifier.
    #[error("Invalid topic '{topic}'")]
    InvalidTopic { topic: String },
}
