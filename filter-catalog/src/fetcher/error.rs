//! Repository fetch error types.

use thiserror::Error;

/// Errors that can occur while preparing scratch space or cloning.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Scratch directory could not be created or removed.
    #[error("Scratch directory error at '{path}': {source}")]
    Workspace {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Clone failed.
    #[error("Failed to clone repository: {message}")]
    CloneFailed { message: String },

    /// Clone did not finish in time.
    #[error("git clone timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },
}
