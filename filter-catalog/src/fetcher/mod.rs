//! Shallow clones of discovered repositories.
//!
//! Every clone lands in its own directory under a [`ScratchWorkspace`] and is
//! owned by a [`RepositoryCheckout`], which deletes it again. The process
//! working directory is never changed.

mod error;
mod workspace;

pub use error::FetchError;
pub use workspace::{RepositoryCheckout, ScratchWorkspace};

use crate::discovery::Repository;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Name of a repository's checkout directory: `owner/name` becomes `owner_name`.
#[must_use]
pub fn checkout_dir_name(full_name: &str) -> String {
    full_name.replace('/', "_")
}

/// Clones `repository` at depth 1 into `workspace`.
///
/// # Arguments
///
/// * `repository` - Repository to clone
/// * `workspace` - Scratch directory; the clone goes into a subdirectory
/// * `timeout` - Kill the clone after this long; `None` waits indefinitely
///
/// # Returns
///
/// The checkout, which removes itself when closed or dropped.
///
/// # Errors
///
/// Returns [`FetchError`] if git can't be run, exits unsuccessfully, or
/// times out. Any partial clone is removed before returning.
pub async fn clone_repository(
    repository: &Repository,
    workspace: &Path,
    timeout: Option<Duration>,
) -> Result<RepositoryCheckout, FetchError> {
    let checkout =
        RepositoryCheckout::claim(workspace.join(checkout_dir_name(&repository.full_name)))?;

    debug!(
        repo = %repository.full_name,
        path = %checkout.path().display(),
        "Cloning repository"
    );

    let mut command = Command::new("git");
    command
        .arg("clone")
        .args(["--depth", "1", "--quiet"])
        .arg(repository.clone_url.as_str())
        .arg(checkout.path())
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let clone = command.output();
    let output = match timeout {
        Some(limit) => tokio::time::timeout(limit, clone)
            .await
            .map_err(|_| FetchError::Timeout {
                timeout_secs: limit.as_secs(),
            })?,
        None => clone.await,
    }
    .map_err(|e| FetchError::CloneFailed {
        message: format!("Failed to execute git clone: {e}"),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(FetchError::CloneFailed {
            message: format!("git clone failed: {}", stderr.trim()),
        });
    }

    Ok(checkout)
}
