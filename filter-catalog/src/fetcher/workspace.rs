//! Scratch directories owned by a run and by each checkout.

use super::FetchError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

/// Prefix of the per-run scratch directory.
const WORKSPACE_PREFIX: &str = "filter-catalog-";

/// Run-scoped scratch area that holds one checkout at a time.
///
/// Removed on [`ScratchWorkspace::close`] or when dropped.
#[derive(Debug)]
pub struct ScratchWorkspace {
    dir: TempDir,
}

impl ScratchWorkspace {
    /// Creates the scratch directory.
    ///
    /// With `root`, the directory is created inside it (creating `root` if
    /// needed, and leaving it in place afterwards). Without, the system temp
    /// directory is used.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Workspace`] if a directory can't be created.
    pub fn create(root: Option<&Path>) -> Result<Self, FetchError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(WORKSPACE_PREFIX);

        let dir = match root {
            Some(root) => {
                std::fs::create_dir_all(root).map_err(|e| FetchError::Workspace {
                    path: root.display().to_string(),
                    source: e,
                })?;
                builder.tempdir_in(root)
            }
            None => builder.tempdir(),
        }
        .map_err(|e| FetchError::Workspace {
            path: root.map_or_else(
                || std::env::temp_dir().display().to_string(),
                |r| r.display().to_string(),
            ),
            source: e,
        })?;

        debug!(path = %dir.path().display(), "Created scratch workspace");
        Ok(Self { dir })
    }

    /// Path of the scratch directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Removes the scratch directory.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Workspace`] if removal fails.
    pub fn close(self) -> Result<(), FetchError> {
        let path = self.dir.path().display().to_string();
        self.dir
            .close()
            .map_err(|e| FetchError::Workspace { path, source: e })
    }
}

/// Directory holding one cloned repository.
///
/// The directory is removed when the checkout is closed or dropped, whether
/// or not the clone succeeded.
#[derive(Debug)]
pub struct RepositoryCheckout {
    path: PathBuf,
    removed: bool,
}

impl RepositoryCheckout {
    /// Takes ownership of `path`, clearing anything left there.
    pub(crate) fn claim(path: PathBuf) -> Result<Self, FetchError> {
        if path.exists() {
            debug!(path = %path.display(), "Removing stale checkout");
            remove_tree(&path)?;
        }

        Ok(Self {
            path,
            removed: false,
        })
    }

    /// Root of the working tree.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Removes the checkout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Workspace`] if removal fails.
    pub fn close(mut self) -> Result<(), FetchError> {
        self.removed = true;
        remove_tree(&self.path)
    }
}

impl Drop for RepositoryCheckout {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = remove_tree(&self.path) {
            warn!(path = %self.path.display(), error = %e, "Failed to remove checkout");
        }
    }
}

/// Removes a directory tree. A missing directory is not an error.
fn remove_tree(path: &Path) -> Result<(), FetchError> {
    match std::fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FetchError::Workspace {
            path: path.display().to_string(),
            source: e,
        }),
    }
}
