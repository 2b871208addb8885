//! Document publishing.
//!
//! The output document is the template, a newline, and the table. It is
//! written to a temporary file next to the target and renamed over it, so
//! the previous document is either fully replaced or left untouched. The
//! replacement keeps the previous document's permissions; a new document is
//! world-readable on unix.

use std::fs::Permissions;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while publishing the document.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Template could not be read.
    #[error("Failed to read template '{path}': {source}")]
    Template {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Output could not be written.
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Reads the static template.
///
/// # Errors
///
/// Returns [`PublishError::Template`] if the file can't be read.
pub fn load_template(path: &Path) -> Result<String, PublishError> {
    std::fs::read_to_string(path).map_err(|e| PublishError::Template {
        path: path.display().to_string(),
        source: e,
    })
}

/// Joins the template and table.
#[must_use]
pub fn compose_document(template: &str, table: &str) -> String {
    format!("{template}\n{table}")
}

/// Replaces the file at `output` with `document`.
///
/// # Errors
///
/// Returns [`PublishError::Write`] if the parent directory is missing or not
/// writable. The existing file is unchanged in that case.
pub fn publish(output: &Path, document: &str) -> Result<(), PublishError> {
    let write_error = |source| PublishError::Write {
        path: output.display().to_string(),
        source,
    };

    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(parent).map_err(write_error)?;
    staged.write_all(document.as_bytes()).map_err(write_error)?;
    if let Some(permissions) = published_permissions(output) {
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(write_error)?;
    }
    staged.as_file().sync_all().map_err(write_error)?;
    staged.persist(output).map_err(|e| write_error(e.error))?;

    info!(path = %output.display(), bytes = document.len(), "Published document");
    Ok(())
}

/// Permissions for the published file: those of the file being replaced, or
/// `0644` for a new file on unix. Temporary files are created `0600`.
fn published_permissions(output: &Path) -> Option<Permissions> {
    if let Ok(metadata) = std::fs::metadata(output) {
        return Some(metadata.permissions());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(Permissions::from_mode(0o644))
    }

    #[cfg(not(unix))]
    {
        None
    }
}
