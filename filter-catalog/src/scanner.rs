//! Plugin directory scanning.
//!
//! A filter is a top-level directory of a repository that contains a
//! [`DESCRIPTOR_FILE`]. Anything else in the repository root is ignored.

use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Descriptor file that marks a directory as a filter.
pub const DESCRIPTOR_FILE: &str = "filter.json";

/// Errors that can occur while scanning a checkout.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Failed to list the repository root.
    #[error("Failed to read directory '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Lists the filter directories at the top level of `root`.
///
/// Hidden entries (starting with `.`), regular files, and directories
/// without a [`DESCRIPTOR_FILE`] are skipped. Names are returned sorted so
/// the catalog does not depend on filesystem enumeration order.
///
/// # Errors
///
/// Returns [`ScanError`] if `root` can't be read.
pub fn scan_plugin_directories(root: &Path) -> Result<Vec<String>, ScanError> {
    let io_error = |source| ScanError::IoError {
        path: root.display().to_string(),
        source,
    };

    let mut plugins = Vec::new();
    for entry in std::fs::read_dir(root).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;

        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            debug!(entry = ?entry.file_name(), "Skipping non UTF-8 entry");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if !path.join(DESCRIPTOR_FILE).is_file() {
            debug!(directory = %name, "No descriptor, not a filter");
            continue;
        }

        plugins.push(name);
    }

    plugins.sort();
    Ok(plugins)
}
