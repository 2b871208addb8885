//! Catalog record.

use serde::Serialize;

/// One filter in the catalog, rendered as one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterRecord {
    /// Plugin directory name.
    pub name: String,

    /// Owner of the repository the filter lives in.
    pub author: String,

    /// Permalink to the plugin directory.
    pub url: String,

    /// Runtime from the descriptor's first filter.
    pub language: String,

    /// Descriptor description, README fallback, or empty.
    pub description: String,
}
