//! Metadata extraction error types.

use thiserror::Error;

/// Errors that can occur while reading a filter's metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Descriptor is not valid JSON or has the wrong shape.
    #[error("Failed to parse descriptor '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Descriptor has an empty `filters` list.
    #[error("Descriptor '{path}' declares no filters")]
    NoFilters { path: String },

    /// First filter of the descriptor has no `runWith`.
    #[error("Descriptor '{path}' does not say what its first filter runs with")]
    MissingRunWith { path: String },

    /// README is not valid UTF-8.
    #[error("README '{path}' is not valid UTF-8")]
    InvalidReadme { path: String },
}
