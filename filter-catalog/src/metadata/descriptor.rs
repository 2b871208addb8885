//! `filter.json` deserialization.

use super::MetadataError;
use crate::scanner::DESCRIPTOR_FILE;
use serde::Deserialize;
use std::path::Path;

/// Parsed `filter.json` of a plugin directory.
///
/// Only the fields the catalog needs are read; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginDescriptor {
    /// Filter definitions. The catalog reads the first one.
    pub filters: Vec<DescriptorFilter>,

    /// Human-authored summary.
    #[serde(default)]
    pub description: Option<String>,
}

/// One entry of the descriptor's `filters` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorFilter {
    /// Runtime the filter runs with (e.g. "python", "nodejs"). Entries
    /// that reference a remote or nested filter leave it out.
    #[serde(default)]
    pub run_with: Option<String>,
}

impl PluginDescriptor {
    /// Loads the descriptor of the plugin directory `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] if the file is missing or unreadable, isn't
    /// valid JSON, lists no filters, or its first filter has no `runWith`.
    pub fn load(dir: &Path) -> Result<Self, MetadataError> {
        let path = dir.join(DESCRIPTOR_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| MetadataError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content).map_err(|e| match e {
            ParseFailure::Json(source) => MetadataError::JsonError {
                path: path.display().to_string(),
                source,
            },
            ParseFailure::NoFilters => MetadataError::NoFilters {
                path: path.display().to_string(),
            },
            ParseFailure::MissingRunWith => MetadataError::MissingRunWith {
                path: path.display().to_string(),
            },
        })
    }

    fn parse(content: &str) -> Result<Self, ParseFailure> {
        let descriptor: Self = serde_json::from_str(content).map_err(ParseFailure::Json)?;
        let Some(first) = descriptor.filters.first() else {
            return Err(ParseFailure::NoFilters);
        };
        if first.run_with.is_none() {
            return Err(ParseFailure::MissingRunWith);
        }
        Ok(descriptor)
    }

    /// Runtime of the first declared filter.
    #[must_use]
    pub fn run_with(&self) -> &str {
        self.filters
            .first()
            .and_then(|filter| filter.run_with.as_deref())
            .unwrap_or_default()
    }
}

enum ParseFailure {
    Json(serde_json::Error),
    NoFilters,
    MissingRunWith,
}
