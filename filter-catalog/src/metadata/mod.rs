//! Filter metadata extraction.
//!
//! Turns a plugin directory into a [`FilterRecord`]: the runtime comes from
//! the descriptor, the description from the descriptor or, failing that,
//! from the README.

mod descriptor;
mod error;
mod readme;

pub use descriptor::{DescriptorFilter, PluginDescriptor};
pub use error::MetadataError;
pub use readme::readme_description;

use crate::catalog::FilterRecord;
use crate::discovery::Repository;
use std::path::Path;
use tracing::warn;

/// Builds the catalog record for the plugin directory `name` in `checkout`.
///
/// A descriptor `description` is used verbatim, even when empty. Otherwise
/// the first prose line of the README is used. A missing or unreadable
/// README gives an empty description and a warning.
///
/// # Errors
///
/// Returns [`MetadataError`] if the descriptor can't be loaded. README
/// problems never fail extraction.
pub fn extract_record(
    checkout: &Path,
    name: &str,
    repository: &Repository,
) -> Result<FilterRecord, MetadataError> {
    let dir = checkout.join(name);
    let descriptor = PluginDescriptor::load(&dir)?;
    let language = descriptor.run_with().to_string();

    let description = match descriptor.description {
        Some(description) => description,
        None => fallback_description(&dir, name, repository),
    };

    Ok(FilterRecord {
        name: name.to_string(),
        author: repository.owner.clone(),
        url: repository.tree_url(name),
        language,
        description,
    })
}

fn fallback_description(dir: &Path, name: &str, repository: &Repository) -> String {
    match readme_description(dir) {
        Ok(Some(description)) => description,
        Ok(None) => {
            warn!(
                repo = %repository.full_name,
                plugin = %name,
                "No description or README, using empty description"
            );
            String::new()
        }
        Err(e) => {
            warn!(
                repo = %repository.full_name,
                plugin = %name,
                error = %e,
                "Unreadable README, using empty description"
            );
            String::new()
        }
    }
}
