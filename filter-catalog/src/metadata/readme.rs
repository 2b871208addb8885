//! Description fallback from a filter's README.

use super::MetadataError;
use std::path::Path;

/// README names, in lookup order. Matched exactly.
const README_NAMES: [&str; 2] = ["readme.md", "README.md"];

/// Reads the first prose line of the README in `dir`.
///
/// Returns `Ok(None)` if there is no README. A README without any prose line
/// yields `Ok(Some(""))`.
///
/// # Errors
///
/// Returns [`MetadataError`] if the README can't be read or isn't UTF-8.
pub fn readme_description(dir: &Path) -> Result<Option<String>, MetadataError> {
    let Some(path) = README_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
    else {
        return Ok(None);
    };

    let bytes = std::fs::read(&path).map_err(|e| MetadataError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| MetadataError::InvalidReadme {
        path: path.display().to_string(),
    })?;

    Ok(Some(first_prose_line(&text).unwrap_or_default().to_string()))
}

/// First line that is neither blank nor a Markdown heading.
fn first_prose_line(text: &str) -> Option<&str> {
    text.lines()
        .find(|line| !line.trim().is_empty() && !line.starts_with('#'))
}
