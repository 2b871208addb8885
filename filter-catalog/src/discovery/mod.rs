//! Repository discovery using the GitHub repository search API.
//!
//! Repositories are found by topic. Only the first result page is read, and
//! repositories owned by an excluded account (usually the maintainers, whose
//! filters live in the standard library) are dropped.

mod error;
mod repository;

pub use error::DiscoveryError;
pub use repository::Repository;

use octocrab::Octocrab;
use repository::{SearchItem, SearchResponse};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, info_span, warn, Instrument};

/// Route of the repository search endpoint.
const SEARCH_ROUTE: &str = "/search/repositories";

/// Account names whose repositories are never catalogued.
///
/// Matching is ASCII case-insensitive, as GitHub logins are.
#[derive(Debug, Clone, Default)]
pub struct ExcludedOwners(HashSet<String>);

impl ExcludedOwners {
    /// Returns true if `owner` is excluded.
    #[must_use]
    pub fn contains(&self, owner: &str) -> bool {
        self.0.contains(&owner.to_ascii_lowercase())
    }

    /// Number of excluded owners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is excluded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExcludedOwners {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|owner| owner.as_ref().to_ascii_lowercase())
                .collect(),
        )
    }
}

#[derive(Serialize)]
struct SearchQuery {
    q: String,
}

/// Discovers repositories tagged with `topic`.
///
/// # Arguments
///
/// * `octocrab` - GitHub client; no authentication is required
/// * `topic` - Topic to search for, e.g. `regolith-filter`
/// * `excluded` - Owners whose repositories are skipped
///
/// # Returns
///
/// Repositories in search result order, without excluded owners.
///
/// # Errors
///
/// Returns [`DiscoveryError`] if the topic is blank, the request fails, or
/// the response can't be parsed.
pub async fn discover_repositories(
    octocrab: &Octocrab,
    topic: &str,
    excluded: &ExcludedOwners,
) -> Result<Vec<Repository>, DiscoveryError> {
    let span = info_span!("discover", topic = %topic);

    async {
        info!("Starting repository discovery");

        let query = build_search_query(topic)?;
        debug!(query = %query.q, "Executing repository search");

        let response: SearchResponse = octocrab.get(SEARCH_ROUTE, Some(&query)).await?;
        let found = response.items.len();
        let repositories = filter_repositories(response.items, excluded);

        info!(
            found,
            kept = repositories.len(),
            "Discovery complete"
        );
        Ok(repositories)
    }
    .instrument(span)
    .await
}

/// Builds the search query.
///
/// Format: `topic:{topic}`
fn build_search_query(topic: &str) -> Result<SearchQuery, DiscoveryError> {
    let topic = topic.trim();
    if topic.is_empty() || topic.chars().any(char::is_whitespace) {
        return Err(DiscoveryError::InvalidTopic {
            topic: topic.to_string(),
        });
    }

    Ok(SearchQuery {
        q: format!("topic:{topic}"),
    })
}

/// Converts search items to repositories, dropping excluded owners.
///
/// Items with unparseable URLs are skipped with a warning.
fn filter_repositories(items: Vec<SearchItem>, excluded: &ExcludedOwners) -> Vec<Repository> {
    items
        .into_iter()
        .filter_map(|item| {
            if excluded.contains(&item.owner.login) {
                debug!(repo = %item.full_name, "Skipping repository of excluded owner");
                return None;
            }

            let full_name = item.full_name.clone();
            match Repository::try_from(item) {
                Ok(repo) => Some(repo),
                Err(e) => {
                    warn!(repo = %full_name, error = %e, "Skipping repository with invalid URL");
                    None
                }
            }
        })
        .collect()
}
