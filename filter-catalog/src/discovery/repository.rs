//! Discovered repository information.

use serde::{Deserialize, Serialize};
use url::Url;

/// A repository tagged with the filter topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// URL passed to `git clone`.
    pub clone_url: Url,

    /// Web URL of the repository, base for plugin permalinks.
    pub browse_url: Url,

    /// Default branch name (e.g., "main").
    pub default_branch: String,
}

impl Repository {
    /// Builds the permalink to a directory on the default branch.
    ///
    /// Format: `{browse_url}/tree/{default_branch}/{directory}`
    #[must_use]
    pub fn tree_url(&self, directory: &str) -> String {
        format!(
            "{}/tree/{}/{}",
            self.browse_url.as_str().trim_end_matches('/'),
            self.default_branch,
            directory
        )
    }
}

/// Body of `GET /search/repositories`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub items: Vec<SearchItem>,
}

/// One repository in a search response. Only the fields we use.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub owner: SearchOwner,
    pub clone_url: String,
    pub svn_url: String,
    pub full_name: String,
    pub default_branch: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchOwner {
    pub login: String,
}

impl TryFrom<SearchItem> for Repository {
    type Error = url::ParseError;

    fn try_from(item: SearchItem) -> Result<Self, Self::Error> {
        let name = item
            .full_name
            .split_once('/')
            .map_or(item.full_name.as_str(), |(_, name)| name)
            .to_string();

        Ok(Self {
            owner: item.owner.login,
            name,
            clone_url: Url::parse(&item.clone_url)?,
            browse_url: Url::parse(&item.svn_url)?,
            full_name: item.full_name,
            default_branch: item.default_branch,
        })
    }
}
