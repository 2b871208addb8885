//! Run summary types.

use super::result::RepositoryOutcome;

/// A repository left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryFailure {
    /// Repository full name.
    pub repository: String,
    /// Error message.
    pub error: String,
}

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories left after owner exclusion.
    pub repositories_discovered: usize,

    /// Number of repositories cloned and scanned.
    pub repositories_scanned: usize,

    /// Number of repositories that failed to clone or scan.
    pub repositories_failed: usize,

    /// Repositories that failed, in processing order.
    pub failures: Vec<RepositoryFailure>,

    /// Number of filters added to the catalog.
    pub filters_added: usize,

    /// Number of plugin directories skipped because of a bad descriptor.
    pub filters_skipped: usize,

    /// Number of filters whose name another author already used.
    pub name_collisions: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a repository outcome.
    pub fn record_outcome(&mut self, outcome: &RepositoryOutcome) {
        match outcome {
            RepositoryOutcome::Scanned { records, skipped } => {
                self.repositories_scanned += 1;
                self.filters_added += records.len();
                self.filters_skipped += skipped;
            }
            RepositoryOutcome::Failed { repository, error } => {
                self.repositories_failed += 1;
                self.failures.push(RepositoryFailure {
                    repository: repository.clone(),
                    error: error.clone(),
                });
            }
        }
    }

    /// Returns true if any repository or filter was skipped due to an error.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.repositories_failed > 0 || self.filters_skipped > 0
    }
}
