//! Processing result types.

use crate::catalog::FilterRecord;

/// Result of processing a single repository.
#[derive(Debug, Clone)]
pub enum RepositoryOutcome {
    /// Repository was cloned and scanned.
    Scanned {
        /// Filters extracted, in scan order.
        records: Vec<FilterRecord>,
        /// Plugin directories skipped because of a bad descriptor.
        skipped: usize,
    },

    /// Repository could not be cloned or scanned.
    Failed {
        /// Repository full name.
        repository: String,
        /// Error message.
        error: String,
    },
}
