//! Catalog assembly.
//!
//! Records are kept in discovery order. Nothing is sorted, validated, or
//! deduplicated here; two authors publishing a filter with the same name
//! both get a row, with a warning logged.

mod record;
mod table;

pub use record::FilterRecord;
pub use table::{TableRenderer, TemplateError, TABLE_HEADER};

use std::collections::HashMap;
use tracing::warn;

/// Ordered collection of every catalogued filter.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<FilterRecord>,
    authors_by_name: HashMap<String, String>,
    collisions: usize,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    ///
    /// Logs a warning when another author already contributed a filter
    /// with the same name.
    pub fn push(&mut self, record: FilterRecord) {
        match self.authors_by_name.get(&record.name) {
            Some(first_author) if *first_author != record.author => {
                warn!(
                    plugin = %record.name,
                    author = %record.author,
                    first_author = %first_author,
                    "Filter name already used by another author"
                );
                self.collisions += 1;
            }
            Some(_) => {}
            None => {
                self.authors_by_name
                    .insert(record.name.clone(), record.author.clone());
            }
        }

        self.records.push(record);
    }

    /// Records in discovery order.
    #[must_use]
    pub fn records(&self) -> &[FilterRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no filter was catalogued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose name was already taken by another author.
    #[must_use]
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Renders the catalog as a Markdown table.
    ///
    /// # Errors
    ///
    /// Returns an error if a row fails to render.
    pub fn render(&self, renderer: &TableRenderer) -> Result<String, TemplateError> {
        renderer.render_table(&self.records)
    }
}

impl Extend<FilterRecord> for Catalog {
    fn extend<I: IntoIterator<Item = FilterRecord>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}
