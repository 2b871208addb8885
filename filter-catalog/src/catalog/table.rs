//! Markdown table rendering using Handlebars.

use super::FilterRecord;
use handlebars::{no_escape, Handlebars};
use thiserror::Error;

/// Template rendering error.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("Template registration error: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),
}

/// Column headings and the alignment row.
pub const TABLE_HEADER: &str = "| Filter | Author | Language | Description |\n\
                                | ------ | ------ | -------- | ----------- |";

const ROW_TEMPLATE_NAME: &str = "row";

const ROW_TEMPLATE: &str = "| [{{name}}]({{url}}) | {{author}} | {{language}} | {{description}} |";

/// Renders [`FilterRecord`]s as Markdown table rows.
pub struct TableRenderer {
    handlebars: Handlebars<'static>,
}

impl TableRenderer {
    /// Creates a renderer with the row template registered.
    ///
    /// The registry is configured with:
    /// - No HTML escaping (for markdown output)
    /// - Strict mode (catches missing fields)
    ///
    /// # Errors
    ///
    /// Returns an error if the row template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(no_escape);
        hbs.set_strict_mode(true);
        hbs.register_template_string(ROW_TEMPLATE_NAME, ROW_TEMPLATE)?;

        Ok(Self { handlebars: hbs })
    }

    /// Renders one table row.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_row(&self, record: &FilterRecord) -> Result<String, TemplateError> {
        Ok(self.handlebars.render(ROW_TEMPLATE_NAME, record)?)
    }

    /// Renders rows for all records, joined with newlines.
    ///
    /// # Errors
    ///
    /// Returns an error if any row fails to render.
    pub fn render_rows(&self, records: &[FilterRecord]) -> Result<String, TemplateError> {
        let rows = records
            .iter()
            .map(|record| self.render_row(record))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows.join("\n"))
    }

    /// Renders the header followed by one row per record.
    ///
    /// # Errors
    ///
    /// Returns an error if any row fails to render.
    pub fn render_table(&self, records: &[FilterRecord]) -> Result<String, TemplateError> {
        if records.is_empty() {
            return Ok(TABLE_HEADER.to_string());
        }
        Ok(format!("{TABLE_HEADER}\n{}", self.render_rows(records)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, author: &str) -> FilterRecord {
        FilterRecord {
            name: name.to_string(),
            author: author.to_string(),
            url: format!("https://github.com/{author}/repo/tree/main/{name}"),
            language: "python".to_string(),
            description: "Does things".to_string(),
        }
    }

    #[test]
    fn renders_row() {
        let renderer = TableRenderer::new().unwrap();

        let row = renderer.render_row(&record("bar", "alice")).unwrap();

        assert_eq!(
            row,
            "| [bar](https://github.com/alice/repo/tree/main/bar) | alice | python | Does things |"
        );
    }

    #[test]
    fn renders_empty_description() {
        let renderer = TableRenderer::new().unwrap();
        let mut record = record("bar", "alice");
        record.description = String::new();

        let row = renderer.render_row(&record).unwrap();

        assert!(row.ends_with("| python |  |"));
    }

    #[test]
    fn no_html_escaping() {
        let renderer = TableRenderer::new().unwrap();
        let mut record = record("bar", "alice");
        record.description = "Converts <b>blocks</b> & \"items\"".to_string();

        let row = renderer.render_row(&record).unwrap();

        assert!(row.contains("Converts <b>blocks</b> & \"items\""));
    }

    #[test]
    fn rows_joined_in_order() {
        let renderer = TableRenderer::new().unwrap();

        let rows = renderer
            .render_rows(&[record("a", "alice"), record("b", "bob")])
            .unwrap();

        let lines: Vec<_> = rows.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("| [a]"));
        assert!(lines[1].starts_with("| [b]"));
        assert!(!rows.ends_with('\n'));
    }

    #[test]
    fn empty_table_is_header_only() {
        let renderer = TableRenderer::new().unwrap();

        let table = renderer.render_table(&[]).unwrap();

        assert_eq!(table, TABLE_HEADER);
        assert_eq!(table.lines().count(), 2);
    }
}
