//! CSV generator.
//!
//! One row per technique, every field quoted, suitable for spreadsheet
//! import. Embedded line breaks stay inside the quoted field.

use super::escape::escape_csv;
use super::{Page, PageRenderer, RenderConfig, RenderError, RenderFormat};

/// CSV renderer.
pub struct CsvRenderer;

impl CsvRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for CsvRenderer {
    fn render(&self, page: &Page, _config: &RenderConfig) -> Result<String, RenderError> {
        let mut content = String::new();
        content.push_str("id,name,definition,rationale,example\n");

        for record in &page.catalog {
            content.push_str(&format!(
                "{},\"{}\",\"{}\",\"{}\",\"{}\"\n",
                record.id,
                escape_csv(&record.name),
                escape_csv(&record.definition),
                escape_csv(&record.rationale),
                escape_csv(&record.example)
            ));
        }

        Ok(content)
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Catalog, TechniqueRecord};

    #[test]
    fn test_csv_header_and_rows() {
        let csv = CsvRenderer::new()
            .render(&Page::default(), &RenderConfig::default())
            .unwrap();
        assert!(csv.starts_with("id,name,definition,rationale,example\n"));
        assert!(csv.contains("1,\"Role Assignment\",\"Tell the model who it should act as\""));
    }

    #[test]
    fn test_csv_quotes_are_doubled() {
        let catalog = Catalog::from_records(vec![TechniqueRecord::new(
            1,
            "A",
            "d",
            "r",
            "\"Explain recursion.\"",
        )]);
        let csv = CsvRenderer::new()
            .render(&Page::new(catalog), &RenderConfig::default())
            .unwrap();
        assert!(csv.ends_with("\"\"\"Explain recursion.\"\"\"\n"));
    }
}
