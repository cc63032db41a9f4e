//! JSON page generator.

use super::{Page, PageRenderer, RenderConfig, RenderError, RenderFormat};
use crate::model::{Link, TechniqueRecord};
use serde::Serialize;

/// Serialized shape of a page.
#[derive(Debug, Serialize)]
pub struct JsonPage<'a> {
    pub title: &'a str,
    pub tagline: &'a str,
    pub breakpoint_px: u32,
    pub technique_count: usize,
    pub techniques: &'a [TechniqueRecord],
    pub links: &'a [Link],
}

impl<'a> From<&'a Page> for JsonPage<'a> {
    fn from(page: &'a Page) -> Self {
        Self {
            title: &page.meta.title,
            tagline: &page.meta.tagline,
            breakpoint_px: page.breakpoint.min_width,
            technique_count: page.catalog.len(),
            techniques: page.catalog.records(),
            links: &page.links,
        }
    }
}

/// JSON renderer
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Emit single-line JSON.
    #[must_use]
    pub const fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for JsonRenderer {
    fn render(&self, page: &Page, _config: &RenderConfig) -> Result<String, RenderError> {
        let doc = JsonPage::from(page);
        let json = if self.pretty {
            serde_json::to_string_pretty(&doc)
        } else {
            serde_json::to_string(&doc)
        };
        json.map_err(|e| RenderError::Serialization(e.to_string()))
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let page = Page::default();
        let json = JsonRenderer::new()
            .render(&page, &RenderConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["technique_count"], 9);
        assert_eq!(value["breakpoint_px"], 1024);
        let techniques = value["techniques"].as_array().unwrap();
        assert_eq!(techniques.len(), 9);
        assert_eq!(techniques[0]["id"], 1);
        assert_eq!(techniques[0]["name"], "Role Assignment");
        assert_eq!(value["links"][0]["kind"], "attribution");
    }

    #[test]
    fn test_compact_is_single_line() {
        let json = JsonRenderer::new()
            .compact()
            .render(&Page::default(), &RenderConfig::default())
            .unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_example_newlines_survive() {
        let json = JsonRenderer::new()
            .render(&Page::default(), &RenderConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let example = value["techniques"][1]["example"].as_str().unwrap();
        assert!(example.contains("\nA: Hola\n"));
    }
}
