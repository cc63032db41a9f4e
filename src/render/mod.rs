//! Rendering of the cheat sheet.
//!
//! This module provides multiple output formats for the technique list:
//! - HTML: the published page, with table and card views
//! - Markdown: documentation-friendly copy of both views
//! - JSON: structured data for programmatic use
//! - CSV: spreadsheet import
//! - Summary: compact terminal listing
//! - Table: terminal table or cards, chosen by terminal width
//!
//! Every renderer is a pure function of the [`Page`]: rendering the same
//! page twice yields identical output.
//!
//! # Security
//!
//! The `escape` module provides utilities for safe output generation.
//! Technique text may come from a user-supplied catalog and is escaped
//! before being embedded in HTML, Markdown or CSV.

mod csv;
pub mod escape;
mod html;
mod json;
mod markdown;
pub mod styles;
mod summary;
mod types;

pub use csv::CsvRenderer;
pub use html::{render_cards, render_table, HtmlRenderer, CARD_SECTIONS, TABLE_HEADERS};
pub use json::{JsonPage, JsonRenderer};
pub use markdown::MarkdownRenderer;
pub use summary::{render_card_text, SummaryRenderer, TerminalRenderer};
pub use types::{RenderConfig, RenderFormat, StylesheetMode};

use crate::layout::Breakpoint;
use crate::model::{default_links, Catalog, Link, PageMeta};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Everything a renderer needs: the technique list plus page chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub catalog: Catalog,
    pub meta: PageMeta,
    pub links: Vec<Link>,
    pub breakpoint: Breakpoint,
}

impl Page {
    /// Page for `catalog` with the default title, links and breakpoint.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            meta: PageMeta::default(),
            links: default_links(),
            breakpoint: Breakpoint::default(),
        }
    }

    #[must_use]
    pub fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = meta;
        self
    }

    #[must_use]
    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self
    }

    #[must_use]
    pub const fn with_breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = breakpoint;
        self
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

/// Trait for page renderers
pub trait PageRenderer {
    /// Render the page to a string.
    fn render(&self, page: &Page, config: &RenderConfig) -> Result<String, RenderError>;

    /// Write the rendered page to a writer.
    fn write_to(
        &self,
        page: &Page,
        config: &RenderConfig,
        writer: &mut dyn Write,
    ) -> Result<(), RenderError> {
        let rendered = self.render(page, config)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this renderer produces
    fn format(&self) -> RenderFormat;
}

/// Create a renderer for the given format.
///
/// `Auto` must be resolved by the caller first; it falls back to HTML here.
#[must_use]
pub fn create_renderer(format: RenderFormat) -> Box<dyn PageRenderer> {
    match format {
        RenderFormat::Auto | RenderFormat::Html => Box::new(HtmlRenderer::new()),
        RenderFormat::Markdown => Box::new(MarkdownRenderer::new()),
        RenderFormat::Json => Box::new(JsonRenderer::new()),
        RenderFormat::Csv => Box::new(CsvRenderer::new()),
        RenderFormat::Summary => Box::new(SummaryRenderer::new()),
        RenderFormat::Table => Box::new(TerminalRenderer::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_renderer_formats() {
        for format in [
            RenderFormat::Html,
            RenderFormat::Markdown,
            RenderFormat::Json,
            RenderFormat::Csv,
            RenderFormat::Summary,
            RenderFormat::Table,
        ] {
            assert_eq!(create_renderer(format).format(), format);
        }
        assert_eq!(create_renderer(RenderFormat::Auto).format(), RenderFormat::Html);
    }

    #[test]
    fn test_write_to_matches_render() {
        let page = Page::default();
        let config = RenderConfig::default();
        let renderer = create_renderer(RenderFormat::Csv);
        let mut buf = Vec::new();
        renderer.write_to(&page, &config, &mut buf).unwrap();
        assert_eq!(buf, renderer.render(&page, &config).unwrap().into_bytes());
    }
}
