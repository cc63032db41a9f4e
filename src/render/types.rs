//! Render type definitions.

use crate::layout::DEFAULT_TERMINAL_BREAKPOINT_COLS;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for a rendered page
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Auto-detect: terminal table if TTY, HTML otherwise
    #[default]
    Auto,
    /// Standalone HTML page with table and card views
    Html,
    /// Markdown document
    Markdown,
    /// Structured JSON
    Json,
    /// CSV for spreadsheet import
    Csv,
    /// Brief technique list for the terminal
    Summary,
    /// Table or cards for the terminal, chosen by terminal width
    Table,
}

impl RenderFormat {
    /// Guess a format from an output file name.
    #[must_use]
    pub fn from_extension(path: &std::path::Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "html" | "htm" => Some(Self::Html),
            "md" | "markdown" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "txt" => Some(Self::Table),
            _ => None,
        }
    }
}

impl std::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Html => write!(f, "html"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Summary => write!(f, "summary"),
            Self::Table => write!(f, "table"),
        }
    }
}

/// How the HTML page gets its styles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StylesheetMode {
    /// Embed a `<style>` block
    #[default]
    Inline,
    /// Reference an external stylesheet by URL
    Linked(String),
}

/// Options shared by all renderers
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Stylesheet handling for HTML output
    pub stylesheet: StylesheetMode,
    /// Value of `<base href>` for HTML output
    pub base_href: Option<String>,
    /// Terminal width in columns; renderers fall back to 80
    pub terminal_width: Option<u16>,
    /// Minimum terminal width for the table layout
    pub terminal_breakpoint: u16,
    /// Use ANSI colors in terminal output
    pub colored: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            stylesheet: StylesheetMode::Inline,
            base_href: None,
            terminal_width: None,
            terminal_breakpoint: DEFAULT_TERMINAL_BREAKPOINT_COLS,
            colored: true,
        }
    }
}

impl RenderConfig {
    /// Terminal width to lay out against.
    #[must_use]
    pub fn effective_width(&self) -> u16 {
        self.terminal_width.unwrap_or(80)
    }

    /// Config for a page linking an external stylesheet.
    #[must_use]
    pub fn linked(href: impl Into<String>) -> Self {
        Self {
            stylesheet: StylesheetMode::Linked(href.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            RenderFormat::from_extension(Path::new("out/index.HTML")),
            Some(RenderFormat::Html)
        );
        assert_eq!(
            RenderFormat::from_extension(Path::new("sheet.md")),
            Some(RenderFormat::Markdown)
        );
        assert_eq!(RenderFormat::from_extension(Path::new("noext")), None);
    }

    #[test]
    fn test_display_matches_value_names() {
        for format in RenderFormat::value_variants() {
            let parsed = RenderFormat::from_str(&format.to_string(), true).unwrap();
            assert_eq!(parsed, *format);
        }
    }
}
