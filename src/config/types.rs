//! Configuration types for prompt-cheatsheet.
//!
//! Provides the file-backed settings for rendering and site builds.

use crate::layout::Breakpoint;
use crate::model::{Catalog, Link, LinkKind, PageMeta};
use crate::render::{Page, RenderFormat};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// Every section falls back to its defaults, so a config file only needs
/// the keys it changes. CLI arguments are merged on top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Page text and site build settings
    pub site: SiteConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Responsive layout thresholds
    pub layout: LayoutConfig,
    /// Footer links
    pub links: LinksConfig,
    /// Technique catalog to use instead of the built-in list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Breakpoint separating the card and table views.
    #[must_use]
    pub const fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.layout.breakpoint_px)
    }

    /// Page title and tagline.
    #[must_use]
    pub fn page_meta(&self) -> PageMeta {
        PageMeta {
            title: self.site.title.clone(),
            tagline: self.site.tagline.clone(),
        }
    }

    /// Footer links, attribution first.
    #[must_use]
    pub fn footer_links(&self) -> Vec<Link> {
        vec![
            Link::new(
                LinkKind::Attribution,
                &self.links.book_label,
                &self.links.book_url,
            ),
            Link::new(
                LinkKind::Source,
                &self.links.source_label,
                &self.links.source_url,
            ),
        ]
    }

    /// Assemble the page for `catalog` from this configuration.
    #[must_use]
    pub fn page(&self, catalog: Catalog) -> Page {
        Page::new(catalog)
            .with_meta(self.page_meta())
            .with_links(self.footer_links())
            .with_breakpoint(self.breakpoint())
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for `AppConfig`.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the page title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.site.title = title.into();
        self
    }

    /// Set the page tagline.
    pub fn tagline(mut self, tagline: impl Into<String>) -> Self {
        self.config.site.tagline = tagline.into();
        self
    }

    /// Set the site base path.
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.config.site.base_path = base_path.into();
        self
    }

    /// Set the site output directory.
    pub fn out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.config.site.out_dir = out_dir.into();
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: RenderFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the viewport breakpoint in CSS pixels.
    pub const fn breakpoint_px(mut self, px: u32) -> Self {
        self.config.layout.breakpoint_px = px;
        self
    }

    /// Set the terminal column breakpoint.
    pub const fn terminal_columns_breakpoint(mut self, columns: u16) -> Self {
        self.config.layout.terminal_columns_breakpoint = columns;
        self
    }

    /// Use a catalog file instead of the built-in techniques.
    pub fn catalog(mut self, path: Option<PathBuf>) -> Self {
        self.config.catalog = path;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Page text and site build settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SiteConfig {
    /// Page heading
    pub title: String,
    /// Intro text under the heading
    pub tagline: String,
    /// Path or absolute URL the site is served under; must end with `/`
    pub base_path: String,
    /// Directory the site build writes to
    pub out_dir: PathBuf,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: RenderFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Responsive layout thresholds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum viewport width in CSS pixels for the table view
    pub breakpoint_px: u32,
    /// Minimum terminal width in columns for the terminal table
    pub terminal_columns_breakpoint: u16,
}

/// Footer links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LinksConfig {
    /// Attribution link target
    pub book_url: String,
    /// Attribution link text
    pub book_label: String,
    /// Suggestion link target
    pub source_url: String,
    /// Suggestion link text
    pub source_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .title("Cheats")
            .base_path("/")
            .breakpoint_px(768)
            .output_format(RenderFormat::Markdown)
            .no_color(true)
            .build();

        assert_eq!(config.site.title, "Cheats");
        assert_eq!(config.site.base_path, "/");
        assert_eq!(config.layout.breakpoint_px, 768);
        assert_eq!(config.output.format, RenderFormat::Markdown);
        assert!(config.output.no_color);
    }

    #[test]
    fn test_default_page_matches_page_default() {
        let page = AppConfig::default().page(Catalog::builtin());
        assert_eq!(page, Page::default());
    }

    #[test]
    fn test_page_uses_config() {
        let config = AppConfig::builder().title("Team notes").breakpoint_px(900).build();
        let page = config.page(Catalog::builtin());
        assert_eq!(page.meta.title, "Team notes");
        assert_eq!(page.breakpoint.min_width, 900);
        assert_eq!(page.links[0].kind, LinkKind::Attribution);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("layout:\n  breakpoint_px: 640\n").unwrap();
        assert_eq!(config.layout.breakpoint_px, 640);
        assert_eq!(config.layout.terminal_columns_breakpoint, 100);
        assert_eq!(config.site, SiteConfig::default());
    }
}
