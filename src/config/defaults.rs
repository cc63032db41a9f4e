//! Default values for prompt-cheatsheet configuration.

use super::types::{AppConfig, LayoutConfig, LinksConfig, OutputConfig, SiteConfig};
use crate::layout::{DEFAULT_BREAKPOINT_PX, DEFAULT_TERMINAL_BREAKPOINT_COLS};
use crate::model::{
    DEFAULT_BOOK_LABEL, DEFAULT_BOOK_URL, DEFAULT_SOURCE_LABEL, DEFAULT_SOURCE_URL, DEFAULT_TAGLINE,
    DEFAULT_TITLE,
};
use crate::render::RenderFormat;
use std::path::PathBuf;

/// Path prefix the site is served under (GitHub Pages project path).
pub const DEFAULT_BASE_PATH: &str = "/prompt-engineering-cheatsheet/";

/// Directory the site build writes to.
pub const DEFAULT_OUT_DIR: &str = "dist";

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: RenderFormat::Auto,
            file: None,
            no_color: false,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            terminal_columns_breakpoint: DEFAULT_TERMINAL_BREAKPOINT_COLS,
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            book_url: DEFAULT_BOOK_URL.to_string(),
            book_label: DEFAULT_BOOK_LABEL.to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Whether every section still holds its default value.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.site == SiteConfig::default()
            && self.output == OutputConfig::default()
            && self.layout == LayoutConfig::default()
            && self.links == LinksConfig::default()
            && self.catalog.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Validatable;

    #[test]
    fn test_defaults_match_published_site() {
        let config = AppConfig::default();
        assert_eq!(config.site.base_path, "/prompt-engineering-cheatsheet/");
        assert_eq!(config.site.out_dir, PathBuf::from("dist"));
        assert_eq!(config.layout.breakpoint_px, 1024);
        assert_eq!(config.output.format, RenderFormat::Auto);
        assert!(config.is_default());
    }

    #[test]
    fn test_published_url_is_a_valid_base() {
        let config = AppConfig::builder()
            .base_path("https://fsystemweb.github.io/prompt-engineering-cheatsheet/")
            .build();
        assert!(config.is_valid());
        assert!(!config.is_default());
    }

    #[test]
    fn test_is_default_detects_changes() {
        let mut config = AppConfig::default();
        config.layout.breakpoint_px = 768;
        assert!(!config.is_default());
    }
}
