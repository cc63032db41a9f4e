//! Pipeline orchestration for cheat sheet commands.
//!
//! This module provides shared load → render → output logic, reducing
//! duplication across CLI command handlers.

mod output;
mod site;

pub use output::{auto_detect_format, should_use_color, terminal_width, write_output, OutputTarget};
pub use site::{
    build_site, hashed_stylesheet_name, SiteManifest, SiteOptions, WrittenFile,
};

use crate::config::AppConfig;
use crate::model::Catalog;
use crate::render::Page;
use std::path::Path;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a catalog file
    #[error("Loading catalog {path} failed: {source}")]
    CatalogFailed {
        path: String,
        #[source]
        source: crate::error::CheatsheetError,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Catalog validation failed or a lookup found nothing
    pub const VALIDATION_FAILED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Load the catalog at `path`, or the built-in one when `path` is `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, PipelineError> {
    match path {
        Some(path) => {
            tracing::info!("Loading catalog: {}", path.display());
            Catalog::load(path).map_err(|source| PipelineError::CatalogFailed {
                path: path.display().to_string(),
                source,
            })
        }
        None => {
            tracing::debug!("Using built-in catalog");
            Ok(Catalog::builtin())
        }
    }
}

/// Load the configured catalog and assemble the page around it.
pub fn load_page(config: &AppConfig) -> Result<Page, PipelineError> {
    let catalog = load_catalog(config.catalog.as_deref())?;
    Ok(config.page(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::VALIDATION_FAILED, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_load_builtin_catalog() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn test_load_missing_catalog() {
        let err = load_catalog(Some(Path::new("/nonexistent/techniques.yaml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/techniques.yaml"));
    }

    #[test]
    fn test_load_page_from_config_catalog() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("techniques.yaml");
        std::fs::write(
            &path,
            "- id: 1\n  name: Chain-of-Thought\n  definition: d\n  rationale: r\n  example: e\n",
        )
        .unwrap();

        let config = AppConfig::builder().catalog(Some(path)).build();
        let page = load_page(&config).unwrap();
        assert_eq!(page.catalog.len(), 1);
    }
}
