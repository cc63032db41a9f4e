//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod build;
mod render;
mod show;
mod validate;

pub use build::run_build;
pub use render::run_render;
pub use show::run_show;
pub use validate::{run_validate, ValidationReport};

use crate::config::{AppConfig, Validatable};
use crate::pipeline::{load_page, should_use_color, terminal_width, PipelineError};
use crate::render::{Page, RenderConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// Resolve the configuration for a command.
///
/// Loads the config file (an explicit `config_path` must load), layers the
/// CLI `overrides` on top and rejects the result if any field is invalid.
pub fn effective_config(config_path: Option<&Path>, overrides: &AppConfig) -> Result<AppConfig> {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(config_path, overrides)
        .context("cannot load configuration")?;
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration:\n  {}", details.join("\n  "));
    }
    Ok(config)
}

/// Load the configured page.
///
/// Returns `Ok(None)` after printing the violations when the catalog
/// breaks an invariant, so callers can exit with the validation code.
fn load_page_checked(config: &AppConfig) -> Result<Option<Page>> {
    match load_page(config) {
        Ok(page) => Ok(Some(page)),
        Err(PipelineError::CatalogFailed { path, source }) if source.violations().is_some() => {
            eprintln!("Catalog {path} is invalid:");
            for violation in source.violations().unwrap_or_default() {
                eprintln!("  - {violation}");
            }
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Render options for output going to the terminal.
fn terminal_render_config(config: &AppConfig, is_terminal: bool) -> RenderConfig {
    RenderConfig {
        terminal_width: terminal_width(),
        terminal_breakpoint: config.layout.terminal_columns_breakpoint,
        colored: is_terminal && should_use_color(config.output.no_color),
        ..RenderConfig::default()
    }
}
