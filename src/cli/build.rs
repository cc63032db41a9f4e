//! Build command handler.
//!
//! Implements the `build` subcommand, which writes the deployable site.

use super::load_page_checked;
use crate::config::AppConfig;
use crate::pipeline::{build_site, exit_codes, SiteOptions};
use anyhow::{Context, Result};

/// Run the build command
pub fn run_build(config: &AppConfig, clean: bool, quiet: bool) -> Result<i32> {
    let Some(page) = load_page_checked(config)? else {
        return Ok(exit_codes::VALIDATION_FAILED);
    };

    let options = SiteOptions {
        out_dir: config.site.out_dir.clone(),
        base_path: config.site.base_path.clone(),
        clean,
    };
    let manifest = build_site(&page, &options)
        .with_context(|| format!("failed to build site in {}", options.out_dir.display()))?;

    if !quiet {
        eprintln!(
            "Built {} techniques into {} (base {})",
            page.catalog.len(),
            manifest.out_dir.display(),
            manifest.base_path
        );
        for file in &manifest.files {
            eprintln!("  {:<40} {:>8} B", file.path.display().to_string(), file.bytes);
        }
    }

    Ok(exit_codes::SUCCESS)
}
