//! Render command handler.
//!
//! Implements the `render` subcommand: one document in one format, written
//! to stdout or a file.

use super::{load_page_checked, terminal_render_config};
use crate::config::AppConfig;
use crate::pipeline::{auto_detect_format, exit_codes, write_output, OutputTarget};
use crate::render::create_renderer;
use anyhow::{Context, Result};

/// Run the render command
pub fn run_render(config: &AppConfig, quiet: bool) -> Result<i32> {
    let Some(page) = load_page_checked(config)? else {
        return Ok(exit_codes::VALIDATION_FAILED);
    };

    let target = OutputTarget::from_option(config.output.file.clone());
    let format = auto_detect_format(config.output.format, &target);
    let render_config = terminal_render_config(config, target.is_terminal());
    tracing::debug!("Rendering {} techniques as {format}", page.catalog.len());

    let output = create_renderer(format)
        .render(&page, &render_config)
        .with_context(|| format!("failed to render {format} output"))?;
    write_output(&output, &target, quiet)?;

    Ok(exit_codes::SUCCESS)
}
