//! Output handling for rendered pages.
//!
//! Provides utilities for auto-detecting output format and writing output.

use crate::render::RenderFormat;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Target for output - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Check if output is to a terminal
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Auto-detect the output format based on TTY and output target
///
/// Terminals get the terminal table. Files get the format matching their
/// extension, and anything else gets the HTML page.
#[must_use]
pub fn auto_detect_format(format: RenderFormat, target: &OutputTarget) -> RenderFormat {
    match format {
        RenderFormat::Auto => match target {
            OutputTarget::File(path) => {
                RenderFormat::from_extension(path).unwrap_or(RenderFormat::Html)
            }
            OutputTarget::Stdout if target.is_terminal() => RenderFormat::Table,
            OutputTarget::Stdout => RenderFormat::Html,
        },
        other => other,
    }
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Width of the attached terminal in columns.
///
/// Reads `COLUMNS`, which shells export for interactive sessions.
#[must_use]
pub fn terminal_width() -> Option<u16> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|&cols| cols > 0)
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            if content.ends_with('\n') {
                print!("{content}");
            } else {
                println!("{content}");
            }
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("Output written to {}", path.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_option_none() {
        let target = OutputTarget::from_option(None);
        assert_eq!(target, OutputTarget::Stdout);
    }

    #[test]
    fn test_output_target_from_option_some() {
        let path = PathBuf::from("/tmp/cheatsheet.html");
        let target = OutputTarget::from_option(Some(path.clone()));
        assert_eq!(target, OutputTarget::File(path));
    }

    #[test]
    fn test_auto_detect_format_non_auto() {
        let target = OutputTarget::Stdout;
        assert_eq!(
            auto_detect_format(RenderFormat::Json, &target),
            RenderFormat::Json
        );
        assert_eq!(
            auto_detect_format(RenderFormat::Csv, &target),
            RenderFormat::Csv
        );
    }

    #[test]
    fn test_auto_detect_format_file_target() {
        let md = OutputTarget::File(PathBuf::from("/tmp/cheatsheet.md"));
        assert_eq!(
            auto_detect_format(RenderFormat::Auto, &md),
            RenderFormat::Markdown
        );
        let unknown = OutputTarget::File(PathBuf::from("/tmp/cheatsheet"));
        assert_eq!(
            auto_detect_format(RenderFormat::Auto, &unknown),
            RenderFormat::Html
        );
    }

    #[test]
    fn test_write_output_to_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");
        write_output("id\n", &OutputTarget::File(path.clone()), true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "id\n");
    }

    #[test]
    fn test_should_use_color_with_flag() {
        assert!(!should_use_color(true));
    }

    #[test]
    fn test_should_use_color_without_flag() {
        // This depends on NO_COLOR env var
        let expected = std::env::var("NO_COLOR").is_err();
        assert_eq!(should_use_color(false), expected);
    }
}
