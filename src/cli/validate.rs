//! Validate command handler.
//!
//! Implements the `validate` subcommand, which checks a catalog against
//! the technique list invariants and reports every violation found.

use crate::model::{Catalog, CatalogViolation};
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Outcome of validating one catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Catalog path, or `built-in`
    pub source: String,
    pub valid: bool,
    /// Number of techniques, when the catalog parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technique_count: Option<usize>,
    pub violations: Vec<CatalogViolation>,
}

impl ValidationReport {
    /// Validate the catalog at `path`, or the built-in catalog.
    ///
    /// Invariant violations end up in the report. Read and parse failures
    /// are returned as errors.
    pub fn check(path: Option<&Path>) -> crate::error::Result<Self> {
        let source = path.map_or_else(|| "built-in".to_string(), |p| p.display().to_string());

        let loaded = match path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        };
        let (technique_count, violations) = match loaded {
            Ok(catalog) => (Some(catalog.len()), catalog.validate()),
            Err(err) => match err.violations() {
                Some(violations) => (None, violations.to_vec()),
                None => return Err(err),
            },
        };

        Ok(Self {
            source,
            valid: violations.is_empty(),
            technique_count,
            violations,
        })
    }

    fn to_text(&self) -> String {
        if self.valid {
            return format!(
                "✓ {}: {} techniques, all invariants hold",
                self.source,
                self.technique_count.unwrap_or_default()
            );
        }

        let mut lines = vec![format!(
            "✗ {}: {} violation(s)",
            self.source,
            self.violations.len()
        )];
        lines.extend(self.violations.iter().map(|v| format!("  - {v}")));
        lines.join("\n")
    }
}

/// Run the validate command
pub fn run_validate(catalog: Option<&Path>, json: bool) -> Result<i32> {
    let report = ValidationReport::check(catalog)?;

    let output = if json {
        serde_json::to_string_pretty(&report)?
    } else {
        report.to_text()
    };
    write_output(&output, &OutputTarget::Stdout, false)?;

    Ok(if report.valid {
        exit_codes::SUCCESS
    } else {
        exit_codes::VALIDATION_FAILED
    })
}
