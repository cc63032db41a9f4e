//! Unified error types for prompt-cheatsheet.
//!
//! This module provides the error hierarchy for the library, with context
//! chaining for debugging and user-friendly messages.

use crate::model::CatalogViolation;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for prompt-cheatsheet operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CheatsheetError {
    /// Errors while loading or checking a catalog
    #[error("Catalog error: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors during rendering
    #[error("Rendering failed: {context}")]
    Render {
        context: String,
        #[source]
        source: RenderErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("{0}")]
    Invalid(ViolationList),

    #[error("Unsupported catalog format: '{0}' (expected json, yaml or yml)")]
    UnsupportedFormat(String),

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),
}

/// Specific render error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RenderErrorKind {
    #[error("Formatting failed: {0}")]
    Format(String),

    #[error("JSON serialization failed: {0}")]
    JsonSerialization(String),
}

/// Catalog violations carried by [`CatalogErrorKind::Invalid`].
#[derive(Debug, Clone, Default)]
pub struct ViolationList(pub Vec<CatalogViolation>);

impl From<Vec<CatalogViolation>> for ViolationList {
    fn from(violations: Vec<CatalogViolation>) -> Self {
        Self(violations)
    }
}

impl std::fmt::Display for ViolationList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} invariant violation(s)", self.0.len())?;
        for violation in &self.0 {
            write!(f, "; {violation}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for prompt-cheatsheet operations
pub type Result<T> = std::result::Result<T, CheatsheetError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl CheatsheetError {
    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create a render error with context
    pub fn render(context: impl Into<String>, source: RenderErrorKind) -> Self {
        Self::Render {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Catalog violations, if this error carries any.
    #[must_use]
    pub fn violations(&self) -> Option<&[CatalogViolation]> {
        match self {
            Self::Catalog {
                source: CatalogErrorKind::Invalid(list),
                ..
            } => Some(&list.0),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for CheatsheetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CheatsheetError {
    fn from(err: serde_json::Error) -> Self {
        Self::catalog(
            "JSON deserialization",
            CatalogErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for CheatsheetError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::catalog(
            "YAML deserialization",
            CatalogErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

impl From<crate::render::RenderError> for CheatsheetError {
    fn from(err: crate::render::RenderError) -> Self {
        use crate::render::RenderError;

        let kind = match err {
            RenderError::IoError(e) => return Self::from(e),
            RenderError::Serialization(msg) => RenderErrorKind::JsonSerialization(msg),
            RenderError::FormatError(e) => RenderErrorKind::Format(e.to_string()),
        };
        Self::render("renderer", kind)
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
///
/// ```ignore
/// use prompt_cheatsheet::error::ErrorContext;
///
/// let catalog = Catalog::from_yaml_str(&content)
///     .with_context(|| format!("loading catalog {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<CheatsheetError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: CheatsheetError, new_ctx: &str) -> CheatsheetError {
    match err {
        CheatsheetError::Catalog {
            context: existing,
            source,
        } => CheatsheetError::Catalog {
            context: chain_context(new_ctx, &existing),
            source,
        },
        CheatsheetError::Render {
            context: existing,
            source,
        } => CheatsheetError::Render {
            context: chain_context(new_ctx, &existing),
            source,
        },
        CheatsheetError::Io {
            path,
            message,
            source,
        } => CheatsheetError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        CheatsheetError::Config(msg) => CheatsheetError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_chains() {
        let result: Result<()> = Err(CheatsheetError::config("bad base path"));
        let err = result.context("building site").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration: building site: bad base path"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = CheatsheetError::io("/tmp/catalog.yaml", io);
        match err {
            CheatsheetError::Io { path, .. } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/catalog.yaml")));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_violations_accessor() {
        let violation = CatalogViolation {
            field: "techniques[0].name".to_string(),
            message: "must not be empty".to_string(),
        };
        let err = CheatsheetError::catalog(
            "catalog failed validation",
            CatalogErrorKind::Invalid(vec![violation.clone()].into()),
        );
        assert_eq!(err.violations(), Some(&[violation][..]));
        assert!(CheatsheetError::config("x").violations().is_none());
    }

    #[test]
    fn test_violation_list_display() {
        let list = ViolationList(vec![CatalogViolation {
            field: "techniques".to_string(),
            message: "empty".to_string(),
        }]);
        assert_eq!(list.to_string(), "1 invariant violation(s); techniques: empty");
    }
}
