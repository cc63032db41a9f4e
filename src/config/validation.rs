//! Configuration validation for prompt-cheatsheet.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, LayoutConfig, LinksConfig, OutputConfig, SiteConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Check a site base path.
///
/// Accepts a path starting and ending with `/`, or an absolute `http(s)`
/// URL ending with `/`. Returns the reason on failure.
pub fn check_base_path(base: &str) -> Result<(), String> {
    if base.starts_with("http://") || base.starts_with("https://") {
        let host = base.split("://").nth(1).unwrap_or_default();
        if host.is_empty() || host.starts_with('/') {
            return Err(format!("URL '{base}' has no host"));
        }
    } else if !base.starts_with('/') {
        return Err(format!(
            "'{base}' must start with '/' or be an absolute http(s) URL"
        ));
    }

    if !base.ends_with('/') {
        return Err(format!("'{base}' must end with '/'"));
    }
    if base.chars().any(char::is_whitespace) {
        return Err(format!("'{base}' must not contain whitespace"));
    }
    Ok(())
}

/// Normalize a base path as typed by a user.
///
/// Adds the leading and trailing `/` to bare paths (`docs` becomes
/// `/docs/`) and a trailing `/` to URLs. The result still has to pass
/// [`check_base_path`].
#[must_use]
pub fn normalize_base_path(base: &str) -> String {
    let base = base.trim();
    let mut normalized = if base.starts_with("http://") || base.starts_with("https://") {
        base.to_string()
    } else {
        format!("/{}", base.trim_start_matches('/'))
    };
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    rest.is_some_and(|host| !host.is_empty() && !host.chars().any(char::is_whitespace))
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.site.validate());
        errors.extend(self.output.validate());
        errors.extend(self.layout.validate());
        errors.extend(self.links.validate());

        if let Some(ref catalog) = self.catalog {
            if catalog.as_os_str().is_empty() {
                errors.push(ConfigError::new("catalog", "Catalog path must not be empty"));
            }
        }

        errors
    }
}

impl Validatable for SiteConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(ConfigError::new("site.title", "Title must not be empty"));
        }
        if let Err(message) = check_base_path(&self.base_path) {
            errors.push(ConfigError::new("site.base_path", message));
        }
        if self.out_dir.as_os_str().is_empty() {
            errors.push(ConfigError::new(
                "site.out_dir",
                "Output directory must not be empty",
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

impl Validatable for LayoutConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.breakpoint_px == 0 {
            errors.push(ConfigError::new(
                "layout.breakpoint_px",
                "Breakpoint must be greater than 0",
            ));
        }
        if self.terminal_columns_breakpoint == 0 {
            errors.push(ConfigError::new(
                "layout.terminal_columns_breakpoint",
                "Terminal breakpoint must be greater than 0",
            ));
        }
        errors
    }
}

impl Validatable for LinksConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (field, url) in [
            ("links.book_url", &self.book_url),
            ("links.source_url", &self.source_url),
        ] {
            if !is_http_url(url) {
                errors.push(ConfigError::new(
                    field,
                    format!("'{url}' is not an absolute http(s) URL"),
                ));
            }
        }
        for (field, label) in [
            ("links.book_label", &self.book_label),
            ("links.source_label", &self.source_label),
        ] {
            if label.trim().is_empty() {
                errors.push(ConfigError::new(field, "Link text must not be empty"));
            }
        }
        errors
    }
}
