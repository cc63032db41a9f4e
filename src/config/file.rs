//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use super::validation::normalize_base_path;
use crate::render::RenderFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".prompt-cheatsheet.yaml",
    ".prompt-cheatsheet.yml",
    "prompt-cheatsheet.yaml",
    "prompt-cheatsheet.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/prompt-cheatsheet/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    // 1. Use explicit path if provided
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    // 2. Search current directory
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    // 3. Search git root (if in a repo)
    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    // 4. Search user config directory
    if let Some(path) = user_config_dir().and_then(|dir| find_config_in_dir(&dir)) {
        return Some(path);
    }

    // 5. Search home directory
    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Per-user configuration directory, e.g. `~/.config/prompt-cheatsheet`.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("prompt-cheatsheet"))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }

        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    // An empty file means "all defaults"
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load the config for a run.
///
/// An explicit path must exist and parse; its errors are returned. A
/// discovered file that fails to load is skipped with a warning and the
/// defaults are used instead.
pub fn load_or_default(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    if let Some(path) = explicit_path {
        let config = load_config_file(path)?.relative_to(path);
        tracing::debug!("Loaded config from {}", path.display());
        return Ok((config, Some(path.to_path_buf())));
    }

    let loaded = discover_config_file(None).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config.relative_to(&path), Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    );
    Ok(loaded)
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override. This is how CLI
    /// args are layered over file config.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        // Site config
        if other.site.title != defaults.site.title {
            self.site.title.clone_from(&other.site.title);
        }
        if other.site.tagline != defaults.site.tagline {
            self.site.tagline.clone_from(&other.site.tagline);
        }
        if other.site.base_path != defaults.site.base_path {
            self.site.base_path.clone_from(&other.site.base_path);
        }
        if other.site.out_dir != defaults.site.out_dir {
            self.site.out_dir.clone_from(&other.site.out_dir);
        }

        // Output config - only override if explicitly set
        if other.output.format != RenderFormat::Auto {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        // Layout config
        if other.layout.breakpoint_px != defaults.layout.breakpoint_px {
            self.layout.breakpoint_px = other.layout.breakpoint_px;
        }
        if other.layout.terminal_columns_breakpoint != defaults.layout.terminal_columns_breakpoint
        {
            self.layout.terminal_columns_breakpoint = other.layout.terminal_columns_breakpoint;
        }

        // Links config
        if other.links != defaults.links {
            self.links.clone_from(&other.links);
        }

        if other.catalog.is_some() {
            self.catalog.clone_from(&other.catalog);
        }
    }

    /// Load from file and merge with CLI overrides.
    ///
    /// The merged base path is normalized, so `docs` becomes `/docs/`.
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> Result<(Self, Option<PathBuf>), ConfigFileError> {
        let (mut config, loaded_from) = load_or_default(config_path)?;
        config.merge(cli_overrides);
        config.site.base_path = normalize_base_path(&config.site.base_path);
        Ok((config, loaded_from))
    }

    /// Resolve a relative `catalog` path against the directory of the
    /// config file it was read from.
    #[must_use]
    fn relative_to(mut self, config_path: &Path) -> Self {
        let dir = config_path.parent().unwrap_or_else(|| Path::new(""));
        if let Some(catalog) = self.catalog.take() {
            self.catalog = Some(if catalog.is_relative() {
                dir.join(catalog)
            } else {
                catalog
            });
        }
        self
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# Prompt cheat sheet configuration
# Place this file at .prompt-cheatsheet.yaml in your project root or ~/.config/prompt-cheatsheet/

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r#"# Prompt Cheat Sheet Configuration File
# ======================================
#
# Place it at:
#   - .prompt-cheatsheet.yaml in your project root
#   - ~/.config/prompt-cheatsheet/prompt-cheatsheet.yaml for global config
#
# CLI arguments always override file settings.

# Page text and site build
site:
  title: Prompt Engineering Cheat Sheet
  # tagline: A concise collection of prompt engineering techniques ...
  # Path prefix the site is served under; must start and end with "/".
  # An absolute URL such as https://example.github.io/cheats/ also works.
  base_path: /prompt-engineering-cheatsheet/
  out_dir: dist

# Output configuration for `render`
output:
  # Format: auto, html, markdown, json, csv, summary, table
  format: auto
  # Output file path (omit for stdout)
  # file: cheatsheet.html
  # Disable colored output
  no_color: false

# Responsive layout
layout:
  # Viewport width (CSS px) at which the table replaces the cards
  breakpoint_px: 1024
  # Terminal width (columns) at which the terminal table replaces the cards
  terminal_columns_breakpoint: 100

# Footer links
links:
  book_url: https://www.amazon.es/AI-Engineering-Building-Applications-Foundation/dp/1098166302/
  book_label: Prompt techniques extracted from the book 'AI Engineer'
  source_url: https://github.com/fsystemweb/prompt-engineering-cheatsheet
  source_label: Suggest a technique

# Technique catalog (YAML or JSON); omit to use the built-in techniques
# catalog: ./techniques.yaml
"#
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Validatable;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".prompt-cheatsheet.yaml");
        std::fs::write(&config_path, "layout:\n  breakpoint_px: 768\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_dotfile() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("prompt-cheatsheet.yml"), "").unwrap();
        std::fs::write(tmp.path().join(".prompt-cheatsheet.yml"), "").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(tmp.path().join(".prompt-cheatsheet.yml")));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r#"
site:
  base_path: /cheats/
output:
  format: markdown
layout:
  breakpoint_px: 768
"#;
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.site.base_path, "/cheats/");
        assert_eq!(config.output.format, RenderFormat::Markdown);
        assert_eq!(config.layout.breakpoint_px, 768);
        assert_eq!(config.site.title, "Prompt Engineering Cheat Sheet");
    }

    #[test]
    fn test_load_empty_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("empty.yaml");
        std::fs::write(&config_path, "\n").unwrap();

        assert_eq!(load_config_file(&config_path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "layout:\n  breakpoint_px: wide\n").unwrap();

        let result = load_config_file(&config_path);
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let result = load_or_default(Some(Path::new("/nonexistent/deploy.yaml")));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_explicit_unparseable_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("deploy.yaml");
        std::fs::write(&config_path, "site:\n  title: [oops\n").unwrap();

        let result = AppConfig::from_file_with_overrides(Some(&config_path), &AppConfig::default());
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("deploy.yaml");
        std::fs::write(&config_path, "site:\n  base_path: /deploy/\n").unwrap();

        let (config, loaded_from) = load_or_default(Some(&config_path)).unwrap();
        assert_eq!(config.site.base_path, "/deploy/");
        assert_eq!(loaded_from, Some(config_path));
    }

    #[test]
    fn test_relative_catalog_resolves_against_config_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("deploy.yaml");
        std::fs::write(&config_path, "catalog: catalogs/techniques.yaml\n").unwrap();

        let (config, _) = load_or_default(Some(&config_path)).unwrap();
        assert_eq!(
            config.catalog,
            Some(tmp.path().join("catalogs/techniques.yaml"))
        );
    }

    #[test]
    fn test_absolute_catalog_is_kept() {
        let config = AppConfig::builder()
            .catalog(Some(PathBuf::from("/srv/techniques.yaml")))
            .build()
            .relative_to(Path::new("/etc/prompt-cheatsheet.yaml"));
        assert_eq!(config.catalog, Some(PathBuf::from("/srv/techniques.yaml")));
    }

    #[test]
    fn test_cli_catalog_is_not_rebased() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("deploy.yaml");
        std::fs::write(&config_path, "catalog: from-file.yaml\n").unwrap();

        let overrides = AppConfig::builder()
            .catalog(Some(PathBuf::from("from-cli.yaml")))
            .build();
        let (config, _) = AppConfig::from_file_with_overrides(Some(&config_path), &overrides).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("from-cli.yaml")));
    }

    #[test]
    fn test_overrides_normalize_base_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("deploy.yaml");
        std::fs::write(&config_path, "site:\n  base_path: docs\n").unwrap();

        let (config, _) =
            AppConfig::from_file_with_overrides(Some(&config_path), &AppConfig::default()).unwrap();
        assert_eq!(config.site.base_path, "/docs/");
        assert!(config.is_valid());
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder()
            .base_path("/from-file/")
            .breakpoint_px(900)
            .build();
        let overrides = AppConfig::builder()
            .output_format(RenderFormat::Json)
            .breakpoint_px(1200)
            .no_color(true)
            .build();

        base.merge(&overrides);

        assert_eq!(base.site.base_path, "/from-file/");
        assert_eq!(base.layout.breakpoint_px, 1200);
        assert_eq!(base.output.format, RenderFormat::Json);
        assert!(base.output.no_color);
    }

    #[test]
    fn test_merge_defaults_keep_base() {
        let mut base = AppConfig::builder().title("Mine").build();
        base.merge(&AppConfig::default());
        assert_eq!(base.site.title, "Mine");
    }

    #[test]
    fn test_generate_example_config() {
        let example = generate_example_config();
        assert!(example.contains("site:"));
        assert!(example.contains("breakpoint_px: 1024"));
    }

    #[test]
    fn test_full_example_config_parses_to_defaults() {
        let parsed: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(parsed, AppConfig::default());
        assert!(parsed.is_valid());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "layout:\n  breakpoint_px: 800").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
