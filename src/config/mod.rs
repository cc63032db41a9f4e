//! Configuration module for prompt-cheatsheet.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use prompt_cheatsheet::config::AppConfig;
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .base_path("/cheats/")
//!     .breakpoint_px(768)
//!     .build();
//!
//! // Load from file
//! use prompt_cheatsheet::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None)?;
//! ```
//!
//! # Configuration File
//!
//! Place a `.prompt-cheatsheet.yaml` file in your project root or
//! `~/.config/prompt-cheatsheet/`:
//!
//! ```yaml
//! site:
//!   base_path: /cheats/
//! layout:
//!   breakpoint_px: 768
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{DEFAULT_BASE_PATH, DEFAULT_OUT_DIR};
pub use types::{AppConfig, AppConfigBuilder, LayoutConfig, LinksConfig, OutputConfig, SiteConfig};
pub use validation::{check_base_path, normalize_base_path, ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, user_config_dir, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.prompt-cheatsheet.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        let properties = &value["properties"];
        for section in ["site", "output", "layout", "links", "catalog"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
