//! **A prompt engineering cheat sheet, rendered as a responsive static page.**
//!
//! `prompt-cheatsheet` holds an ordered catalog of prompt engineering
//! techniques and renders it for quick reference. Each technique has a name,
//! a one-line definition, the reason it works, and a concrete example prompt.
//!
//! ## Key Features
//!
//! - **Responsive page**: a five-column table on wide viewports and stacked
//!   cards on narrow ones, switched by a single CSS breakpoint.
//! - **Static site build**: writes a directory ready for GitHub Pages with a
//!   content-hashed stylesheet served under a configurable base path.
//! - **Alternate formats**: Markdown, JSON, CSV and terminal output from the
//!   same catalog.
//! - **Custom catalogs**: load techniques from YAML or JSON, checked against
//!   the catalog invariants before anything is rendered.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`TechniqueRecord`] and the ordered, validated [`Catalog`].
//! - **[`layout`]**: the [`Breakpoint`] that decides which view is visible.
//! - **[`render`]**: [`render_table`], [`render_cards`] and the
//!   [`PageRenderer`] implementations for every output format.
//! - **[`pipeline`]**: catalog loading, output handling and [`build_site`].
//! - **[`config`]**: YAML configuration with discovery and validation.
//!
//! ## Getting Started
//!
//! ```no_run
//! use prompt_cheatsheet::{render_cards, render_table, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let table = render_table(catalog.records());
//! let cards = render_cards(catalog.records());
//! assert_eq!(table.matches("<tr class=\"row-").count(), catalog.len());
//! assert_eq!(cards.matches("<article").count(), catalog.len());
//! ```
//!
//! ### Building the site
//!
//! ```no_run
//! use prompt_cheatsheet::pipeline::{build_site, SiteOptions};
//! use prompt_cheatsheet::render::Page;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manifest = build_site(&Page::default(), &SiteOptions::default())?;
//!     println!("stylesheet: {}", manifest.stylesheet_href);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unused_self
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod render;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use error::{CheatsheetError, ErrorContext, Result};
pub use layout::{Breakpoint, ViewKind};
pub use model::{Catalog, CatalogViolation, Link, LinkKind, PageMeta, TechniqueRecord};
pub use pipeline::{build_site, SiteManifest, SiteOptions};
pub use render::{
    create_renderer, render_cards, render_table, Page, PageRenderer, RenderConfig, RenderFormat,
};
