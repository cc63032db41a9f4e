//! Static site build.
//!
//! Writes the deployable directory for a static host such as GitHub Pages:
//!
//! ```text
//! <out_dir>/
//!   index.html                 page linking the hashed stylesheet
//!   404.html                   link back to the base path
//!   techniques.json            machine-readable copy of the page
//!   .nojekyll                  keeps GitHub Pages from running Jekyll
//!   assets/style.<hash>.css    stylesheet, named by its xxh3 hash
//! ```
//!
//! Asset URLs are prefixed with the base path so the site works when served
//! from a project sub-path.

use crate::config::{check_base_path, normalize_base_path, DEFAULT_BASE_PATH, DEFAULT_OUT_DIR};
use crate::error::{CatalogErrorKind, CheatsheetError, ErrorContext, Result};
use crate::render::styles::stylesheet;
use crate::render::{HtmlRenderer, JsonRenderer, Page, PageRenderer, RenderConfig};
use serde::Serialize;
use std::path::{Path, PathBuf};
use xxhash_rust::xxh3::xxh3_64;

/// Directory for static assets inside the output directory.
const ASSETS_DIR: &str = "assets";

/// Options for [`build_site`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Directory to write into; created if missing
    pub out_dir: PathBuf,
    /// Path or absolute URL the site is served under, ending with `/`
    pub base_path: String,
    /// Remove an existing output directory first
    pub clean: bool,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            base_path: DEFAULT_BASE_PATH.to_string(),
            clean: false,
        }
    }
}

/// One file written by the build, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Record of a completed build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteManifest {
    pub out_dir: PathBuf,
    pub base_path: String,
    /// Stylesheet path relative to the output directory
    pub stylesheet: PathBuf,
    /// Stylesheet URL as referenced by the pages
    pub stylesheet_href: String,
    pub files: Vec<WrittenFile>,
}

impl SiteManifest {
    /// Total bytes written.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// File name of the stylesheet for `css`: `style.<xxh3 hex>.css`.
#[must_use]
pub fn hashed_stylesheet_name(css: &str) -> String {
    format!("style.{:016x}.css", xxh3_64(css.as_bytes()))
}

/// Build the site for `page` into `options.out_dir`.
///
/// Refuses to build from a catalog that breaks any invariant. Output is a
/// pure function of the page and options, so rebuilding is idempotent.
pub fn build_site(page: &Page, options: &SiteOptions) -> Result<SiteManifest> {
    let violations = page.catalog.validate();
    if !violations.is_empty() {
        return Err(CheatsheetError::catalog(
            "refusing to build site",
            CatalogErrorKind::Invalid(violations.into()),
        ));
    }

    let base_path = normalize_base_path(&options.base_path);
    check_base_path(&base_path)
        .map_err(|reason| CheatsheetError::config(format!("invalid base path: {reason}")))?;
    let out_dir = options.out_dir.as_path();
    prepare_out_dir(out_dir, options.clean)?;

    let css = stylesheet(&page.breakpoint);
    let css_name = hashed_stylesheet_name(&css);
    let css_rel = Path::new(ASSETS_DIR).join(&css_name);
    let css_href = format!("{base_path}{ASSETS_DIR}/{css_name}");
    let config = RenderConfig::linked(css_href.clone());

    let index = HtmlRenderer::new()
        .render(page, &config)
        .context("rendering index.html")?;
    let not_found = HtmlRenderer::new()
        .render_not_found(page, &config, &base_path)
        .context("rendering 404.html")?;
    let json = JsonRenderer::new()
        .render(page, &config)
        .context("rendering techniques.json")?;

    let mut files = Vec::new();
    files.push(write_site_file(out_dir, &css_rel, &css)?);
    files.push(write_site_file(out_dir, Path::new("index.html"), &index)?);
    files.push(write_site_file(out_dir, Path::new("404.html"), &not_found)?);
    files.push(write_site_file(out_dir, Path::new("techniques.json"), &json)?);
    files.push(write_site_file(out_dir, Path::new(".nojekyll"), "")?);

    let manifest = SiteManifest {
        out_dir: out_dir.to_path_buf(),
        base_path,
        stylesheet: css_rel,
        stylesheet_href: css_href,
        files,
    };
    tracing::info!(
        "Built site in {} ({} files, {} bytes)",
        out_dir.display(),
        manifest.files.len(),
        manifest.total_bytes()
    );
    Ok(manifest)
}

/// Create the output directory, wiping it first when `clean` is set.
fn prepare_out_dir(out_dir: &Path, clean: bool) -> Result<()> {
    if out_dir.as_os_str().is_empty() {
        return Err(CheatsheetError::config("output directory must not be empty"));
    }

    if clean && out_dir.exists() {
        if out_dir.parent().is_none() || out_dir == Path::new(".") {
            return Err(CheatsheetError::config(format!(
                "refusing to clean {}",
                out_dir.display()
            )));
        }
        tracing::debug!("Removing {}", out_dir.display());
        std::fs::remove_dir_all(out_dir).map_err(|e| CheatsheetError::io(out_dir, e))?;
    }

    let assets = out_dir.join(ASSETS_DIR);
    std::fs::create_dir_all(&assets).map_err(|e| CheatsheetError::io(&assets, e))?;
    Ok(())
}

fn write_site_file(out_dir: &Path, rel: &Path, content: &str) -> Result<WrittenFile> {
    let path = out_dir.join(rel);
    std::fs::write(&path, content).map_err(|e| CheatsheetError::io(&path, e))?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(WrittenFile {
        path: rel.to_path_buf(),
        bytes: content.len() as u64,
    })
}
