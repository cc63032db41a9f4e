//! Page-level content surrounding the technique list.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Prompt Engineering Cheat Sheet";
pub const DEFAULT_TAGLINE: &str = "A concise collection of prompt engineering techniques with definitions, explanations, and examples. Perfect for quick reference while working with LLMs.";
pub const DEFAULT_BOOK_URL: &str =
    "https://www.amazon.es/AI-Engineering-Building-Applications-Foundation/dp/1098166302/";
pub const DEFAULT_BOOK_LABEL: &str = "Prompt techniques extracted from the book 'AI Engineer'";
pub const DEFAULT_SOURCE_URL: &str = "https://github.com/fsystemweb/prompt-engineering-cheatsheet";
pub const DEFAULT_SOURCE_LABEL: &str = "Suggest a technique";

/// What an outbound link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    /// Content attribution
    Attribution,
    /// Issue and suggestion intake
    Source,
}

/// Static hyperlink shown in the page footer. Always opens in a new tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Link {
    pub kind: LinkKind,
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(kind: LinkKind, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            href: href.into(),
        }
    }

    /// Book attribution link.
    #[must_use]
    pub fn attribution() -> Self {
        Self::new(LinkKind::Attribution, DEFAULT_BOOK_LABEL, DEFAULT_BOOK_URL)
    }

    /// Source repository link.
    #[must_use]
    pub fn source() -> Self {
        Self::new(LinkKind::Source, DEFAULT_SOURCE_LABEL, DEFAULT_SOURCE_URL)
    }
}

/// Title and intro text of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub tagline: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
        }
    }
}

/// Default footer links, attribution first.
#[must_use]
pub fn default_links() -> Vec<Link> {
    vec![Link::attribution(), Link::source()]
}
