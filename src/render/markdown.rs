//! Markdown generator.

use super::escape::{escape_markdown_cell, escape_markdown_inline, markdown_fence};
use super::html::{CARD_SECTIONS, TABLE_HEADERS};
use super::{Page, PageRenderer, RenderConfig, RenderError, RenderFormat};
use std::fmt::Write;

/// Markdown renderer.
///
/// Emits the table view as a GitHub-flavored table followed by one section
/// per technique, mirroring the card view.
pub struct MarkdownRenderer {
    include_cards: bool,
}

impl MarkdownRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_cards: true,
        }
    }

    /// Only emit the table.
    #[must_use]
    pub const fn table_only(mut self) -> Self {
        self.include_cards = false;
        self
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for MarkdownRenderer {
    fn render(&self, page: &Page, _config: &RenderConfig) -> Result<String, RenderError> {
        let mut md = String::new();

        writeln!(md, "# {}", escape_markdown_inline(&page.meta.title))?;
        writeln!(md)?;
        writeln!(md, "{}", escape_markdown_inline(&page.meta.tagline))?;
        writeln!(md)?;

        // Table
        writeln!(md, "| {} |", TABLE_HEADERS.join(" | "))?;
        writeln!(md, "|{}", "---|".repeat(TABLE_HEADERS.len()))?;
        for record in &page.catalog {
            writeln!(
                md,
                "| {} | **{}** | {} | {} | {} |",
                record.id,
                escape_markdown_cell(&record.name),
                escape_markdown_cell(&record.definition),
                escape_markdown_cell(&record.rationale),
                escape_markdown_cell(&record.example)
            )?;
        }

        if self.include_cards {
            writeln!(md)?;
            writeln!(md, "## Techniques")?;
            for record in &page.catalog {
                writeln!(md)?;
                writeln!(
                    md,
                    "### {}. {}",
                    record.id,
                    escape_markdown_inline(&record.name)
                )?;
                writeln!(md)?;
                writeln!(md, "**{}:** {}", CARD_SECTIONS[0], escape_markdown_inline(&record.definition))?;
                writeln!(md)?;
                writeln!(md, "**{}:** {}", CARD_SECTIONS[1], escape_markdown_inline(&record.rationale))?;
                writeln!(md)?;
                if record.has_multiline_example() {
                    writeln!(md, "**{}:**", CARD_SECTIONS[2])?;
                    writeln!(md)?;
                    // Code block keeps the example's line breaks verbatim
                    let fence = markdown_fence(&record.example);
                    writeln!(md, "{fence}text")?;
                    writeln!(md, "{}", record.example)?;
                    writeln!(md, "{fence}")?;
                } else {
                    writeln!(
                        md,
                        "**{}:** {}",
                        CARD_SECTIONS[2],
                        escape_markdown_inline(&record.example)
                    )?;
                }
            }
        }

        if !page.links.is_empty() {
            writeln!(md)?;
            writeln!(md, "---")?;
            writeln!(md)?;
            for link in &page.links {
                writeln!(
                    md,
                    "- [{}]({})",
                    escape_markdown_inline(&link.label),
                    link.href.replace(' ', "%20").replace(')', "%29")
                )?;
            }
        }

        Ok(md)
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(renderer: &MarkdownRenderer) -> String {
        renderer
            .render(&Page::default(), &RenderConfig::default())
            .unwrap()
    }

    #[test]
    fn test_markdown_table_rows() {
        let md = render(&MarkdownRenderer::new().table_only());
        assert!(md.contains("| # | Technique | What it is | Why it works | Example |"));
        let rows = md.lines().filter(|l| l.starts_with("| ")).count();
        // header + 9 techniques
        assert_eq!(rows, 10);
        assert!(!md.contains("## Techniques"));
    }

    #[test]
    fn test_markdown_table_keeps_line_breaks() {
        let md = render(&MarkdownRenderer::new());
        assert!(md.contains("A: Hola<br><br>Q: Translate"));
    }

    #[test]
    fn test_markdown_cards_fenced_example() {
        let md = render(&MarkdownRenderer::new());
        assert!(md.contains("### 2. Few-Shot Prompting"));
        assert!(md.contains("```text\nQ: Translate \"Hello\" to Spanish\nA: Hola\n"));
        assert_eq!(md.matches("**Why it works:**").count(), 9);
    }

    #[test]
    fn test_markdown_single_line_example_inline() {
        let md = render(&MarkdownRenderer::new());
        assert!(md.contains(
            "**Example:** \"Solve this problem. Explain your reasoning step by step before giving the final answer.\""
        ));
    }

    #[test]
    fn test_markdown_links() {
        let md = render(&MarkdownRenderer::new());
        assert!(md.contains(
            "- [Suggest a technique](https://github.com/fsystemweb/prompt-engineering-cheatsheet)"
        ));
    }
}
