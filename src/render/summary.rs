//! Terminal renderers.
//!
//! [`SummaryRenderer`] prints a compact listing. [`TerminalRenderer`] is the
//! terminal counterpart of the HTML page: a wrapped five-column table when
//! the terminal is at least as wide as the configured breakpoint, stacked
//! cards otherwise.

use super::html::{CARD_SECTIONS, TABLE_HEADERS};
use super::{Page, PageRenderer, RenderConfig, RenderError, RenderFormat};
use crate::layout::{Breakpoint, ViewKind};
use crate::model::TechniqueRecord;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "accent" => format!("\x1b[38;2;193;95;60m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary renderer for shell output
pub struct SummaryRenderer;

impl SummaryRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for SummaryRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for SummaryRenderer {
    fn render(&self, page: &Page, config: &RenderConfig) -> Result<String, RenderError> {
        let colored = config.colored;
        let mut lines = Vec::new();

        lines.push(ansi_color(&page.meta.title, "bold", colored));
        lines.push(ansi_color("─".repeat(40).as_str(), "dim", colored));
        let count = page.catalog.len();
        lines.push(format!(
            "{}  {} {}",
            ansi_color("Techniques:", "cyan", colored),
            count,
            if count == 1 { "entry" } else { "entries" }
        ));
        lines.push(String::new());

        for record in &page.catalog {
            lines.push(format!(
                "  {} {}",
                ansi_color(&format!("{:>2}.", record.id), "accent", colored),
                record.name
            ));
        }

        if !page.links.is_empty() {
            lines.push(String::new());
            for link in &page.links {
                lines.push(format!(
                    "{} {}",
                    ansi_color(&format!("{}:", link.label), "dim", colored),
                    link.href
                ));
            }
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Summary
    }
}

/// Terminal renderer that picks table or cards by terminal width
pub struct TerminalRenderer;

/// Widths of the fixed columns and the gap between columns.
const ID_COL: usize = 3;
const NAME_COL: usize = 22;
const COL_GAP: &str = " │ ";

impl TerminalRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// View used for a terminal `width` columns wide.
    #[must_use]
    pub fn view_for(width: u16, breakpoint: u16) -> ViewKind {
        Breakpoint::new(u32::from(breakpoint)).active_view(u32::from(width))
    }

    fn render_table(records: &[TechniqueRecord], width: usize, colored: bool) -> Vec<String> {
        let gaps = COL_GAP.width() * (TABLE_HEADERS.len() - 1);
        let flexible = width.saturating_sub(ID_COL + NAME_COL + gaps) / 3;
        let flexible = flexible.max(10);
        let widths = [ID_COL, NAME_COL, flexible, flexible, flexible];
        let rule = "─".repeat(widths.iter().sum::<usize>() + gaps);

        let mut lines = Vec::new();
        let header: Vec<String> = TABLE_HEADERS.iter().map(|h| (*h).to_string()).collect();
        for line in layout_row(&header, &widths) {
            lines.push(ansi_color(&line, "bold", colored));
        }
        lines.push(ansi_color(&rule, "accent", colored));

        let last = records.len().saturating_sub(1);
        for (index, record) in records.iter().enumerate() {
            let cells = [
                record.id.to_string(),
                record.name.to_string(),
                record.definition.to_string(),
                record.rationale.to_string(),
                record.example.to_string(),
            ];
            for line in layout_row(&cells, &widths) {
                // Alternate rows are dimmed, mirroring the page's row shading
                if index % 2 == 1 {
                    lines.push(ansi_color(&line, "dim", colored));
                } else {
                    lines.push(line);
                }
            }
            if index < last {
                lines.push(ansi_color(&rule, "dim", colored));
            }
        }
        lines
    }

    fn render_cards(records: &[TechniqueRecord], width: usize, colored: bool) -> Vec<String> {
        let indent = "    ";
        let body_width = width.saturating_sub(indent.len()).max(10);
        let mut lines = Vec::new();

        for (index, record) in records.iter().enumerate() {
            if index > 0 {
                lines.push(String::new());
            }
            lines.push(format!(
                "{} {}",
                ansi_color(&format!("{:>3}", record.id), "accent", colored),
                ansi_color(&record.name, "bold", colored)
            ));

            let bodies = [&record.definition, &record.rationale, &record.example];
            for (label, body) in CARD_SECTIONS.iter().zip(bodies) {
                lines.push(format!(
                    "{indent}{}",
                    ansi_color(&label.to_uppercase(), "accent", colored)
                ));
                for line in wrap_text(body, body_width) {
                    lines.push(format!("{indent}{line}"));
                }
            }
        }
        lines
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for TerminalRenderer {
    fn render(&self, page: &Page, config: &RenderConfig) -> Result<String, RenderError> {
        let width = config.effective_width();
        let records = page.catalog.records();
        let view = Self::view_for(width, config.terminal_breakpoint);
        tracing::debug!("Terminal width {width}, rendering {view} view");

        let mut lines = vec![ansi_color(&page.meta.title, "bold", config.colored), String::new()];
        lines.extend(match view {
            ViewKind::Table => Self::render_table(records, usize::from(width), config.colored),
            ViewKind::Cards => Self::render_cards(records, usize::from(width), config.colored),
        });
        Ok(lines.join("\n"))
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Table
    }
}

/// Render a single technique as a terminal card.
#[must_use]
pub fn render_card_text(record: &TechniqueRecord, config: &RenderConfig) -> String {
    TerminalRenderer::render_cards(
        std::slice::from_ref(record),
        usize::from(config.effective_width()),
        config.colored,
    )
    .join("\n")
}

/// Lay out one table row; each cell is wrapped to its column width and
/// the row is as tall as its tallest cell.
fn layout_row(cells: &[String], widths: &[usize]) -> Vec<String> {
    let wrapped: Vec<Vec<String>> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| wrap_text(cell, *width))
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(0);

    (0..height)
        .map(|row| {
            let parts: Vec<String> = wrapped
                .iter()
                .zip(widths)
                .map(|(lines, width)| pad(lines.get(row).map_or("", String::as_str), *width))
                .collect();
            parts.join(COL_GAP).trim_end().to_string()
        })
        .collect()
}

/// Pad `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let used = text.width();
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

/// Word-wrap `text` to `width` display columns.
///
/// Explicit line breaks are kept, blank lines included. Words wider than
/// the column are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        if paragraph.trim().is_empty() {
            out.push(String::new());
            continue;
        }

        let mut line = String::new();
        let mut line_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if line.is_empty() {
                word_width
            } else {
                line_width + 1 + word_width
            };

            if needed <= width {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(word);
                line_width = needed;
                continue;
            }

            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width <= width {
                line.push_str(word);
                line_width = word_width;
            } else {
                for c in word.chars() {
                    let cw = c.width().unwrap_or(0);
                    if line_width + cw > width && !line.is_empty() {
                        out.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(c);
                    line_width += cw;
                }
            }
        }
        if !line.is_empty() {
            out.push(line);
        }
    }

    out
}
