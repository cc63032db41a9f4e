//! HTML page generator.
//!
//! [`render_table`] and [`render_cards`] are the two views of the technique
//! list. [`HtmlRenderer`] wraps both in a full document; the stylesheet
//! decides which one is visible.

use super::escape::{escape_html, escape_html_attr};
use super::styles::stylesheet;
use super::{Page, PageRenderer, RenderConfig, RenderError, RenderFormat, StylesheetMode};
use crate::layout::ViewKind;
use crate::model::{Link, LinkKind, TechniqueRecord};
use std::fmt::Write;

/// Column labels of the table view, in order.
pub const TABLE_HEADERS: [&str; 5] = ["#", "Technique", "What it is", "Why it works", "Example"];

/// Labels of the three sub-sections of each card, in order.
pub const CARD_SECTIONS: [&str; 3] = ["What it is", "Why it works", "Example"];

/// Render the table view.
///
/// One header row, then one row per record in input order. Row background
/// alternates by position parity; every row but the last carries the
/// `row-divider` separator.
#[must_use]
pub fn render_table(records: &[TechniqueRecord]) -> String {
    let mut html = String::new();
    // Writing to a String cannot fail
    let _ = write_table(&mut html, records);
    html
}

/// Render the card view: one card per record in input order.
#[must_use]
pub fn render_cards(records: &[TechniqueRecord]) -> String {
    let mut html = String::new();
    let _ = write_cards(&mut html, records);
    html
}

fn write_table(html: &mut String, records: &[TechniqueRecord]) -> std::fmt::Result {
    writeln!(html, "<div class=\"{}\">", ViewKind::Table.css_class())?;
    writeln!(html, "    <table>")?;
    writeln!(html, "        <thead>")?;
    writeln!(html, "            <tr>")?;
    for header in TABLE_HEADERS {
        writeln!(
            html,
            "                <th scope=\"col\">{}</th>",
            escape_html(header)
        )?;
    }
    writeln!(html, "            </tr>")?;
    writeln!(html, "        </thead>")?;
    writeln!(html, "        <tbody>")?;

    let last = records.len().saturating_sub(1);
    for (index, record) in records.iter().enumerate() {
        let parity = if index % 2 == 0 { "row-even" } else { "row-odd" };
        let divider = if index < last { " row-divider" } else { "" };

        writeln!(
            html,
            "            <tr class=\"{parity}{divider}\" data-id=\"{}\">",
            record.id
        )?;
        writeln!(html, "                <td class=\"cell-id\">{}</td>", record.id)?;
        writeln!(
            html,
            "                <td class=\"cell-name\">{}</td>",
            escape_html(&record.name)
        )?;
        writeln!(
            html,
            "                <td class=\"cell-text\">{}</td>",
            escape_html(&record.definition)
        )?;
        writeln!(
            html,
            "                <td class=\"cell-text\">{}</td>",
            escape_html(&record.rationale)
        )?;
        writeln!(
            html,
            "                <td class=\"example\">{}</td>",
            escape_html(&record.example)
        )?;
        writeln!(html, "            </tr>")?;
    }

    writeln!(html, "        </tbody>")?;
    writeln!(html, "    </table>")?;
    writeln!(html, "</div>")
}

fn write_cards(html: &mut String, records: &[TechniqueRecord]) -> std::fmt::Result {
    writeln!(html, "<div class=\"{}\">", ViewKind::Cards.css_class())?;
    for record in records {
        writeln!(html, "    <article class=\"card\" data-id=\"{}\">", record.id)?;
        writeln!(html, "        <div class=\"card-heading\">")?;
        writeln!(
            html,
            "            <span class=\"card-id\">{}</span>",
            record.id
        )?;
        writeln!(
            html,
            "            <h3 class=\"card-name\">{}</h3>",
            escape_html(&record.name)
        )?;
        writeln!(html, "        </div>")?;

        let bodies = [&record.definition, &record.rationale, &record.example];
        for (label, body) in CARD_SECTIONS.iter().zip(bodies) {
            let class = if *label == "Example" {
                " class=\"example\""
            } else {
                ""
            };
            writeln!(html, "        <section class=\"card-section\">")?;
            writeln!(html, "            <h4>{}</h4>", escape_html(label))?;
            writeln!(html, "            <p{class}>{}</p>", escape_html(body))?;
            writeln!(html, "        </section>")?;
        }
        writeln!(html, "    </article>")?;
    }
    writeln!(html, "</div>")
}

/// Render an outbound footer link. Links always open in a new tab.
fn render_link(link: &Link) -> String {
    let class = match link.kind {
        LinkKind::Attribution => "link-attribution",
        LinkKind::Source => "link-source",
    };
    format!(
        "<a class=\"{class}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape_html_attr(&link.href),
        escape_html(&link.label)
    )
}

/// HTML page generator
pub struct HtmlRenderer;

impl HtmlRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_head(
        &self,
        html: &mut String,
        title: &str,
        page: &Page,
        config: &RenderConfig,
    ) -> Result<(), RenderError> {
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        if let Some(base) = &config.base_href {
            writeln!(html, "    <base href=\"{}\">", escape_html_attr(base))?;
        }
        writeln!(html, "    <title>{}</title>", escape_html(title))?;
        match &config.stylesheet {
            StylesheetMode::Inline => {
                writeln!(html, "    <style>")?;
                html.push_str(&stylesheet(&page.breakpoint));
                writeln!(html, "    </style>")?;
            }
            StylesheetMode::Linked(href) => {
                writeln!(
                    html,
                    "    <link rel=\"stylesheet\" href=\"{}\">",
                    escape_html_attr(href)
                )?;
            }
        }
        writeln!(html, "</head>")?;
        Ok(())
    }

    fn write_footer(&self, html: &mut String, links: &[Link]) -> Result<(), RenderError> {
        writeln!(html, "<footer>")?;
        writeln!(html, "    <div class=\"container\">")?;
        for link in links {
            writeln!(html, "        {}", render_link(link))?;
        }
        writeln!(html, "    </div>")?;
        writeln!(html, "</footer>")?;
        Ok(())
    }

    /// Minimal not-found page pointing back to `home_href`.
    pub fn render_not_found(
        &self,
        page: &Page,
        config: &RenderConfig,
        home_href: &str,
    ) -> Result<String, RenderError> {
        let mut html = String::new();
        let title = format!("Page not found | {}", page.meta.title);
        self.write_head(&mut html, &title, page, config)?;
        writeln!(html, "<body>")?;
        writeln!(html, "<header class=\"hero\">")?;
        writeln!(html, "    <div class=\"container\">")?;
        writeln!(html, "        <h1>Page not found</h1>")?;
        writeln!(
            html,
            "        <p><a href=\"{}\">Back to the {}</a></p>",
            escape_html_attr(home_href),
            escape_html(&page.meta.title)
        )?;
        writeln!(html, "    </div>")?;
        writeln!(html, "</header>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;
        Ok(html)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for HtmlRenderer {
    fn render(&self, page: &Page, config: &RenderConfig) -> Result<String, RenderError> {
        let mut html = String::new();
        let records = page.catalog.records();

        self.write_head(&mut html, &page.meta.title, page, config)?;
        writeln!(html, "<body>")?;

        // Hero
        writeln!(html, "<header class=\"hero\">")?;
        writeln!(html, "    <div class=\"container\">")?;
        writeln!(html, "        <h1>{}</h1>", escape_html(&page.meta.title))?;
        writeln!(html, "        <p>{}</p>", escape_html(&page.meta.tagline))?;
        writeln!(html, "    </div>")?;
        writeln!(html, "</header>")?;

        // Both views; the stylesheet shows one per breakpoint
        writeln!(html, "<main>")?;
        writeln!(html, "<div class=\"container\">")?;
        write_table(&mut html, records)?;
        write_cards(&mut html, records)?;
        writeln!(html, "</div>")?;
        writeln!(html, "</main>")?;

        self.write_footer(&mut html, &page.links)?;

        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        tracing::debug!(
            "Rendered HTML page: {} techniques, {} bytes",
            records.len(),
            html.len()
        );
        Ok(html)
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Html
    }
}
