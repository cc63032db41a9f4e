//! Stylesheet for the HTML page.

use crate::layout::Breakpoint;

/// Page colors.
pub mod palette {
    pub const ACCENT: &str = "#c15f3c";
    pub const BACKGROUND: &str = "#f4f3ee";
    pub const SURFACE: &str = "#ffffff";
    pub const ROW_ALT: &str = "#fafaf8";
    pub const BORDER: &str = "#b1ada1";
    pub const HEADING_TEXT: &str = "#2a2a2a";
    pub const BODY_TEXT: &str = "#4a4a4a";
    pub const MUTED_TEXT: &str = "#5a5a5a";
    pub const CODE_TEXT: &str = "#3a3a3a";
}

/// Build the stylesheet.
///
/// Cards are visible by default and the table is hidden; the media query
/// derived from `breakpoint` swaps them, so exactly one view shows at any
/// viewport width.
#[must_use]
pub fn stylesheet(breakpoint: &Breakpoint) -> String {
    use palette::*;

    format!(
        r#":root {{
    --accent: {ACCENT};
    --background: {BACKGROUND};
    --surface: {SURFACE};
    --row-alt: {ROW_ALT};
    --border: {BORDER};
    --heading-text: {HEADING_TEXT};
    --body-text: {BODY_TEXT};
    --muted-text: {MUTED_TEXT};
    --code-text: {CODE_TEXT};
}}

* {{
    box-sizing: border-box;
}}

body {{
    margin: 0;
    min-height: 100vh;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background-color: var(--background);
    line-height: 1.5;
}}

.container {{
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1rem;
}}

.hero {{
    padding: 3rem 0;
    text-align: center;
}}

.hero h1 {{
    margin: 0 0 1rem;
    font-size: 2.25rem;
    color: var(--accent);
}}

.hero p {{
    max-width: 48rem;
    margin: 0 auto;
    font-size: 1.125rem;
    color: var(--muted-text);
}}

main {{
    padding-bottom: 6rem;
}}

.table-view {{
    display: none;
    overflow-x: auto;
    border-radius: 0.5rem;
    background-color: var(--surface);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}}

.table-view table {{
    width: 100%;
    border-collapse: collapse;
}}

.table-view thead {{
    background-color: var(--accent);
}}

.table-view th {{
    padding: 1rem 1.5rem;
    text-align: left;
    font-size: 0.875rem;
    font-weight: 600;
    color: var(--surface);
}}

.table-view td {{
    padding: 1rem 1.5rem;
    vertical-align: top;
    font-size: 0.875rem;
    color: var(--body-text);
}}

.row-even {{
    background-color: var(--surface);
}}

.row-odd {{
    background-color: var(--row-alt);
}}

.row-divider {{
    border-bottom: 1px solid var(--border);
}}

.cell-id {{
    font-weight: 600;
    color: var(--accent);
}}

.cell-name {{
    font-weight: 600;
    color: var(--heading-text);
}}

.example {{
    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
    white-space: pre-line;
    color: var(--code-text);
}}

.card-view {{
    display: block;
}}

.card {{
    margin-bottom: 1rem;
    padding: 1.5rem;
    border-radius: 0.5rem;
    border-left: 4px solid var(--accent);
    background-color: var(--surface);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}}

.card-heading {{
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
}}

.card-id {{
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--accent);
}}

.card-name {{
    flex: 1;
    margin: 0;
    font-size: 1.25rem;
    color: var(--heading-text);
}}

.card-section h4 {{
    margin: 0.75rem 0 0.25rem;
    font-size: 0.75rem;
    font-weight: 600;
    letter-spacing: 0.05em;
    text-transform: uppercase;
    color: var(--accent);
}}

.card-section p {{
    margin: 0;
    font-size: 0.875rem;
    color: var(--body-text);
}}

.card-section p.example {{
    padding: 0.75rem;
    border-radius: 0.25rem;
    background-color: var(--background);
}}

footer {{
    position: fixed;
    right: 0;
    bottom: 0;
    left: 0;
    padding: 1rem;
    border-top: 1px solid var(--border);
    background-color: var(--surface);
}}

footer .container {{
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
}}

footer a {{
    font-size: 0.875rem;
    text-decoration: none;
    color: var(--muted-text);
}}

footer a:hover {{
    opacity: 0.7;
}}

footer a.link-source {{
    font-weight: 500;
    color: var(--accent);
}}

@media {query} {{
    .hero h1 {{
        font-size: 3rem;
    }}

    .table-view {{
        display: block;
    }}

    .card-view {{
        display: none;
    }}
}}
"#,
        query = breakpoint.wide_media_query()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_uses_breakpoint() {
        let css = stylesheet(&Breakpoint::new(900));
        assert!(css.contains("@media (min-width: 900px)"));
    }

    #[test]
    fn test_examples_keep_line_breaks() {
        let css = stylesheet(&Breakpoint::default());
        assert!(css.contains("white-space: pre-line"));
    }

    #[test]
    fn test_stylesheet_is_deterministic() {
        let bp = Breakpoint::default();
        assert_eq!(stylesheet(&bp), stylesheet(&bp));
    }
}
