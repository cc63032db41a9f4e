//! Escaping utilities for safe output generation.
//!
//! Technique text may come from a user-supplied catalog file, so every
//! field is escaped before it is embedded in HTML, Markdown or CSV.
//! Line breaks are significant in examples: the HTML escapers keep them
//! (the stylesheet renders them with `white-space: pre-line`) and the
//! Markdown cell escaper turns them into `<br>`.

/// Escape a string for safe inclusion in HTML content.
///
/// # Examples
///
/// ```
/// use prompt_cheatsheet::render::escape::escape_html;
///
/// assert_eq!(escape_html("<script>alert('xss')</script>"),
///     "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;");
/// assert_eq!(escape_html("line1\nline2"), "line1\nline2");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for safe inclusion in HTML attributes such as `href`.
///
/// Stricter than content escaping: whitespace control characters are
/// encoded so they cannot break attribute parsing.
pub fn escape_html_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            '\n' => result.push_str("&#10;"),
            '\r' => result.push_str("&#13;"),
            '\t' => result.push_str("&#9;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for a Markdown table cell, keeping line breaks as `<br>`.
///
/// # Examples
///
/// ```
/// use prompt_cheatsheet::render::escape::escape_markdown_cell;
///
/// assert_eq!(escape_markdown_cell("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_cell("Q: hi\nA: hola"), "Q: hi<br>A: hola");
/// ```
pub fn escape_markdown_cell(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push_str("<br>"),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for Markdown inline content such as headings.
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '#' => result.push_str("\\#"),
            '!' => result.push_str("\\!"),
            '~' => result.push_str("\\~"),
            '|' => result.push_str("\\|"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Backtick fence long enough to wrap `s` in a Markdown code block.
pub fn markdown_fence(s: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in s.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

/// Escape a CSV field body. The caller wraps it in double quotes.
pub fn escape_csv(s: &str) -> String {
    s.replace('"', "\"\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_basic() {
        assert_eq!(escape_html("hello"), "hello");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("a < b > c"), "a &lt; b &gt; c");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("model's"), "model&#x27;s");
    }

    #[test]
    fn test_escape_html_xss_vectors() {
        assert_eq!(
            escape_html("<img onerror=\"alert('xss')\">"),
            "&lt;img onerror=&quot;alert(&#x27;xss&#x27;)&quot;&gt;"
        );
        assert_eq!(escape_html("&lt;script&gt;"), "&amp;lt;script&amp;gt;");
    }

    #[test]
    fn test_escape_html_keeps_markers_and_newlines() {
        assert_eq!(
            escape_html("❌ \"Explain recursion.\"\n✅ ok"),
            "❌ &quot;Explain recursion.&quot;\n✅ ok"
        );
    }

    #[test]
    fn test_escape_html_attr() {
        assert_eq!(escape_html_attr("normal"), "normal");
        assert_eq!(escape_html_attr("line1\nline2"), "line1&#10;line2");
        assert_eq!(
            escape_html_attr("https://example.com/?a=1&b=2"),
            "https://example.com/?a=1&amp;b=2"
        );
    }

    #[test]
    fn test_escape_markdown_cell_structure() {
        assert_eq!(
            escape_markdown_cell("row1\n| new | row |"),
            "row1<br>\\| new \\| row \\|"
        );
        assert_eq!(escape_markdown_cell("[paste text]"), "\\[paste text\\]");
        assert_eq!(escape_markdown_cell("a\r\nb"), "a<br>b");
        assert_eq!(escape_markdown_cell("&lt;tag&gt;"), "&amp;lt;tag&amp;gt;");
        assert_eq!(escape_markdown_cell("Q&A <b>"), "Q&amp;A &lt;b&gt;");
    }

    #[test]
    fn test_escape_markdown_inline() {
        assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
        assert_eq!(
            escape_markdown_inline("Chain-of-Thought (CoT)"),
            "Chain-of-Thought (CoT)"
        );
        assert_eq!(escape_markdown_inline("# heading"), "\\# heading");
    }

    #[test]
    fn test_markdown_fence() {
        assert_eq!(markdown_fence("plain"), "```");
        assert_eq!(markdown_fence("has ``` inside"), "````");
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("say \"hi\""), "say \"\"hi\"\"");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(escape_html(""), "");
        assert_eq!(escape_markdown_cell(""), "");
        assert_eq!(escape_markdown_inline(""), "");
    }
}
