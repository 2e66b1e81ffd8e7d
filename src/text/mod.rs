//! HTML to plain text normalization
//!
//! Article titles and bodies are stored as readable plain text. Rendering is
//! done by `html2text` with a decorator that drops link targets and keeps
//! only the anchor text; tables keep their row/column layout.

use html2text::render::text_renderer::TrivialDecorator;
use scraper::Html;

/// Converts an HTML fragment into plain text
///
/// Conversion never fails: if `html2text` cannot lay the fragment out at
/// `width` it is retried once at a wider width, and after that the bare text
/// nodes of the fragment are used.
///
/// The result has no trailing whitespace on any line, at most one blank line
/// in a row, and is trimmed.
///
/// # Example
///
/// ```
/// use gnawer::text::to_plain_text;
///
/// let text = to_plain_text(r#"<p>Read <a href="https://example.com">more</a></p>"#, 80);
/// assert_eq!(text, "Read more");
/// ```
pub fn to_plain_text(html: &str, width: usize) -> String {
    let rendered = match render(html, width) {
        Ok(text) => text,
        Err(first) => {
            tracing::debug!("Text rendering failed at width {}: {}", width, first);
            match render(html, width.saturating_mul(4)) {
                Ok(text) => text,
                Err(second) => {
                    tracing::debug!("Falling back to raw text nodes: {}", second);
                    fragment_text(html)
                }
            }
        }
    };

    tidy(&rendered)
}

fn render(html: &str, width: usize) -> Result<String, html2text::Error> {
    html2text::config::with_decorator(TrivialDecorator::new())
        .string_from_read(html.as_bytes(), width)
}

/// Concatenates the text nodes of a fragment, one per line
fn fragment_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strips trailing whitespace per line and collapses blank-line runs
fn tidy(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = false;

    for line in text.lines() {
        let line = line.trim_end();
        let blank = line.is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(line);
        previous_blank = blank;
    }

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passthrough() {
        assert_eq!(to_plain_text("Breaking news", 80), "Breaking news");
    }

    #[test]
    fn test_links_keep_only_anchor_text() {
        let html = r#"<p>See <a href="https://example.com/hidden-target">the report</a> today</p>"#;
        let text = to_plain_text(html, 80);

        assert!(text.contains("the report"));
        assert!(!text.contains("hidden-target"));
    }

    #[test]
    fn test_block_elements_break_lines() {
        let html = "<p>First paragraph</p><p>Second paragraph</p>";
        let text = to_plain_text(html, 80);

        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["First paragraph", "Second paragraph"]);
    }

    #[test]
    fn test_tags_are_stripped() {
        let html = "<div><span class=\"x\">Bold</span> <em>claims</em></div>";
        let text = to_plain_text(html, 80);

        assert!(!text.contains('<'));
        assert!(text.contains("Bold"));
        assert!(text.contains("claims"));
    }

    #[test]
    fn test_table_rows_stay_on_one_line() {
        let html = "<table>\
            <tr><td>Alpha</td><td>Beta</td></tr>\
            <tr><td>Gamma</td><td>Delta</td></tr>\
            </table>";
        let text = to_plain_text(html, 80);

        assert!(text
            .lines()
            .any(|l| l.contains("Alpha") && l.contains("Beta")));
        assert!(text
            .lines()
            .any(|l| l.contains("Gamma") && l.contains("Delta")));
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        assert_eq!(to_plain_text("   \n\t  ", 80), "");
        assert_eq!(to_plain_text("<div>  </div><p></p>", 80), "");
        assert_eq!(to_plain_text("", 80), "");
    }

    #[test]
    fn test_tidy_collapses_blank_lines() {
        assert_eq!(tidy("a  \n\n\n\nb\n\n"), "a\n\nb");
    }

    #[test]
    fn test_fragment_text_fallback() {
        let text = fragment_text("<ul><li> one </li><li>two</li></ul>");
        assert_eq!(text, "one\ntwo");
    }
}
