//! Markdown subset used by the credits roll.
//!
//! Recognised per line: `# `, `## `, `### ` headings, `* ` / `- ` bullets and
//! everything else as a paragraph. Bullets and paragraphs support `**bold**`
//! spans (non-greedy). Literal text is always HTML-escaped.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Heading(u8),
    Bullet,
    Paragraph,
}

impl LineKind {
    /// Font multiplier relative to the base font size.
    pub fn font_scale(self) -> f64 {
        match self {
            LineKind::Heading(1) => 2.0,
            LineKind::Heading(2) => 1.5,
            LineKind::Heading(_) => 1.25,
            LineKind::Bullet | LineKind::Paragraph => 1.0,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            LineKind::Heading(1) => "h1",
            LineKind::Heading(2) => "h2",
            LineKind::Heading(_) => "h3",
            LineKind::Bullet | LineKind::Paragraph => "p",
        }
    }

    fn class(self) -> &'static str {
        match self {
            LineKind::Heading(1) => "credits-h1",
            LineKind::Heading(2) => "credits-h2",
            LineKind::Heading(_) => "credits-h3",
            LineKind::Bullet => "credits-item",
            LineKind::Paragraph => "credits-text",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Bold(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub spans: Vec<Span>,
}

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("static pattern"))
}

fn inline_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in bold_re().captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::Text(text[last..whole.start()].to_string()));
        }
        spans.push(Span::Bold(inner.as_str().to_string()));
        last = whole.end();
    }
    if last < text.len() {
        spans.push(Span::Text(text[last..].to_string()));
    }
    spans
}

pub fn parse_line(raw: &str) -> Line {
    let line = raw.strip_suffix('\r').unwrap_or(raw);
    let heading = [("### ", 3u8), ("## ", 2), ("# ", 1)]
        .into_iter()
        .find_map(|(prefix, level)| line.strip_prefix(prefix).map(|rest| (rest, level)));
    if let Some((rest, level)) = heading {
        let spans = if rest.is_empty() {
            Vec::new()
        } else {
            vec![Span::Text(rest.to_string())]
        };
        return Line {
            kind: LineKind::Heading(level),
            spans,
        };
    }
    if let Some(rest) = line.strip_prefix("* ").or_else(|| line.strip_prefix("- ")) {
        return Line {
            kind: LineKind::Bullet,
            spans: inline_spans(rest),
        };
    }
    Line {
        kind: LineKind::Paragraph,
        spans: inline_spans(line),
    }
}

pub fn parse(text: &str) -> Vec<Line> {
    text.split('\n').map(parse_line).collect()
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl Line {
    pub fn inner_html(&self) -> String {
        let mut html = String::new();
        for span in &self.spans {
            match span {
                Span::Text(t) => html.push_str(&escape_html(t)),
                Span::Bold(t) => {
                    html.push_str("<strong>");
                    html.push_str(&escape_html(t));
                    html.push_str("</strong>");
                }
            }
        }
        html
    }

    pub fn to_html(&self, base_font_px: f64) -> String {
        let tag = self.kind.tag();
        format!(
            "<{tag} class=\"{}\" style=\"font-size:{}px\">{}</{tag}>",
            self.kind.class(),
            base_font_px * self.kind.font_scale(),
            self.inner_html()
        )
    }
}

/// Renders a whole document.
pub fn render(text: &str, base_font_px: f64) -> String {
    parse(text)
        .iter()
        .map(|l| l.to_html(base_font_px))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_select_line_kind() {
        assert_eq!(parse_line("# Cast").kind, LineKind::Heading(1));
        assert_eq!(parse_line("## Crew").kind, LineKind::Heading(2));
        assert_eq!(parse_line("### Thanks").kind, LineKind::Heading(3));
        assert_eq!(parse_line("* Coffee").kind, LineKind::Bullet);
        assert_eq!(parse_line("- Pizza").kind, LineKind::Bullet);
        assert_eq!(parse_line("#NoSpace").kind, LineKind::Paragraph);
        assert_eq!(parse_line("**bold** start").kind, LineKind::Paragraph);
        assert_eq!(parse_line("").kind, LineKind::Paragraph);
    }

    #[test]
    fn heading_text_is_literal() {
        let l = parse_line("## **Crew**\r");
        assert_eq!(l.spans, vec![Span::Text("**Crew**".into())]);
    }

    #[test]
    fn bold_is_non_greedy() {
        let l = parse_line("* **Director**: James **Cameron**");
        assert_eq!(
            l.spans,
            vec![
                Span::Bold("Director".into()),
                Span::Text(": James ".into()),
                Span::Bold("Cameron".into()),
            ]
        );
        assert_eq!(
            parse_line("a ** b").spans,
            vec![Span::Text("a ** b".into())]
        );
    }

    #[test]
    fn html_is_escaped_before_markup() {
        let l = parse_line("<script>**x&y**</script>");
        assert_eq!(
            l.inner_html(),
            "&lt;script&gt;<strong>x&amp;y</strong>&lt;/script&gt;"
        );
    }

    #[test]
    fn font_scaling() {
        assert_eq!(
            parse_line("# Cast").to_html(16.0),
            "<h1 class=\"credits-h1\" style=\"font-size:32px\">Cast</h1>"
        );
        assert_eq!(
            parse_line("### T").to_html(16.0),
            "<h3 class=\"credits-h3\" style=\"font-size:20px\">T</h3>"
        );
        assert_eq!(
            parse_line("- Bob").to_html(20.0),
            "<p class=\"credits-item\" style=\"font-size:20px\">Bob</p>"
        );
    }
}
