//! Renderers for the block IR
//!
//! Transforms parsed blocks into HTML (reading view), plain text and ANSI
//! (terminal preview). Each renderer handles one block at a time, so the
//! output order always follows the document.

use crate::ir::{Block, InlineSpan};
use crate::slug::slugify;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const UNDERLINE: &str = "\x1b[4m";
const CYAN: &str = "\x1b[36m";

pub struct Renderer;

impl Renderer {
    /// Renders blocks to an HTML fragment. Headings carry `id` attributes
    /// matching the slugs produced by the heading extractor.
    pub fn to_html(blocks: &[Block]) -> String {
        let mut output = String::new();
        for block in blocks {
            match block {
                Block::Heading { level, text } => {
                    output.push_str(&format!(
                        "<h{level} id=\"{}\">{}</h{level}>\n",
                        escape_html(&slugify(text)),
                        escape_html(text)
                    ));
                }
                Block::ListItem { ordered, text } => {
                    let class = if *ordered { "ordered" } else { "unordered" };
                    output.push_str(&format!("<li class=\"{class}\">{}</li>\n", escape_html(text)));
                }
                Block::CodeBlock { language, lines } => {
                    if language.is_empty() {
                        output.push_str("<pre><code>");
                    } else {
                        output.push_str(&format!(
                            "<pre><code class=\"language-{}\">",
                            escape_html(language)
                        ));
                    }
                    output.push_str(&escape_html(&lines.join("\n")));
                    output.push_str("</code></pre>\n");
                }
                Block::Spacer => output.push_str("<div class=\"spacer\"></div>\n"),
                Block::Paragraph { spans } => {
                    output.push_str("<p>");
                    for span in spans {
                        let text = escape_html(span.text());
                        if span.is_emphasized() {
                            output.push_str(&format!("<strong>{text}</strong>"));
                        } else {
                            output.push_str(&text);
                        }
                    }
                    output.push_str("</p>\n");
                }
            }
        }
        output
    }

    /// Renders blocks to plain text, stripping all formatting. Suitable for
    /// search indexing and TTS engines.
    pub fn to_plain_text(blocks: &[Block]) -> String {
        let mut output = String::new();
        for block in blocks {
            match block {
                Block::Heading { text, .. } | Block::ListItem { text, .. } => {
                    output.push_str(text);
                }
                Block::CodeBlock { lines, .. } => output.push_str(&lines.join("\n")),
                Block::Spacer => {}
                Block::Paragraph { spans } => {
                    output.extend(spans.iter().map(InlineSpan::text));
                }
            }
            output.push('\n');
        }
        output
    }

    /// Renders blocks with ANSI escape codes for a terminal preview.
    pub fn to_ansi(blocks: &[Block]) -> String {
        let mut output = String::new();
        let mut ordinal = 0usize;
        for block in blocks {
            if !matches!(block, Block::ListItem { ordered: true, .. }) {
                ordinal = 0;
            }
            match block {
                Block::Heading { level: 1, text } => {
                    output.push_str(&format!("{BOLD}{UNDERLINE}{text}{RESET}\n"));
                }
                Block::Heading { text, .. } => output.push_str(&format!("{BOLD}{text}{RESET}\n")),
                Block::ListItem { ordered: false, text } => output.push_str(&format!("  • {text}\n")),
                Block::ListItem { ordered: true, text } => {
                    ordinal += 1;
                    output.push_str(&format!("  {ordinal}. {text}\n"));
                }
                Block::CodeBlock { language, lines } => {
                    let label = if language.is_empty() { "code" } else { language };
                    output.push_str(&format!("{DIM}┌─ {label}{RESET}\n"));
                    for line in lines {
                        output.push_str(&format!("{DIM}│{RESET} {line}\n"));
                    }
                    output.push_str(&format!("{DIM}└─{RESET}\n"));
                }
                Block::Spacer => output.push('\n'),
                Block::Paragraph { spans } => {
                    for span in spans {
                        if span.is_emphasized() {
                            output.push_str(&format!("{BOLD}{CYAN}{}{RESET}", span.text()));
                        } else {
                            output.push_str(span.text());
                        }
                    }
                    output.push('\n');
                }
            }
        }
        output
    }
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::render;

    #[test]
    fn html_for_each_block_kind() {
        let blocks = render("# Hello World\n- item\n1. first\n\n**bold** rest\n```rs\nlet x = 1;\n```");
        let html = Renderer::to_html(&blocks);
        assert!(html.contains("<h1 id=\"hello-world\">Hello World</h1>"));
        assert!(html.contains("<li class=\"unordered\">item</li>"));
        assert!(html.contains("<li class=\"ordered\">first</li>"));
        assert!(html.contains("<div class=\"spacer\"></div>"));
        assert!(html.contains("<p><strong>bold</strong> rest</p>"));
        assert!(html.contains("<pre><code class=\"language-rs\">let x = 1;</code></pre>"));
    }

    #[test]
    fn html_escapes_text_and_code() {
        let html = Renderer::to_html(&render("a <b> & \"c\"\n```\nif a < b && c {}\n```"));
        assert!(html.contains("<p>a &lt;b&gt; &amp; &quot;c&quot;</p>"));
        assert!(html.contains("<pre><code>if a &lt; b &amp;&amp; c {}</code></pre>"));
    }

    #[test]
    fn plain_text_strips_formatting() {
        let text = Renderer::to_plain_text(&render("## Title\n**x** y\n\n```\ncode\n```"));
        assert_eq!(text, "Title\nx y\n\ncode\n");
    }

    #[test]
    fn ansi_numbers_ordered_runs() {
        let out = Renderer::to_ansi(&render("5. a\n9. b\n\n1. c"));
        assert!(out.contains("  1. a\n  2. b\n"));
        assert!(out.ends_with("\n  1. c\n"));
    }

    #[test]
    fn emphasis_markup_per_output() {
        let blocks = render("a **<b>** c");
        assert_eq!(Renderer::to_html(&blocks), "<p>a <strong>&lt;b&gt;</strong> c</p>\n");
        assert_eq!(Renderer::to_ansi(&blocks), format!("a {BOLD}{CYAN}<b>{RESET} c\n"));
        assert_eq!(Renderer::to_plain_text(&blocks), "a <b> c\n");
    }

    #[test]
    fn ansi_labels_untagged_code() {
        let out = Renderer::to_ansi(&render("```\nx\n```"));
        assert!(out.contains("┌─ code"));
    }
}
