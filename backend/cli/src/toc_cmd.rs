//! `quill toc` — print the table of contents of a post.

use anyhow::Result;
use clap::ValueEnum;
use quill_markdown::{Heading, TocNode, TocOptions, extract_headings_with, nest};

use crate::input::read_input;
use crate::terminal_output::{Column, render_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TocFormat {
    /// Nested Markdown link list
    Tree,
    Table,
    Json,
}

pub fn format_toc(headings: &[Heading], format: TocFormat) -> Result<String> {
    let output = match format {
        TocFormat::Tree => {
            let mut out = String::new();
            write_tree(&nest(headings), 0, &mut out);
            out
        }
        TocFormat::Table => {
            let columns = [Column::right("Level"), Column::left("Id"), Column::left("Text")];
            let rows: Vec<Vec<String>> = headings
                .iter()
                .map(|h| vec![h.level.to_string(), h.id.clone(), h.text.clone()])
                .collect();
            render_table(&columns, &rows)
        }
        TocFormat::Json => serde_json::to_string_pretty(headings)? + "\n",
    };
    Ok(output)
}

fn write_tree(nodes: &[TocNode], depth: usize, out: &mut String) {
    for node in nodes {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&format!(
            "- [{}](#{})\n",
            escape_link_text(&node.heading.text),
            node.heading.id
        ));
        write_tree(&node.children, depth + 1, out);
    }
}

/// Backslash-escapes the characters that would end or nest a link label.
fn escape_link_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub async fn run(input: &str, format: TocFormat, options: TocOptions) -> Result<()> {
    let text = read_input(input).await?;
    let headings = extract_headings_with(&text, options);
    if headings.is_empty() {
        tracing::info!(input, "No headings found");
    }
    print!("{}", format_toc(&headings, format)?);
    Ok(())
}
