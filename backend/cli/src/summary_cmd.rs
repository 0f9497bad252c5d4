//! `quill summary` — feed card facts for a post.

use anyhow::Result;
use clap::ValueEnum;
use quill_markdown::{PostSummary, SummaryOptions};

use crate::input::read_input;
use crate::terminal_output::{Column, render_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Text,
    Json,
}

pub fn format_summary(summary: &PostSummary, format: SummaryFormat) -> Result<String> {
    let output = match format {
        SummaryFormat::Text => {
            let rows = vec![
                row("Title", summary.title.as_deref().unwrap_or("(untitled)")),
                row("Slug", &summary.slug),
                row("Reading time", &summary.reading_time),
                row("Excerpt", &summary.excerpt),
                row("Tags", &summary.tags.join(", ")),
                row("Headings", &summary.heading_count.to_string()),
                row("Code", &summary.code_languages.join(", ")),
            ];
            render_table(&[Column::left("Field"), Column::left("Value")], &rows)
        }
        SummaryFormat::Json => serde_json::to_string_pretty(summary)? + "\n",
    };
    Ok(output)
}

fn row(field: &str, value: &str) -> Vec<String> {
    vec![field.to_string(), value.to_string()]
}

pub async fn run(input: &str, format: SummaryFormat, options: &SummaryOptions) -> Result<()> {
    let text = read_input(input).await?;
    let summary = PostSummary::from_markdown(&text, options);
    print!("{}", format_summary(&summary, format)?);
    Ok(())
}
