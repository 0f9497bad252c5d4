//! `quill render` — parse a post and print it in the requested format.

use anyhow::Result;
use clap::ValueEnum;
use quill_markdown::{BlockParser, ParseOptions, Renderer};

use crate::input::read_input;
use crate::terminal_output::supports_color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Html,
    Text,
    /// Colored terminal preview (falls back to text without color support)
    Ansi,
    /// Block IR as JSON
    Json,
}

pub fn render(text: &str, format: RenderFormat, options: ParseOptions) -> Result<String> {
    let blocks = BlockParser::new(options).parse(text);
    let output = match format {
        RenderFormat::Html => Renderer::to_html(&blocks),
        RenderFormat::Text => Renderer::to_plain_text(&blocks),
        RenderFormat::Ansi if supports_color() => Renderer::to_ansi(&blocks),
        RenderFormat::Ansi => Renderer::to_plain_text(&blocks),
        RenderFormat::Json => serde_json::to_string_pretty(&blocks)? + "\n",
    };
    Ok(output)
}

pub async fn run(input: &str, format: RenderFormat, options: ParseOptions) -> Result<()> {
    let text = read_input(input).await?;
    print!("{}", render(&text, format, options)?);
    Ok(())
}
