//! Markdown Intermediate Representation
//!
//! Strongly-typed node model produced by the block parser and the heading
//! extractor. Presentation lives in [`crate::renderer`], so these types carry
//! no styling and can be rendered to any target.

use serde::{Deserialize, Serialize};

/// One structural unit of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// `#`, `##` or `###` heading. Level is always 1..=3.
    Heading { level: u8, text: String },
    ListItem { ordered: bool, text: String },
    /// Verbatim fenced code. `language` is empty when the fence had no tag.
    CodeBlock { language: String, lines: Vec<String> },
    /// Blank line.
    Spacer,
    Paragraph { spans: Vec<InlineSpan> },
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading { level, text: text.into() }
    }

    pub fn list_item(ordered: bool, text: impl Into<String>) -> Self {
        Block::ListItem { ordered, text: text.into() }
    }

    pub fn paragraph(spans: Vec<InlineSpan>) -> Self {
        Block::Paragraph { spans }
    }
}

/// A run of text inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum InlineSpan {
    Plain(String),
    Emphasized(String),
}

impl InlineSpan {
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(text) | InlineSpan::Emphasized(text) => text,
        }
    }

    pub fn is_emphasized(&self) -> bool {
        matches!(self, InlineSpan::Emphasized(_))
    }
}

/// A table-of-contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Anchor slug derived from `text`.
    pub id: String,
    pub text: String,
    /// 1..=6
    pub level: u8,
}
