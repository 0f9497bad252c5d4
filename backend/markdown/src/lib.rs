//! Markdown block parser, table-of-contents extractor and renderers for Quill.
//!
//! Two independent, pure passes over the same raw text:
//! - [`render`] turns Markdown into a flat list of [`Block`]s.
//! - [`extract_headings`] builds the table of contents, skipping a leading
//!   `---` metadata block and fenced code.
//!
//! Presentation is a separate step ([`Renderer`]).

pub mod code_block;
pub mod error;
pub mod front_matter;
pub mod inline;
pub mod ir;
pub mod parser;
pub mod renderer;
pub mod slug;
pub mod summary;
pub mod toc;

pub use code_block::CodeBlockAnalyzer;
pub use error::MarkdownError;
pub use front_matter::PostMeta;
pub use ir::{Block, Heading, InlineSpan};
pub use parser::{BlockParser, ParseOptions, UnterminatedFence, render};
pub use renderer::Renderer;
pub use slug::{SlugRegistry, slugify};
pub use summary::{PostSummary, SummaryOptions};
pub use toc::{DuplicateIds, TocNode, TocOptions, extract_headings, extract_headings_with, nest};
