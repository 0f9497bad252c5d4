//! Error types for the fallible corners of the pipeline.
//!
//! Parsing and heading extraction never fail; only deserializing a metadata
//! block can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkdownError {
    #[error("Invalid metadata block: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;
