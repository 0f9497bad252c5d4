//! Quill configuration schema, typed for serde YAML deserialization.
//!
//! Every field has a default so a partial (or absent) file is valid.

use quill_logging::LogFormat;
use quill_markdown::summary::{DEFAULT_EXCERPT_CHARS, DEFAULT_WORDS_PER_MINUTE};
use quill_markdown::{DuplicateIds, ParseOptions, SummaryOptions, TocOptions, UnterminatedFence};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuillConfig {
    /// Parser and table-of-contents policies
    pub markdown: MarkdownSettings,
    /// Feed card settings
    pub summary: SummarySettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkdownSettings {
    pub unterminated_fence: UnterminatedFence,
    pub duplicate_ids: DuplicateIds,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummarySettings {
    pub words_per_minute: u32,
    pub excerpt_chars: usize,
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `quill_markdown=debug`
    pub level: String,
    pub format: LogFormat,
    /// Directory for rolling NDJSON files; console only when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            dir: None,
        }
    }
}

impl QuillConfig {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            unterminated_fence: self.markdown.unterminated_fence,
        }
    }

    pub fn toc_options(&self) -> TocOptions {
        TocOptions {
            duplicate_ids: self.markdown.duplicate_ids,
        }
    }

    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            words_per_minute: self.summary.words_per_minute,
            excerpt_chars: self.summary.excerpt_chars,
            parse: self.parse_options(),
            toc: self.toc_options(),
        }
    }
}
