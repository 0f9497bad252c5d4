//! Post summary helpers used by the feed and the authoring studio.

use serde::Serialize;
use tracing::warn;

use crate::code_block::CodeBlockAnalyzer;
use crate::front_matter::{self, PostMeta};
use crate::parser::{BlockParser, ParseOptions};
use crate::renderer::Renderer;
use crate::slug::slugify;
use crate::toc::{TocOptions, extract_headings_with};

pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;
pub const DEFAULT_EXCERPT_CHARS: usize = 150;
pub const UNTITLED_SLUG: &str = "untitled";

/// Minutes needed to read `text`, counting space-separated segments.
pub fn reading_time(text: &str, words_per_minute: u32) -> u32 {
    let words = text.split(' ').count() as u64;
    let wpm = u64::from(words_per_minute.max(1));
    words.div_ceil(wpm) as u32
}

pub fn format_reading_time(minutes: u32) -> String {
    format!("{minutes} min read")
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// URL slug for a post title.
pub fn title_slug(title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        UNTITLED_SLUG.to_string()
    } else {
        slug
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    pub words_per_minute: u32,
    pub excerpt_chars: usize,
    pub parse: ParseOptions,
    pub toc: TocOptions,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            parse: ParseOptions::default(),
            toc: TocOptions::default(),
        }
    }
}

/// Card-level facts about a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub title: Option<String>,
    pub slug: String,
    pub excerpt: String,
    pub reading_time: String,
    pub tags: Vec<String>,
    pub heading_count: usize,
    pub code_languages: Vec<String>,
}

impl PostSummary {
    /// Builds a summary, preferring metadata block fields over derived ones.
    ///
    /// A `---` block that is not a YAML mapping of post fields (a prose line,
    /// a list) is treated as carrying no metadata; title and excerpt then come
    /// from the body. The block itself stays out of the body either way, as it
    /// does for the table of contents.
    pub fn from_markdown(text: &str, options: &SummaryOptions) -> Self {
        let meta: PostMeta = match front_matter::parse(text) {
            Ok(meta) => meta.unwrap_or_default(),
            Err(err) => {
                warn!(error = %err, "Ignoring metadata block that is not post metadata");
                PostMeta::default()
            }
        };
        let (_, body) = front_matter::split(text);

        let headings = extract_headings_with(text, options.toc);
        let blocks = BlockParser::new(options.parse).parse(body);

        let title = meta.title.or_else(|| {
            headings
                .iter()
                .find(|heading| heading.level == 1)
                .map(|heading| heading.text.clone())
        });
        let slug = title_slug(title.as_deref().unwrap_or_default());

        let excerpt_text = match meta.excerpt {
            Some(excerpt) => excerpt,
            None => {
                let prose = Renderer::to_plain_text(&CodeBlockAnalyzer::strip_code(blocks.clone()));
                excerpt(
                    &prose.split_whitespace().collect::<Vec<_>>().join(" "),
                    options.excerpt_chars,
                )
            }
        };

        Self {
            title,
            slug,
            excerpt: excerpt_text,
            reading_time: format_reading_time(reading_time(body, options.words_per_minute)),
            tags: meta.tags,
            heading_count: headings.len(),
            code_languages: CodeBlockAnalyzer::languages(&blocks),
        }
    }
}
