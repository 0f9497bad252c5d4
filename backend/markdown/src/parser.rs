//! Block parser
//!
//! Single forward pass over `\n`-separated lines. A two-state machine tracks
//! whether we are inside a fenced code block; outside a fence each line is
//! classified by prefix into exactly one [`Block`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, trace};

use crate::inline::split_emphasis;
use crate::ir::Block;

pub const FENCE: &str = "```";

static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\. ").unwrap());

/// What to do with a code fence that is still open at end of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnterminatedFence {
    /// Drop the pending lines.
    #[default]
    Discard,
    /// Emit them as a best-effort code block.
    Flush,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub unterminated_fence: UnterminatedFence,
}

#[derive(Debug, Default)]
struct FenceAccumulator {
    language: String,
    lines: Vec<String>,
}

impl FenceAccumulator {
    fn into_block(self) -> Block {
        Block::CodeBlock {
            language: self.language,
            lines: self.lines,
        }
    }
}

#[derive(Debug, Default)]
enum FenceState {
    #[default]
    Normal,
    InFence(FenceAccumulator),
}

/// Returns the text after the fence marker if `line` is a fence delimiter.
pub(crate) fn fence_info(line: &str) -> Option<&str> {
    line.trim().strip_prefix(FENCE)
}

pub struct BlockParser {
    options: ParseOptions,
}

impl BlockParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parses `text` into blocks. Never fails; unmatched constructs fall
    /// back to paragraphs.
    pub fn parse(&self, text: &str) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut state = FenceState::Normal;

        for (index, line) in text.split('\n').enumerate() {
            if let Some(info) = fence_info(line) {
                state = match state {
                    FenceState::Normal => {
                        trace!(line = index, language = info, "Opening code fence");
                        FenceState::InFence(FenceAccumulator {
                            language: info.to_string(),
                            lines: Vec::new(),
                        })
                    }
                    FenceState::InFence(acc) => {
                        trace!(line = index, "Closing code fence");
                        blocks.push(acc.into_block());
                        FenceState::Normal
                    }
                };
                continue;
            }

            if let FenceState::InFence(acc) = &mut state {
                acc.lines.push(line.to_string());
                continue;
            }

            blocks.push(classify(line));
        }

        if let FenceState::InFence(acc) = state {
            match self.options.unterminated_fence {
                UnterminatedFence::Discard => {
                    debug!(lines = acc.lines.len(), "Discarding unterminated code fence");
                }
                UnterminatedFence::Flush => {
                    debug!(lines = acc.lines.len(), "Flushing unterminated code fence");
                    blocks.push(acc.into_block());
                }
            }
        }

        debug!(blocks = blocks.len(), "Parsed markdown");
        blocks
    }
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

fn classify(line: &str) -> Block {
    if let Some(text) = line.strip_prefix("# ") {
        Block::heading(1, text)
    } else if let Some(text) = line.strip_prefix("## ") {
        Block::heading(2, text)
    } else if let Some(text) = line.strip_prefix("### ") {
        Block::heading(3, text)
    } else if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        Block::list_item(false, text)
    } else if let Some(prefix) = ORDERED_ITEM_RE.find(line) {
        Block::list_item(true, &line[prefix.end()..])
    } else if line.trim().is_empty() {
        Block::Spacer
    } else {
        Block::paragraph(split_emphasis(line))
    }
}

/// Parses `text` with the default options.
pub fn render(text: &str) -> Vec<Block> {
    BlockParser::default().parse(text)
}
