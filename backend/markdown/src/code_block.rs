//! Code Block Semantic Utility
//!
//! Collects fenced code from a parsed document and replaces it for consumers
//! that cannot present code (voice readers, excerpts).

use crate::ir::{Block, InlineSpan};

/// Label used when a fence carries no language tag.
pub const UNTAGGED_LANGUAGE: &str = "text";

pub struct CodeBlockAnalyzer;

impl CodeBlockAnalyzer {
    /// Extracts `(language, content)` pairs in document order.
    pub fn extract_blocks(blocks: &[Block]) -> Vec<(String, String)> {
        blocks
            .iter()
            .filter_map(|block| match block {
                Block::CodeBlock { language, lines } => Some((language.clone(), lines.join("\n"))),
                _ => None,
            })
            .collect()
    }

    /// Distinct languages in first-seen order.
    pub fn languages(blocks: &[Block]) -> Vec<String> {
        let mut languages: Vec<String> = Vec::new();
        for block in blocks {
            if let Block::CodeBlock { language, .. } = block {
                let language = if language.trim().is_empty() {
                    UNTAGGED_LANGUAGE
                } else {
                    language.trim()
                };
                if !languages.iter().any(|seen| seen == language) {
                    languages.push(language.to_string());
                }
            }
        }
        languages
    }

    /// Replaces code blocks with a one-line placeholder paragraph.
    pub fn strip_code(blocks: Vec<Block>) -> Vec<Block> {
        blocks
            .into_iter()
            .map(|block| match block {
                Block::CodeBlock { language, .. } => {
                    let label = if language.is_empty() { "Code" } else { language.as_str() };
                    Block::paragraph(vec![InlineSpan::Plain(format!("[{label} example omitted]"))])
                }
                other => other,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::render;

    const DOC: &str = "intro\n```rust\nfn a() {}\nfn b() {}\n```\n```\nplain\n```\n```rust\n```";

    #[test]
    fn extracts_in_order() {
        let blocks = CodeBlockAnalyzer::extract_blocks(&render(DOC));
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], ("rust".to_string(), "fn a() {}\nfn b() {}".to_string()));
        assert_eq!(blocks[1], (String::new(), "plain".to_string()));
        assert_eq!(blocks[2], ("rust".to_string(), String::new()));
    }

    #[test]
    fn distinct_languages() {
        assert_eq!(CodeBlockAnalyzer::languages(&render(DOC)), vec!["rust", "text"]);
    }

    #[test]
    fn strips_code_for_voice() {
        let stripped = CodeBlockAnalyzer::strip_code(render("```py\nx = 1\n```"));
        assert_eq!(
            stripped,
            vec![Block::paragraph(vec![InlineSpan::Plain("[py example omitted]".into())])]
        );
    }
}
