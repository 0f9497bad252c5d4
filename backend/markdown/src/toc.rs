//! Table-of-contents extraction.
//!
//! Walks the document once, skipping a leading metadata block and fenced code,
//! and records every `#`..`######` heading with its anchor slug.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

use crate::front_matter;
use crate::ir::Heading;
use crate::parser::fence_info;
use crate::slug::{SlugRegistry, slugify};

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

/// How to treat headings whose slugs collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIds {
    /// Identical headings share one id.
    #[default]
    Keep,
    /// Later duplicates get `-1`, `-2`, ... appended.
    Suffix,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TocOptions {
    pub duplicate_ids: DuplicateIds,
}

/// Extracts headings with the default options.
pub fn extract_headings(text: &str) -> Vec<Heading> {
    extract_headings_with(text, TocOptions::default())
}

pub fn extract_headings_with(text: &str, options: TocOptions) -> Vec<Heading> {
    if text.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let start = front_matter::body_start(&lines);
    let mut in_fence = false;
    let matches: Vec<(u8, String)> = lines[start..]
        .iter()
        .filter_map(|line| {
            if fence_info(line).is_some() {
                in_fence = !in_fence;
                return None;
            }
            if in_fence {
                return None;
            }
            match_heading(line)
        })
        .collect();

    // Every literal slug is reserved up front so suffixes never steal one.
    let mut registry =
        SlugRegistry::with_reserved(matches.iter().map(|(_, title)| slugify(title)));
    let headings: Vec<Heading> = matches
        .into_iter()
        .map(|(level, title)| {
            let id = match options.duplicate_ids {
                DuplicateIds::Keep => slugify(&title),
                DuplicateIds::Suffix => registry.claim(slugify(&title)),
            };
            Heading {
                id,
                text: title,
                level,
            }
        })
        .collect();

    debug!(headings = headings.len(), skipped_lines = start, "Extracted table of contents");
    headings
}

/// Matches one trimmed line against the heading pattern and cleans its text.
fn match_heading(line: &str) -> Option<(u8, String)> {
    let caps = HEADING_RE.captures(line.trim())?;
    let level = caps[1].len() as u8;
    let cleaned: String = caps[2]
        .trim()
        .chars()
        .filter(|c| !matches!(c, '#' | '*' | '`'))
        .collect();
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| (level, cleaned.to_string()))
}

/// A heading with the deeper headings that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocNode {
    #[serde(flatten)]
    pub heading: Heading,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocNode>,
}

/// Groups a flat heading list into a tree.
///
/// Each heading adopts the following headings with a strictly greater level
/// until one of equal or lower level appears. Level gaps are tolerated.
pub fn nest(headings: &[Heading]) -> Vec<TocNode> {
    let mut roots = Vec::new();
    let mut rest = headings;
    while let Some((node, remaining)) = take_node(rest) {
        roots.push(node);
        rest = remaining;
    }
    roots
}

fn take_node(headings: &[Heading]) -> Option<(TocNode, &[Heading])> {
    let (first, mut rest) = headings.split_first()?;
    let mut children = Vec::new();
    while rest.first().is_some_and(|next| next.level > first.level) {
        let Some((child, remaining)) = take_node(rest) else {
            break;
        };
        children.push(child);
        rest = remaining;
    }
    Some((
        TocNode {
            heading: first.clone(),
            children,
        },
        rest,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(id: &str, text: &str, level: u8) -> Heading {
        Heading {
            id: id.into(),
            text: text.into(),
            level,
        }
    }

    #[test]
    fn extracts_levels_in_order() {
        assert_eq!(
            extract_headings("# Title\n\n## Sub Heading\n"),
            vec![h("title", "Title", 1), h("sub-heading", "Sub Heading", 2)]
        );
    }

    #[test]
    fn ignores_fenced_content() {
        assert_eq!(
            extract_headings("```\n# not a heading\n```\n# Real\n"),
            vec![h("real", "Real", 1)]
        );
    }

    #[test]
    fn skips_metadata_block() {
        assert_eq!(
            extract_headings("---\ntitle: X\n---\n# Heading\n"),
            vec![h("heading", "Heading", 1)]
        );
    }

    #[test]
    fn unclosed_metadata_scans_from_start() {
        assert_eq!(
            extract_headings("---\n# Heading\n"),
            vec![h("heading", "Heading", 1)]
        );
    }

    #[test]
    fn duplicate_ids_kept_by_default() {
        assert_eq!(
            extract_headings("# A\n# A\n"),
            vec![h("a", "A", 1), h("a", "A", 1)]
        );
    }

    #[test]
    fn duplicate_ids_suffixed_on_request() {
        let options = TocOptions {
            duplicate_ids: DuplicateIds::Suffix,
        };
        let ids: Vec<_> = extract_headings_with("# A\n## A\n### A\n", options)
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, vec!["a", "a-1", "a-2"]);
    }

    #[test]
    fn suffixes_skip_literal_slugs_anywhere_in_document() {
        let options = TocOptions {
            duplicate_ids: DuplicateIds::Suffix,
        };
        let ids: Vec<_> = extract_headings_with("# A\n# A\n# A-1\n", options)
            .into_iter()
            .map(|h| h.id)
            .collect();
        assert_eq!(ids, vec!["a", "a-2", "a-1"]);
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "---\ntitle: X\n---\n# Intro\n```md\n# Hidden\n```\n## Intro\n## Intro\n";
        for options in [
            TocOptions::default(),
            TocOptions {
                duplicate_ids: DuplicateIds::Suffix,
            },
        ] {
            let first = extract_headings_with(text, options);
            assert_eq!(first.len(), 3);
            assert_eq!(first, extract_headings_with(text, options));
        }
    }

    #[test]
    fn all_six_levels_and_no_seventh() {
        let text = "# 1\n## 2\n### 3\n#### 4\n##### 5\n###### 6\n####### 7";
        let levels: Vec<_> = extract_headings(text).into_iter().map(|h| h.level).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn requires_space_after_hashes() {
        assert!(extract_headings("#Tag\n##\n# ").is_empty());
    }

    #[test]
    fn indented_heading_matches() {
        assert_eq!(extract_headings("   ## Indented  "), vec![h("indented", "Indented", 2)]);
    }

    #[test]
    fn cleans_markup_characters() {
        assert_eq!(
            extract_headings("## **Bold** `code` #tag ##"),
            vec![h("bold-code-tag", "Bold code tag", 2)]
        );
    }

    #[test]
    fn heading_of_only_markup_is_dropped() {
        assert!(extract_headings("# ** ``").is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(extract_headings("").is_empty());
    }

    #[test]
    fn unterminated_fence_hides_rest() {
        assert_eq!(
            extract_headings("# Before\n```\n# Inside"),
            vec![h("before", "Before", 1)]
        );
    }

    #[test]
    fn nests_by_level() {
        let flat = extract_headings("# A\n## B\n### C\n## D\n# E\n### F");
        let tree = nest(&flat);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].heading.text, "A");
        assert_eq!(tree[0].children.len(), 2);
        assert_eq!(tree[0].children[0].children[0].heading.text, "C");
        assert_eq!(tree[1].children[0].heading.text, "F");
    }

    #[test]
    fn nest_starting_deep() {
        let flat = extract_headings("### Deep\n# Top");
        let tree = nest(&flat);
        assert_eq!(tree.len(), 2);
        assert!(tree[0].children.is_empty());
    }
}
