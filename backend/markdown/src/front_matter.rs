//! Leading `---` metadata block.
//!
//! The block is only recognised when the very first line trims to `---`; it
//! ends at the next line that also trims to `---`. Without a closing line
//! there is no block at all.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

pub const DELIMITER: &str = "---";

/// Index of the closing delimiter line, if `lines` opens with a metadata block.
pub fn closing_line(lines: &[&str]) -> Option<usize> {
    if lines.first()?.trim() != DELIMITER {
        return None;
    }
    lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == DELIMITER)
        .map(|(i, _)| i)
}

/// First line index after the metadata block, or 0 if there is none.
pub fn body_start(lines: &[&str]) -> usize {
    closing_line(lines).map_or(0, |i| i + 1)
}

/// Splits `text` into the raw metadata block (without delimiters) and the body.
pub fn split(text: &str) -> (Option<&str>, &str) {
    let mut lines = text.split('\n');
    let Some(first) = lines.next() else {
        return (None, text);
    };
    if first.trim() != DELIMITER {
        return (None, text);
    }

    let yaml_start = first.len() + 1;
    let mut offset = yaml_start;
    for line in lines {
        let line_end = offset + line.len();
        if line.trim() == DELIMITER {
            let body = text.get(line_end + 1..).unwrap_or("");
            return (Some(&text[yaml_start..offset]), body);
        }
        offset = line_end + 1;
    }
    (None, text)
}

/// Deserializes the metadata block as YAML.
///
/// Returns `Ok(None)` when there is no block or the block is blank.
pub fn parse<T: DeserializeOwned>(text: &str) -> Result<Option<T>> {
    let (Some(raw), _) = split(text) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let meta = serde_yaml::from_str(raw)?;
    debug!(bytes = raw.len(), "Parsed metadata block");
    Ok(Some(meta))
}

/// Post metadata as written by the authoring studio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_closing_line() {
        let lines = ["---", "title: X", "---", "# Heading"];
        assert_eq!(closing_line(&lines), Some(2));
        assert_eq!(body_start(&lines), 3);
    }

    #[test]
    fn unclosed_block_starts_at_zero() {
        let lines = ["---", "title: X", "# Heading"];
        assert_eq!(closing_line(&lines), None);
        assert_eq!(body_start(&lines), 0);
    }

    #[test]
    fn block_must_open_on_first_line() {
        let lines = ["", "---", "a: b", "---"];
        assert_eq!(closing_line(&lines), None);
    }

    #[test]
    fn split_returns_yaml_and_body() {
        let (yaml, body) = split("---\ntitle: X\n---\n# Heading\n");
        assert_eq!(yaml, Some("title: X\n"));
        assert_eq!(body, "# Heading\n");
    }

    #[test]
    fn split_without_block() {
        let (yaml, body) = split("# Heading");
        assert_eq!(yaml, None);
        assert_eq!(body, "# Heading");
    }

    #[test]
    fn split_block_at_end_of_text() {
        let (yaml, body) = split("---\na: 1\n---");
        assert_eq!(yaml, Some("a: 1\n"));
        assert_eq!(body, "");
    }

    #[test]
    fn parses_post_meta() {
        let text = "---\ntitle: Hello\ntags: [rust, web]\ncoverImage: /c.png\n---\nBody";
        let meta: PostMeta = parse(text).unwrap().unwrap();
        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.tags, vec!["rust", "web"]);
        assert_eq!(meta.cover_image.as_deref(), Some("/c.png"));
        assert!(meta.excerpt.is_none());
    }

    #[test]
    fn blank_block_is_none() {
        let meta: Option<PostMeta> = parse("---\n\n---\nBody").unwrap();
        assert!(meta.is_none());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result: Result<Option<PostMeta>> = parse("---\ntitle: [unclosed\n---\n");
        assert!(result.is_err());
    }
}
