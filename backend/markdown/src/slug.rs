//! Anchor slug generation for headings.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Turns heading text into a URL-safe anchor id.
///
/// Lowercases, drops everything that is not an ASCII word character,
/// whitespace or `-`, collapses separator runs into a single `-` and trims
/// hyphens from both ends. Non-ASCII letters are dropped, so a heading made
/// only of them yields an empty slug.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = STRIP_RE.replace_all(lowered.trim(), "");
    SEPARATOR_RE
        .replace_all(&stripped, "-")
        .trim_matches('-')
        .to_string()
}

/// Hands out unique slugs within one document.
///
/// The first occurrence keeps its slug; later ones get `-1`, `-2`, ... .
/// Generated suffixes never collide with a reserved slug, so a literal
/// heading such as "A-1" keeps `a-1` even when it comes after two "A"s.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    reserved: HashSet<String>,
    taken: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that will not generate any of `literal` as a suffixed slug.
    pub fn with_reserved<I>(literal: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            reserved: literal.into_iter().collect(),
            taken: HashSet::new(),
        }
    }

    pub fn claim(&mut self, slug: String) -> String {
        if self.taken.insert(slug.clone()) {
            return slug;
        }
        let mut n = 1usize;
        loop {
            let candidate = format!("{slug}-{n}");
            if !self.reserved.contains(&candidate) && self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("Sub Heading"), "sub-heading");
    }

    #[test]
    fn test_slugify_punctuation() {
        assert_eq!(slugify("What's new in v2.0?"), "whats-new-in-v20");
    }

    #[test]
    fn test_slugify_separator_runs() {
        assert_eq!(slugify("  snake_case -- and   spaces "), "snake-case-and-spaces");
        assert_eq!(slugify("-edge-"), "edge");
    }

    #[test]
    fn test_slugify_non_ascii() {
        assert_eq!(slugify("Café au lait"), "caf-au-lait");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn test_registry_suffixes_duplicates() {
        let mut registry = SlugRegistry::new();
        assert_eq!(registry.claim("a".into()), "a");
        assert_eq!(registry.claim("a".into()), "a-1");
        assert_eq!(registry.claim("a".into()), "a-2");
    }

    #[test]
    fn test_registry_skips_literal_suffix() {
        let mut registry = SlugRegistry::new();
        assert_eq!(registry.claim("a-1".into()), "a-1");
        assert_eq!(registry.claim("a".into()), "a");
        assert_eq!(registry.claim("a".into()), "a-2");
    }

    #[test]
    fn test_registry_keeps_reserved_for_later_literal() {
        let mut registry = SlugRegistry::with_reserved(["a".to_string(), "a-1".to_string()]);
        assert_eq!(registry.claim("a".into()), "a");
        assert_eq!(registry.claim("a".into()), "a-2");
        assert_eq!(registry.claim("a-1".into()), "a-1");
    }
}
