//! Inline emphasis splitting.

use crate::ir::InlineSpan;

pub const EMPHASIS_DELIMITER: &str = "**";

/// Splits a paragraph line on `**` into alternating plain/emphasized spans.
///
/// Segment parity decides the tag (even = plain, odd = emphasized), so an odd
/// number of delimiters leaves the trailing segment emphasized with no
/// closing marker. Empty segments still advance the alternation but are not
/// emitted.
pub fn split_emphasis(line: &str) -> Vec<InlineSpan> {
    line.split(EMPHASIS_DELIMITER)
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(i, segment)| {
            if i % 2 == 1 {
                InlineSpan::Emphasized(segment.to_string())
            } else {
                InlineSpan::Plain(segment.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use InlineSpan::{Emphasized, Plain};

    #[test]
    fn leading_emphasis() {
        assert_eq!(
            split_emphasis("**bold** and plain"),
            vec![Emphasized("bold".into()), Plain(" and plain".into())]
        );
    }

    #[test]
    fn no_delimiters() {
        assert_eq!(split_emphasis("just text"), vec![Plain("just text".into())]);
    }

    #[test]
    fn unbalanced_delimiter_keeps_alternation() {
        assert_eq!(
            split_emphasis("a **b** c **d"),
            vec![
                Plain("a ".into()),
                Emphasized("b".into()),
                Plain(" c ".into()),
                Emphasized("d".into()),
            ]
        );
    }

    #[test]
    fn adjacent_delimiters() {
        // "x", "", "y": the empty emphasized segment is dropped, "y" stays plain.
        assert_eq!(
            split_emphasis("x****y"),
            vec![Plain("x".into()), Plain("y".into())]
        );
    }
}
