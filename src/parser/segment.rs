//! Comment block segmentation — line-by-line state machine.
//!
//! A block opens on a line starting with `//` and closes (exclusive) on the
//! next line that starts with `{` or is blank. Everything in between, comment
//! run and definition lines alike, belongs to the block.

use regex::Regex;
use std::sync::LazyLock;

/// Comment marker that opens a block.
pub const COMMENT_MARKER: &str = "//";

static RE_BLANK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[[:space:]]*$").unwrap());

/// Half-open line range `[start, end)` of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    Inside { start: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanEvent {
    CommentLineSeen,
    BlockEndSeen,
}

impl ScanState {
    /// Apply `event` seen at line `index`; returns the closed span, if any.
    fn step(self, event: Option<ScanEvent>, index: usize) -> (Self, Option<BlockSpan>) {
        match (self, event) {
            (ScanState::Outside, Some(ScanEvent::CommentLineSeen)) => {
                (ScanState::Inside { start: index }, None)
            }
            (ScanState::Inside { start }, Some(ScanEvent::BlockEndSeen)) => {
                (ScanState::Outside, Some(BlockSpan { start, end: index }))
            }
            (state, _) => (state, None),
        }
    }
}

/// Classify a raw, untrimmed line.
fn classify(line: &str) -> Option<ScanEvent> {
    if line.starts_with('{') || RE_BLANK.is_match(line) {
        Some(ScanEvent::BlockEndSeen)
    } else if line.starts_with(COMMENT_MARKER) {
        Some(ScanEvent::CommentLineSeen)
    } else {
        None
    }
}

/// Scan `lines` once and return the span of every closed block, in order.
///
/// A block still open at end of input is dropped.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<BlockSpan> {
    let mut state = ScanState::Outside;
    let mut spans = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let (next, closed) = state.step(classify(line.as_ref()), index);
        spans.extend(closed);
        state = next;
    }

    if let ScanState::Inside { start } = state {
        tracing::debug!(line = start + 1, "dropping unterminated comment block");
    }

    spans
}

/// Materialize each block as its trimmed lines, paired with its span.
pub fn blocks<S: AsRef<str>>(lines: &[S]) -> Vec<(BlockSpan, Vec<String>)> {
    segment(lines)
        .into_iter()
        .map(|span| {
            let block = lines[span.start..span.end]
                .iter()
                .map(|l| l.as_ref().trim().to_string())
                .collect();
            (span, block)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        crate::source::split_lines(text)
    }

    #[test]
    fn brace_closes_block() {
        let input = lines("// Doc\nvoid\nf(int a)\n{\n}\n");
        assert_eq!(segment(&input), vec![BlockSpan { start: 0, end: 3 }]);
    }

    #[test]
    fn blank_line_closes_block() {
        let input = lines("// Doc\ntypedef struct {\n\tint x;\n} t;\n\nint y;\n");
        assert_eq!(segment(&input), vec![BlockSpan { start: 0, end: 4 }]);
    }

    #[test]
    fn whitespace_only_line_is_blank() {
        let input = lines("// Doc\nint x;\n \t \nint y;\n");
        assert_eq!(segment(&input), vec![BlockSpan { start: 0, end: 2 }]);
    }

    #[test]
    fn comment_lines_inside_block_do_not_restart_it() {
        let input = lines("// a\n// b\nvoid\n// c\nf()\n{\n");
        assert_eq!(segment(&input), vec![BlockSpan { start: 0, end: 5 }]);
    }

    #[test]
    fn indented_comment_does_not_open_block() {
        let input = lines("int f()\n{\n\t// body comment\n\treturn 0;\n}\n");
        assert!(segment(&input).is_empty());
    }

    #[test]
    fn unmatched_trailing_start_is_dropped() {
        let input = lines("// one\nvoid\na()\n{\n}\n// two\nvoid\nb()");
        let spans = segment(&input);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0], BlockSpan { start: 0, end: 3 });
    }

    #[test]
    fn multiple_blocks_in_order() {
        let input = lines("// a\nint\nf()\n{\n}\n\n// b\nint\ng()\n{\n}\n");
        assert_eq!(
            segment(&input),
            vec![
                BlockSpan { start: 0, end: 3 },
                BlockSpan { start: 6, end: 9 },
            ]
        );
    }

    #[test]
    fn blocks_are_trimmed() {
        let input = lines("// Doc  \n\tvoid\n  f()\n{\n");
        let found = blocks(&input);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].1, vec!["// Doc", "void", "f()"]);
    }

    #[test]
    fn blank_right_after_comment_closes_block() {
        let input = lines("// Orphan\n\nint x;\n");
        assert_eq!(segment(&input), vec![BlockSpan { start: 0, end: 1 }]);
    }
}
