//! Parser module — segment the source into blocks, then parse each block.

pub mod block;
pub mod segment;

use crate::error::DocError;
use crate::model::DocRecord;

/// Parse every closed comment block in `lines` into a record, in source order.
///
/// Malformed blocks still produce a (partial) record and are reported as
/// warnings.
pub fn parse_source<S: AsRef<str>>(lines: &[S]) -> Vec<DocRecord> {
    let records: Vec<DocRecord> = segment::blocks(lines)
        .into_iter()
        .map(|(span, lines)| {
            let (record, issue) = block::analyze(&lines);
            if let Some(reason) = issue {
                tracing::warn!("{}", DocError::malformed(span.start + 1, reason));
            }
            record
        })
        .collect();

    tracing::debug!(
        records = records.len(),
        structs = records.iter().filter(|r| r.is_struct()).count(),
        incomplete = records.iter().filter(|r| !r.is_complete()).count(),
        "parsed comment blocks"
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::split_lines;

    #[test]
    fn one_record_per_closed_block() {
        let input = split_lines(
            "// a\nint\nf()\n{\n}\n\n// orphan\n\n// b\ntypedef struct {\nint x;\n} b_t;\n\n// dangling\nint\n",
        );
        let spans = segment::segment(&input);
        let records = parse_source(&input);
        assert_eq!(spans.len(), 3);
        assert_eq!(records.len(), spans.len());
    }

    #[test]
    fn records_follow_source_order() {
        let input = split_lines("// first\nvoid\nalpha()\n{\n}\n\n// second\nvoid\nbeta()\n{\n}\n");
        let names: Vec<_> = parse_source(&input)
            .into_iter()
            .map(|r| r.name.unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn blank_terminated_comment_has_no_definition() {
        let input = split_lines("// Just a note.\n\nint x;\n");
        let records = parse_source(&input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, Some(vec!["Just a note.".to_string()]));
        assert_eq!(records[0].name, None);
        assert_eq!(records[0].parameters, None);
        assert_eq!(records[0].return_type, None);
    }

    #[test]
    fn malformed_block_does_not_affect_neighbours() {
        let input = split_lines("// broken\nint counter;\n\n// ok\nint\ng(int a)\n{\n}\n");
        let records = parse_source(&input);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, None);
        assert_eq!(records[1].name.as_deref(), Some("g"));
    }

    #[test]
    fn file_ending_inside_block_drops_it() {
        let input = split_lines("// one\nint\na()\n{\n}\n// two\nint\nb()");
        assert_eq!(parse_source(&input).len(), 1);
    }
}
