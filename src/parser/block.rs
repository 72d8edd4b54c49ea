//! Block parser — splits a block into description and definition and
//! extracts the name, return type and parameters of the definition.

use super::segment::COMMENT_MARKER;
use crate::model::{DocRecord, STRUCT_MARKER};
use regex::Regex;
use std::sync::LazyLock;

// Text before `(` on a one-line signature: optional return type, then the name.
static RE_SIGNATURE_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<ret>.*?)[[:space:]]*(?P<name>[A-Za-z_][A-Za-z0-9_]*)[[:space:]]*$").unwrap()
});

/// Parse one block of trimmed lines into a record.
///
/// Never fails: anything that can't be extracted is left as `None`.
#[allow(dead_code)]
pub fn parse_block<S: AsRef<str>>(block: &[S]) -> DocRecord {
    analyze(block).0
}

/// Like [`parse_block`], also returning why the block is incomplete, if it is.
pub fn analyze<S: AsRef<str>>(block: &[S]) -> (DocRecord, Option<String>) {
    let start = definition_start(block);
    let (description, definition) = block.split_at(start.unwrap_or(block.len()));

    let description = description
        .iter()
        .map(|line| line.as_ref().replace(COMMENT_MARKER, "").trim().to_string())
        .collect();

    let mut record = DocRecord {
        description: Some(description),
        ..Default::default()
    };

    let Some(first) = definition.first() else {
        return (record, Some("no definition line after comment".to_string()));
    };

    let issue = if first.as_ref().contains(STRUCT_MARKER) {
        parse_struct(definition, &mut record)
    } else {
        parse_function(definition, &mut record)
    };

    (record, issue)
}

/// Index of the first line that isn't a comment.
fn definition_start<S: AsRef<str>>(block: &[S]) -> Option<usize> {
    block
        .iter()
        .position(|line| !line.as_ref().starts_with(COMMENT_MARKER))
}

/// `typedef struct {` ... `} name;` — fields are the lines in between.
///
/// Only a single-line closing declaration is understood.
fn parse_struct<S: AsRef<str>>(definition: &[S], record: &mut DocRecord) -> Option<String> {
    record.return_type = Some(STRUCT_MARKER.to_string());

    let fields: &[S] = if definition.len() > 2 {
        &definition[1..definition.len() - 1]
    } else {
        &[]
    };
    record.parameters = Some(
        fields
            .iter()
            .map(|field| field.as_ref().replace(';', ""))
            .collect(),
    );

    let last: &str = definition.last().map(|l| l.as_ref()).unwrap_or("");
    let name = last
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .replace(';', "");
    if name.is_empty() || name == "}" {
        return Some(format!("no struct name in closing line `{}`", last));
    }
    record.name = Some(name);
    None
}

fn parse_function<S: AsRef<str>>(definition: &[S], record: &mut DocRecord) -> Option<String> {
    let first = definition[0].as_ref();

    let (return_type, signature) = if first.contains('(') {
        (None, join_lines(definition))
    } else {
        // K&R layout: the return type sits alone on the first line
        (Some(first.to_string()), join_lines(&definition[1..]))
    };

    let Some(open) = signature.find('(') else {
        record.return_type = return_type;
        return Some(format!("no parameter list in `{}`", signature));
    };

    let head = signature[..open].trim();
    let (return_type, name) = match return_type {
        Some(rt) => (Some(rt), non_empty(head)),
        None => split_head(head),
    };
    record.return_type = return_type;
    record.parameters = Some(split_parameters(&signature[open + 1..]));

    match name {
        Some(name) => {
            record.name = Some(name);
            None
        }
        None => Some(format!("no function name before `(` in `{}`", signature)),
    }
}

/// Split `int *make_point` into (`int *`, `make_point`).
fn split_head(head: &str) -> (Option<String>, Option<String>) {
    match RE_SIGNATURE_HEAD.captures(head) {
        Some(caps) => (non_empty(caps["ret"].trim()), Some(caps["name"].to_string())),
        None => (None, non_empty(head)),
    }
}

/// Parameters run up to the last `)`; splitting on `,` is purely textual, so
/// commas nested in function-pointer parameters split the entry.
fn split_parameters(after_open: &str) -> Vec<String> {
    let inner = match after_open.rfind(')') {
        Some(close) => &after_open[..close],
        None => after_open,
    };
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(',').map(|p| p.trim().to_string()).collect()
}

fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
