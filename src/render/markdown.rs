//! Markdown renderer.
//!
//! Each record becomes a `##` heading with its return type and name, the
//! description lines, and a bulleted parameter list when there is one.

use crate::model::DocRecord;

/// Render a single record. The fragment ends with a blank line.
pub fn render_record(record: &DocRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(render_heading(record));
    lines.push(String::new());

    if let Some(ref description) = record.description {
        lines.extend(description.iter().cloned());
    }

    if let Some(ref parameters) = record.parameters {
        if !parameters.is_empty() {
            lines.push(String::new());
            lines.push("Parameters:".to_string());
            for parameter in parameters {
                lines.push(format!(" - `{}`", parameter));
            }
        }
    }

    lines.push("\n".to_string());
    lines.join("\n")
}

/// Render all records in order, separated by a newline.
pub fn render_document(records: &[DocRecord]) -> String {
    records
        .iter()
        .map(render_record)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `## <return type> <name>`, leaving out whichever part is absent.
fn render_heading(record: &DocRecord) -> String {
    let parts: Vec<&str> = [record.return_type.as_deref(), record.name.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if parts.is_empty() {
        "##".to_string()
    } else {
        format!("## {}", parts.join(" "))
    }
}
