//! Source file loading.

use crate::error::DocError;
use std::fs;
use std::path::Path;

/// Read `path` and return its lines in order, each keeping its terminator.
///
/// The segmenter relies on the raw text: `//` and `{` are tested as literal
/// prefixes and blank detection looks at whitespace-only content.
pub fn load_lines(path: &Path) -> Result<Vec<String>, DocError> {
    let content = fs::read_to_string(path).map_err(|source| DocError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(split_lines(&content))
}

/// Split `content` after each `\n`, keeping the terminator on every line.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}
