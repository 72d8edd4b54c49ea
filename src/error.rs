//! Error type for cdoc.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("cannot read source file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reported as a warning only; a malformed block never aborts the run.
    #[error("malformed block at line {line}: {reason}")]
    MalformedBlock { line: usize, reason: String },

    #[error("cannot write output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DocError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedBlock {
            line,
            reason: reason.into(),
        }
    }
}
