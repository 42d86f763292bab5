//! Read-back of the first lines of a written file.

use error_set::error_set;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Number of lines shown after a successful run
pub const DEFAULT_PREVIEW_LINES: usize = 5;

error_set! {
    /// Errors from reading the output file back for display
    PreviewError := {
        #[display("Couldn't show preview: {message}")]
        ReadFailed { message: String },
    }
}

/// The first lines of a file, trailing whitespace stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub lines: Vec<String>,
    pub limit: usize,
}

impl Preview {
    /// Read at most `limit` lines from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::ReadFailed`] if the file cannot be opened or
    /// a line cannot be decoded.
    pub fn read(path: &Path, limit: usize) -> Result<Self, PreviewError> {
        let read_failed = |e: std::io::Error| PreviewError::ReadFailed {
            message: e.to_string(),
        };

        let reader = BufReader::new(File::open(path).map_err(read_failed)?);
        let lines = reader
            .lines()
            .take(limit)
            .map(|line| line.map(|l| l.trim_end().to_string()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_failed)?;

        Ok(Preview { lines, limit })
    }

    /// Whether the limit was reached, so more lines may follow.
    pub fn is_truncated(&self) -> bool {
        self.lines.len() >= self.limit
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            return writeln!(f, "(File is empty)");
        }

        for line in &self.lines {
            writeln!(f, "{line}")?;
        }

        if self.is_truncated() {
            writeln!(f, "...")
        } else {
            writeln!(f, "(End of file)")
        }
    }
}
