//! File access checks and the error taxonomy shared by every file operation.
//!
//! Every I/O failure in the crate is funnelled through
//! [`FileAccessError::from_io`] so that the user always sees one of four
//! categories, named after the path that actually failed.

use error_set::error_set;
use std::fs::{self, File};
use std::io;
use std::path::Path;

error_set! {
    /// Categorized failure to read or write a file
    FileAccessError := {
        /// Path does not exist
        #[display("Error: The file '{path}' was not found.")]
        NotFound { path: String },
        /// Path exists but the process may not open it
        #[display("Error: You don't have permission to access '{path}'.")]
        PermissionDenied { path: String },
        /// Path names a directory where a file was expected
        #[display("Error: '{path}' is a directory, not a file.")]
        IsADirectory { path: String },
        /// Anything else, including undecodable text
        #[display("An unexpected error occurred: {message}")]
        Unexpected { message: String },
    }
}

impl FileAccessError {
    /// Classify an I/O error raised while accessing `path`.
    pub fn from_io(err: &io::Error, path: &Path) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => FileAccessError::NotFound { path },
            io::ErrorKind::PermissionDenied => FileAccessError::PermissionDenied { path },
            io::ErrorKind::IsADirectory => FileAccessError::IsADirectory { path },
            _ => FileAccessError::Unexpected {
                message: format!("{err}: '{path}'"),
            },
        }
    }

    /// Wording used by the filename prompt before asking again.
    pub fn retry_message(&self) -> String {
        match self {
            FileAccessError::NotFound { path } => {
                format!("Error: The file '{path}' does not exist. Please try again.")
            }
            FileAccessError::PermissionDenied { path } => {
                format!("Error: You don't have permission to read '{path}'. Please try again.")
            }
            FileAccessError::IsADirectory { path } => {
                format!("Error: '{path}' is a directory, not a file. Please try again.")
            }
            FileAccessError::Unexpected { message } => {
                format!("An unexpected error occurred: {message}. Please try again.")
            }
        }
    }
}

/// Check that `path` names an existing regular file that can be opened for reading.
///
/// The file is opened and immediately closed; nothing is read.
///
/// # Errors
///
/// Returns the [`FileAccessError`] category describing why the file is unusable.
pub fn check_readable(path: &Path) -> Result<(), FileAccessError> {
    let metadata = fs::metadata(path).map_err(|e| FileAccessError::from_io(&e, path))?;

    if metadata.is_dir() {
        return Err(FileAccessError::IsADirectory {
            path: path.display().to_string(),
        });
    }

    File::open(path)
        .map(drop)
        .map_err(|e| FileAccessError::from_io(&e, path))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn readable_file_passes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello\n").unwrap();

        assert!(check_readable(&path).is_ok());
    }

    #[test]
    fn empty_file_passes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        assert!(check_readable(&path).is_ok());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        let result = check_readable(&path);
        assert!(matches!(result, Err(FileAccessError::NotFound { .. })));
    }

    #[test]
    fn empty_path_is_not_found() {
        let result = check_readable(Path::new(""));
        assert!(matches!(result, Err(FileAccessError::NotFound { .. })));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = TempDir::new().unwrap();

        let result = check_readable(dir.path());
        assert!(matches!(result, Err(FileAccessError::IsADirectory { .. })));
    }

    #[test]
    fn classify_io_kinds() {
        let path = Path::new("data.txt");

        let err = io::Error::from(io::ErrorKind::NotFound);
        assert!(matches!(
            FileAccessError::from_io(&err, path),
            FileAccessError::NotFound { path } if path == "data.txt"
        ));

        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        assert!(matches!(
            FileAccessError::from_io(&err, path),
            FileAccessError::PermissionDenied { .. }
        ));

        let err = io::Error::from(io::ErrorKind::IsADirectory);
        assert!(matches!(
            FileAccessError::from_io(&err, path),
            FileAccessError::IsADirectory { .. }
        ));
    }

    #[test]
    fn unexpected_error_keeps_message_and_path() {
        let err = io::Error::other("disk on fire");
        let classified = FileAccessError::from_io(&err, Path::new("data.txt"));

        assert_eq!(
            classified.to_string(),
            "An unexpected error occurred: disk on fire: 'data.txt'"
        );
    }

    #[test]
    fn display_messages() {
        let not_found = FileAccessError::NotFound {
            path: "in.txt".to_string(),
        };
        assert_eq!(
            not_found.to_string(),
            "Error: The file 'in.txt' was not found."
        );

        let denied = FileAccessError::PermissionDenied {
            path: "in.txt".to_string(),
        };
        assert_eq!(
            denied.to_string(),
            "Error: You don't have permission to access 'in.txt'."
        );

        let dir = FileAccessError::IsADirectory {
            path: "src".to_string(),
        };
        assert_eq!(dir.to_string(), "Error: 'src' is a directory, not a file.");
    }

    #[test]
    fn retry_messages() {
        let not_found = FileAccessError::NotFound {
            path: "in.txt".to_string(),
        };
        assert_eq!(
            not_found.retry_message(),
            "Error: The file 'in.txt' does not exist. Please try again."
        );

        let denied = FileAccessError::PermissionDenied {
            path: "in.txt".to_string(),
        };
        assert_eq!(
            denied.retry_message(),
            "Error: You don't have permission to read 'in.txt'. Please try again."
        );

        let unexpected = FileAccessError::Unexpected {
            message: "boom".to_string(),
        };
        assert_eq!(
            unexpected.retry_message(),
            "An unexpected error occurred: boom. Please try again."
        );
    }
}
