//! Read → transform → write for one input/output pair.

use crate::access::FileAccessError;
use crate::transform::Transformation;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Line counts from a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub lines_read: usize,
    pub lines_written: usize,
}

/// Split text into lines, each keeping its terminator.
///
/// A trailing line without a newline is kept as-is; empty text yields no lines.
///
/// # Examples
///
/// ```
/// use file_processor::pipeline::split_lines;
///
/// assert_eq!(split_lines("a\nb\r\nc"), vec!["a\n", "b\r\n", "c"]);
/// assert!(split_lines("").is_empty());
/// ```
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_owned).collect()
}

/// Read `input`, apply `transformation`, and write the result to `output`.
///
/// The output is written to a temporary file next to `output` and renamed
/// into place, so a failure never leaves a partially written file behind.
///
/// # Errors
///
/// Returns a [`FileAccessError`] naming whichever of the two paths failed.
pub fn run(
    input: &Path,
    output: &Path,
    transformation: Transformation,
) -> Result<Report, FileAccessError> {
    debug!(input = %input.display(), output = %output.display(), %transformation, "starting run");

    let text = fs::read_to_string(input).map_err(|e| FileAccessError::from_io(&e, input))?;
    let lines = split_lines(&text);
    let lines_read = lines.len();

    let transformed = transformation.apply(lines);
    let lines_written = transformed.len();

    write_atomically(output, &transformed.concat())?;

    info!(lines_read, lines_written, output = %output.display(), "run complete");
    Ok(Report {
        lines_read,
        lines_written,
    })
}

/// Replace `path` with `contents` via a sibling temp file and a rename.
///
/// An existing output must be writable and is resolved through symlinks so
/// the file it names is replaced, keeping its permissions. A new output is
/// created with the same mode `File::create` would give it.
fn write_atomically(path: &Path, contents: &str) -> Result<(), FileAccessError> {
    let to_access_error = |e: std::io::Error| FileAccessError::from_io(&e, path);

    let existing = match fs::metadata(path) {
        Ok(metadata) => Some(metadata),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(to_access_error(e)),
    };

    let target = match &existing {
        Some(metadata) if metadata.is_dir() => {
            return Err(FileAccessError::IsADirectory {
                path: path.display().to_string(),
            });
        }
        Some(_) => {
            OpenOptions::new()
                .write(true)
                .open(path)
                .map_err(to_access_error)?;
            fs::canonicalize(path).map_err(to_access_error)?
        }
        None => path.to_path_buf(),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".file-processor-").suffix(".tmp");
    if existing.is_none() {
        set_creation_mode(&mut builder);
    }
    let mut staged = builder.tempfile_in(dir).map_err(to_access_error)?;
    debug!(staged = %staged.path().display(), target = %target.display(), "staging output");

    staged
        .write_all(contents.as_bytes())
        .map_err(to_access_error)?;
    staged.as_file().sync_all().map_err(to_access_error)?;

    if let Some(metadata) = existing {
        staged
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(to_access_error)?;
    }

    staged
        .persist(&target)
        .map_err(|e| FileAccessError::from_io(&e.error, path))?;
    Ok(())
}

/// Request `0o666` so the process umask decides the final mode.
#[cfg(unix)]
fn set_creation_mode(builder: &mut tempfile::Builder<'_, '_>) {
    use std::os::unix::fs::PermissionsExt;
    builder.permissions(std::fs::Permissions::from_mode(0o666));
}

#[cfg(not(unix))]
fn set_creation_mode(_builder: &mut tempfile::Builder<'_, '_>) {}
