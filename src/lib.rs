//! Interactive text file processor.
//!
//! Reads a text file, applies one of four fixed [`Transformation`]s, writes
//! the result to a new file and previews the first lines of the output.
//!
//! ```no_run
//! use file_processor::Session;
//! use std::io;
//!
//! let mut session = Session::new(io::stdin().lock(), io::stdout());
//! let outcome = session.run().unwrap();
//! println!("success: {}", outcome.is_success());
//! ```

use error_set::error_set;

pub mod access;
pub mod pipeline;
pub mod preview;
pub mod prompt;
pub mod session;
pub mod transform;

pub use access::FileAccessError;
pub use pipeline::Report;
pub use preview::{Preview, PreviewError};
pub use prompt::{PromptError, Prompter};
pub use session::{Outcome, Session};
pub use transform::Transformation;

error_set! {
    /// Any error the file processor can produce
    FileProcessorError := {
        FileAccessError(FileAccessError),
        PreviewError(PreviewError),
        PromptError(PromptError),
    }
}

/// Run the pipeline without prompting, for callers that already know the paths.
///
/// # Examples
///
/// ```no_run
/// use file_processor::{process_file, Transformation};
/// use std::path::Path;
///
/// let preview = process_file(
///     Path::new("notes.txt"),
///     Path::new("NOTES.txt"),
///     Transformation::Uppercase,
/// )
/// .unwrap();
/// print!("{preview}");
/// ```
///
/// # Errors
///
/// Returns [`FileProcessorError`] if the pipeline or the preview fails.
pub fn process_file(
    input: &std::path::Path,
    output: &std::path::Path,
    transformation: Transformation,
) -> Result<Preview, FileProcessorError> {
    pipeline::run(input, output, transformation)?;
    Ok(Preview::read(output, preview::DEFAULT_PREVIEW_LINES)?)
}
