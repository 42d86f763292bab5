//! One interactive run, from the welcome banner to the preview.
//!
//! The session moves through
//! `AwaitingInput → AwaitingOutputName → AwaitingChoice → Processing` and
//! ends in an [`Outcome`]. Only terminal failures ([`PromptError`]) escape;
//! file errors are printed and reported through [`Outcome::Failure`].

use crate::access::FileAccessError;
use crate::pipeline::{self, Report};
use crate::preview::{DEFAULT_PREVIEW_LINES, Preview, PreviewError};
use crate::prompt::{PromptError, Prompter};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// How a completed session ended
#[derive(Debug)]
pub enum Outcome {
    /// Output written; the preview may still have failed
    Success {
        output: PathBuf,
        report: Report,
        preview: Result<Preview, PreviewError>,
    },
    /// The pipeline failed and nothing was written
    Failure(FileAccessError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// Drives one read → transform → write cycle over a prompter
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    preview_lines: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            preview_lines: DEFAULT_PREVIEW_LINES,
        }
    }

    /// Change how many output lines the preview shows.
    pub fn with_preview_lines(mut self, lines: usize) -> Self {
        self.preview_lines = lines;
        self
    }

    /// Give back the writer the transcript went to.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run the session once.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError`] if the terminal fails or input ends early.
    pub fn run(&mut self) -> Result<Outcome, PromptError> {
        self.prompter.say("Welcome to the File Processor!")?;
        self.prompter
            .say("This program reads a file, modifies its content, and saves to a new file.\n")?;

        let input = self.prompter.ask_input_path()?;
        let output = self.prompter.ask_output_path()?;
        let transformation = self.prompter.ask_transformation()?;

        self.prompter
            .say(format_args!("\nProcessing {}...", input.display()))?;

        let report = match pipeline::run(&input, &output, transformation) {
            Ok(report) => report,
            Err(err) => {
                warn!(error = %err, "processing failed");
                self.prompter.say(&err)?;
                return Ok(Outcome::Failure(err));
            }
        };

        self.prompter.say(format_args!(
            "Success! Processed content saved to '{}'.",
            output.display()
        ))?;

        self.prompter.say("\nPreview of the transformed file:")?;
        let preview = Preview::read(&output, self.preview_lines);
        match &preview {
            Ok(preview) => self.prompter.show(preview)?,
            Err(err) => {
                warn!(error = %err, "preview failed");
                self.prompter.say(err)?;
            }
        }

        info!(%transformation, lines_written = report.lines_written, "session finished");
        Ok(Outcome::Success {
            output,
            report,
            preview,
        })
    }
}
