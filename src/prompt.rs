//! Line-oriented prompts with re-prompt loops.
//!
//! [`Prompter`] is generic over its reader and writer so the same code drives
//! a real terminal and the in-memory buffers used by tests.

use crate::access;
use crate::transform::Transformation;
use error_set::error_set;
use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

error_set! {
    /// Terminal failures while prompting
    PromptError := {
        /// End of input reached while waiting for an answer
        #[display("Input closed before an answer was entered")]
        InputClosed,
        #[display("Failed to read input: {message}")]
        ReadFailed { message: String },
        #[display("Failed to write output: {message}")]
        WriteFailed { message: String },
    }
}

const INPUT_PROMPT: &str = "Enter the name of the file to process: ";
const OUTPUT_PROMPT: &str = "Enter the name for the output file: ";
const CHOICE_PROMPT: &str = "\nEnter your choice (1-4): ";

/// Asks questions on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: impl fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{text}").map_err(write_failed)
    }

    /// Write `text` as-is.
    pub fn show(&mut self, text: impl fmt::Display) -> Result<(), PromptError> {
        write!(self.output, "{text}").map_err(write_failed)
    }

    /// Print `prompt` and return the next input line without its terminator.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::InputClosed`] at end of input.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}").map_err(write_failed)?;
        self.output.flush().map_err(write_failed)?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .map_err(|e| PromptError::ReadFailed {
                message: e.to_string(),
            })?;
        if read == 0 {
            return Err(PromptError::InputClosed);
        }

        if answer.ends_with('\n') {
            answer.pop();
            if answer.ends_with('\r') {
                answer.pop();
            }
        }
        Ok(answer)
    }

    /// Ask for a file to process until the answer names a readable file.
    pub fn ask_input_path(&mut self) -> Result<PathBuf, PromptError> {
        loop {
            let answer = self.ask(INPUT_PROMPT)?;
            match access::check_readable(Path::new(&answer)) {
                Ok(()) => return Ok(PathBuf::from(answer)),
                Err(err) => {
                    warn!(path = %answer, error = %err, "rejected input file");
                    self.say(err.retry_message())?;
                }
            }
        }
    }

    /// Ask for the output file name. Any answer is accepted.
    pub fn ask_output_path(&mut self) -> Result<PathBuf, PromptError> {
        Ok(PathBuf::from(self.ask(OUTPUT_PROMPT)?))
    }

    /// Print the menu and ask until a valid choice is entered.
    pub fn ask_transformation(&mut self) -> Result<Transformation, PromptError> {
        self.say("\nChoose a transformation to apply:")?;
        for (i, transformation) in Transformation::ALL.iter().enumerate() {
            self.say(format_args!("{}. {}", i + 1, transformation.menu_label()))?;
        }

        loop {
            let answer = self.ask(CHOICE_PROMPT)?;
            match parse_choice(&answer) {
                Ok(transformation) => {
                    debug!(%transformation, "transformation selected");
                    return Ok(transformation);
                }
                Err(message) => {
                    debug!(answer = %answer, "rejected menu choice");
                    self.say(message)?;
                }
            }
        }
    }
}

fn write_failed(e: std::io::Error) -> PromptError {
    PromptError::WriteFailed {
        message: e.to_string(),
    }
}

/// Parse a menu answer, returning the message to show on rejection.
///
/// Integers too large for `i64` are reported as out of range, not invalid.
fn parse_choice(answer: &str) -> Result<Transformation, &'static str> {
    const NOT_A_NUMBER: &str = "Please enter a valid number.";
    const OUT_OF_RANGE: &str = "Please enter a number between 1 and 4.";

    let answer = answer.trim();
    match answer.parse::<i64>() {
        Ok(number) => Transformation::from_choice(number).ok_or(OUT_OF_RANGE),
        Err(_) if is_integer(answer) => Err(OUT_OF_RANGE),
        Err(_) => Err(NOT_A_NUMBER),
    }
}

/// Optional sign followed by one or more ASCII digits.
fn is_integer(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    /// Transcript with trailing spaces and surrounding blank lines removed
    fn tidy(text: &str) -> String {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        lines.join("\n").trim_matches('\n').to_string()
    }

    #[test]
    fn ask_strips_terminator_only() {
        let mut p = prompter("  spaced name.txt  \r\nnext\n");
        assert_eq!(p.ask("? ").unwrap(), "  spaced name.txt  ");
        assert_eq!(p.ask("? ").unwrap(), "next");
        assert_eq!(transcript(p), "? ? ");
    }

    #[test]
    fn ask_accepts_last_line_without_newline() {
        let mut p = prompter("last");
        assert_eq!(p.ask("> ").unwrap(), "last");
    }

    #[test]
    fn ask_at_end_of_input() {
        let mut p = prompter("");
        assert!(matches!(p.ask("> "), Err(PromptError::InputClosed)));
    }

    #[test]
    fn output_path_is_not_validated() {
        let mut p = prompter("/no/such/dir/out.txt\n");
        assert_eq!(
            p.ask_output_path().unwrap(),
            PathBuf::from("/no/such/dir/out.txt")
        );
    }

    #[test]
    fn parse_choice_values() {
        assert_eq!(parse_choice("1"), Ok(Transformation::Uppercase));
        assert_eq!(parse_choice(" 4 "), Ok(Transformation::RemoveBlankLines));
        assert_eq!(parse_choice("+2"), Ok(Transformation::Lowercase));
        assert_eq!(parse_choice("abc"), Err("Please enter a valid number."));
        assert_eq!(parse_choice(""), Err("Please enter a valid number."));
        assert_eq!(parse_choice("2.5"), Err("Please enter a valid number."));
        assert_eq!(parse_choice("0"), Err("Please enter a number between 1 and 4."));
        assert_eq!(parse_choice("-3"), Err("Please enter a number between 1 and 4."));
    }

    #[test]
    fn parse_choice_huge_integers_are_out_of_range() {
        assert_eq!(
            parse_choice("99999999999999999999"),
            Err("Please enter a number between 1 and 4.")
        );
        assert_eq!(
            parse_choice(" -99999999999999999999 "),
            Err("Please enter a number between 1 and 4.")
        );
        assert_eq!(
            parse_choice("99999999999999999999x"),
            Err("Please enter a valid number.")
        );
    }

    #[test]
    fn menu_reprompts_until_valid() {
        let mut p = prompter("x\n7\n3\n");
        assert_eq!(p.ask_transformation().unwrap(), Transformation::NumberLines);
        insta::assert_snapshot!(tidy(&transcript(p)), @r"
        Choose a transformation to apply:
        1. Convert to uppercase
        2. Convert to lowercase
        3. Add line numbers
        4. Remove blank lines

        Enter your choice (1-4): Please enter a valid number.

        Enter your choice (1-4): Please enter a number between 1 and 4.

        Enter your choice (1-4):
        ");
    }

    #[test]
    fn menu_gives_up_only_when_input_closes() {
        let mut p = prompter("nope\n");
        assert!(matches!(
            p.ask_transformation(),
            Err(PromptError::InputClosed)
        ));
    }
}
