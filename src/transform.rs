//! The closed set of line transformations offered by the menu.
//!
//! Every transformation takes the whole ordered line sequence and returns a
//! new one. Lines carry their own terminators (see
//! [`split_lines`](crate::pipeline::split_lines)), so per-line rules must
//! leave the terminator alone and whole-sequence rules may drop lines but
//! never merge them.

use std::fmt;

/// A named, fixed rule mapping input lines to output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformation {
    /// Convert every line to uppercase
    Uppercase,
    /// Convert every line to lowercase
    Lowercase,
    /// Prefix each line with its 1-based position as `"N: "`
    NumberLines,
    /// Drop lines that are empty once whitespace is trimmed
    RemoveBlankLines,
}

impl Transformation {
    /// All transformations in menu order.
    pub const ALL: [Transformation; 4] = [
        Transformation::Uppercase,
        Transformation::Lowercase,
        Transformation::NumberLines,
        Transformation::RemoveBlankLines,
    ];

    /// Map a 1-based menu choice to its transformation.
    ///
    /// # Examples
    ///
    /// ```
    /// use file_processor::Transformation;
    ///
    /// assert_eq!(Transformation::from_choice(3), Some(Transformation::NumberLines));
    /// assert_eq!(Transformation::from_choice(0), None);
    /// assert_eq!(Transformation::from_choice(5), None);
    /// ```
    pub fn from_choice(choice: i64) -> Option<Self> {
        usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Text shown for this option in the menu.
    pub fn menu_label(self) -> &'static str {
        match self {
            Transformation::Uppercase => "Convert to uppercase",
            Transformation::Lowercase => "Convert to lowercase",
            Transformation::NumberLines => "Add line numbers",
            Transformation::RemoveBlankLines => "Remove blank lines",
        }
    }

    /// Apply the transformation to an ordered sequence of lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use file_processor::Transformation;
    ///
    /// let lines = vec!["a\n".to_string(), "  \n".to_string(), "b".to_string()];
    /// assert_eq!(
    ///     Transformation::NumberLines.apply(lines.clone()),
    ///     vec!["1: a\n", "2:   \n", "3: b"]
    /// );
    /// assert_eq!(
    ///     Transformation::RemoveBlankLines.apply(lines),
    ///     vec!["a\n", "b"]
    /// );
    /// ```
    pub fn apply(self, lines: Vec<String>) -> Vec<String> {
        match self {
            Transformation::Uppercase => lines.iter().map(|l| l.to_uppercase()).collect(),
            Transformation::Lowercase => lines.iter().map(|l| l.to_lowercase()).collect(),
            Transformation::NumberLines => lines
                .into_iter()
                .enumerate()
                .map(|(i, line)| format!("{}: {}", i + 1, line))
                .collect(),
            Transformation::RemoveBlankLines => lines
                .into_iter()
                .filter(|line| !line.trim().is_empty())
                .collect(),
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transformation::Uppercase => "uppercase",
            Transformation::Lowercase => "lowercase",
            Transformation::NumberLines => "line numbers",
            Transformation::RemoveBlankLines => "blank line removal",
        };
        f.write_str(name)
    }
}
