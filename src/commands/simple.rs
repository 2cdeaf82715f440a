//! Simple interactive prompt mode
//!
//! Line-by-line letter entry without the TUI

use crate::core::LetterSet;
use crate::input::LetterSetBuilder;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Error from the prompt loop
#[derive(Debug)]
pub enum PromptError {
    /// Input ended before the puzzle was complete
    Cancelled,
    Io(io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => write!(f, "Operation canceled by user."),
            Self::Io(e) => write!(f, "I/O error while prompting: {e}"),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cancelled => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Ask for each missing letter until the puzzle is complete
///
/// Invalid answers print the reason and the same question is asked again.
///
/// # Errors
///
/// Returns `PromptError::Cancelled` if input ends early, or `PromptError::Io`
/// if reading or writing fails.
pub fn prompt_letters<R: BufRead, W: Write>(
    mut builder: LetterSetBuilder,
    reader: &mut R,
    writer: &mut W,
) -> Result<LetterSet, PromptError> {
    while let Some(prompt) = builder.prompt() {
        write!(writer, "{prompt} ")?;
        writer.flush()?;

        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            writeln!(writer)?;
            return Err(PromptError::Cancelled);
        }

        if let Err(e) = builder.push(&input) {
            log::debug!("rejected letter input {:?}: {e}", input.trim());
            writeln!(writer, "{e}")?;
        }
    }

    builder.finish().ok_or(PromptError::Cancelled)
}
