//! Puzzle solving command
//!
//! Resolves the puzzle letters, loads the dictionary and runs the filter.

use super::simple::{PromptError, prompt_letters};
use crate::core::{LetterSet, Word};
use crate::input::{LetterSetBuilder, PartialLetters};
use crate::solver::{FilterConfig, FilterResult, Solver};
use crate::wordlists::{DEFAULT_WORDLIST, load_from_file};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Configuration for solving a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    pub wordlist: PathBuf,
    pub skip_lines: usize,
    pub filter: FilterConfig,
    pub verbose: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(wordlist: impl Into<PathBuf>) -> Self {
        Self {
            wordlist: wordlist.into(),
            skip_lines: 0,
            filter: FilterConfig::default(),
            verbose: false,
        }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WORDLIST)
    }
}

/// Load the configured dictionary
///
/// # Errors
///
/// Returns an error naming the word list if it cannot be read. The
/// underlying I/O error stays attached as the source.
pub fn load_dictionary(config: &SolveConfig) -> Result<Vec<Word>> {
    load_from_file(&config.wordlist, config.skip_lines).map_err(|err| {
        let path = config.wordlist.display();
        let context = if err.kind() == io::ErrorKind::NotFound {
            format!("File {path} not found")
        } else {
            format!("Could not read word list {path}")
        };
        anyhow::Error::new(err).context(context)
    })
}

/// Complete the letters given on the command line, prompting if needed
///
/// # Errors
///
/// Returns `PromptError` if the prompt is cancelled or I/O fails.
pub fn resolve_letters<R: BufRead, W: Write>(
    partial: PartialLetters,
    reader: &mut R,
    writer: &mut W,
) -> Result<LetterSet, PromptError> {
    prompt_letters(LetterSetBuilder::from_partial(partial), reader, writer)
}

/// Solve one puzzle against a loaded dictionary
#[must_use]
pub fn solve_puzzle<'a>(
    letters: &LetterSet,
    words: &'a [Word],
    config: &SolveConfig,
) -> FilterResult<'a> {
    Solver::new(words, config.filter).solve(letters)
}
