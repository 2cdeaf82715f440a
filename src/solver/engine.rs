//! Main Spelling Bee solver interface

use super::filter::{FilterConfig, FilterResult, filter_words};
use crate::core::{LetterSet, Word};

/// Main Spelling Bee solver
///
/// Holds the loaded dictionary so several puzzles can be solved against it.
pub struct Solver<'a> {
    words: &'a [Word],
    config: FilterConfig,
}

impl<'a> Solver<'a> {
    /// Create a new solver over a dictionary
    ///
    /// # Parameters
    /// - `words`: All candidate dictionary words
    /// - `config`: Filter settings such as the minimum word length
    pub const fn new(words: &'a [Word], config: FilterConfig) -> Self {
        Self { words, config }
    }

    /// Find every word the puzzle accepts
    #[must_use]
    pub fn solve(&self, letters: &LetterSet) -> FilterResult<'a> {
        filter_words(letters, self.words, self.config)
    }

    /// Number of words in the dictionary
    #[must_use]
    pub const fn dictionary_size(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub const fn config(&self) -> FilterConfig {
        self.config
    }
}
