//! Letter-constraint word filtering
//!
//! A dictionary word is accepted when it is long enough, contains the
//! mandatory letter, and uses no letter outside the puzzle. It is a pangram
//! when it uses every one of the seven puzzle letters.

use crate::core::{LetterSet, Word};
use rayon::prelude::*;

/// Default minimum word length (Spelling Bee convention)
pub const DEFAULT_MIN_LENGTH: usize = 4;

/// Tunables for the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    pub min_length: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

/// A dictionary word accepted by the filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub word: &'a Word,
    pub is_pangram: bool,
}

impl Match<'_> {
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        self.word.text()
    }
}

/// Outcome of filtering a dictionary against a letter set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterResult<'a> {
    /// Accepted words in lexicographic order, without duplicates
    pub matches: Vec<Match<'a>>,
    /// How many of `matches` are pangrams
    pub pangram_count: usize,
}

impl<'a> FilterResult<'a> {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matched words in order
    pub fn words(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.matches.iter().map(|m| m.word.text())
    }

    /// Matched pangrams in order
    pub fn pangrams(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.matches
            .iter()
            .filter(|m| m.is_pangram)
            .map(|m| m.word.text())
    }
}

/// Check whether a single word satisfies the puzzle constraints
#[inline]
#[must_use]
pub fn is_match(word: &Word, letters: &LetterSet, config: FilterConfig) -> bool {
    word.len() >= config.min_length
        && word.has_letter(letters.mandatory())
        && word.mask().is_subset_of(letters.full_set())
}

/// Check whether a word uses all seven puzzle letters
///
/// Puzzles with fewer than seven letters have no pangrams.
#[inline]
#[must_use]
pub fn is_pangram(word: &Word, letters: &LetterSet) -> bool {
    letters.is_complete() && word.mask() == letters.full_set()
}

/// Filter a dictionary against a letter set
///
/// The scan runs in parallel; the result is sorted afterwards, so repeated
/// calls with the same inputs return the same output in the same order.
///
/// # Examples
/// ```
/// use spelling_bee::core::LetterSet;
/// use spelling_bee::solver::{FilterConfig, filter_words};
/// use spelling_bee::wordlists::loader::words_from_slice;
///
/// let letters = LetterSet::new('e', &['a', 'b', 'c', 'k', 'l', 'o']).unwrap();
/// let words = words_from_slice(&["allele", "able", "allocable", "eke", "zoo"]);
///
/// let result = filter_words(&letters, &words, FilterConfig::default());
/// assert_eq!(result.words().collect::<Vec<_>>(), ["able", "allele", "allocable"]);
/// assert_eq!(result.pangram_count, 0);
/// ```
#[must_use]
pub fn filter_words<'a>(
    letters: &LetterSet,
    words: &'a [Word],
    config: FilterConfig,
) -> FilterResult<'a> {
    let mut matches: Vec<Match<'a>> = words
        .par_iter()
        .filter(|word| is_match(word, letters, config))
        .map(|word| Match {
            word,
            is_pangram: is_pangram(word, letters),
        })
        .collect();

    matches.sort_unstable_by(|a, b| a.word.text().cmp(b.word.text()));
    matches.dedup_by(|a, b| a.word.text() == b.word.text());

    let pangram_count = matches.iter().filter(|m| m.is_pangram).count();

    log::debug!(
        "filtered {} words for {letters}: {} matches, {pangram_count} pangrams",
        words.len(),
        matches.len()
    );

    FilterResult {
        matches,
        pangram_count,
    }
}
