//! Dictionary word representation
//!
//! A Word stores a lowercase word along with the set of distinct letters it uses.

use super::letters::LetterMask;
use std::fmt;

/// A candidate dictionary word with its letter set precomputed
///
/// The mask makes the membership and pangram checks of the filter a pair of
/// bit operations instead of a scan over the word for every letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    mask: LetterMask,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased first, so `"Able"` and `"able"` are the same word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Word;
    ///
    /// let word = Word::new("Allele").unwrap();
    /// assert_eq!(word.text(), "allele");
    /// assert_eq!(word.distinct_letters(), 3);
    ///
    /// assert!(Word::new("don't").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mask = LetterMask::from_bytes(text.as_bytes());

        Ok(Self { text, mask })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the word in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected on construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The set of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> LetterMask {
        self.mask
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.mask.contains(letter)
    }

    /// Number of distinct letters used
    #[inline]
    #[must_use]
    pub const fn distinct_letters(&self) -> u32 {
        self.mask.len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
