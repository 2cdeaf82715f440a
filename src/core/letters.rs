//! Puzzle letters and letter sets
//!
//! A Spelling Bee puzzle is one mandatory (center) letter plus up to six
//! allowed (outer) letters. Letters are held both as characters, in the order
//! the player entered them, and as a 26-bit [`LetterMask`] for fast checks.

use std::fmt;

/// Maximum number of allowed letters besides the mandatory one
pub const MAX_ALLOWED: usize = 6;

/// Number of letters in a complete puzzle
pub const PUZZLE_SIZE: u32 = MAX_ALLOWED as u32 + 1;

/// Set of lowercase ASCII letters, one bit per letter (bit 0 = 'a')
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterMask(u32);

impl LetterMask {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Build a mask from lowercase ASCII bytes
    ///
    /// Bytes outside `a..=z` are ignored.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        bytes
            .iter()
            .filter(|b| b.is_ascii_lowercase())
            .fold(Self::EMPTY, |mask, &b| Self(mask.0 | 1 << (b - b'a')))
    }

    #[inline]
    fn bit(letter: char) -> Option<u32> {
        letter
            .is_ascii_lowercase()
            .then(|| 1 << (letter as u32 - 'a' as u32))
    }

    /// Add a letter to the set
    #[inline]
    pub fn insert(&mut self, letter: char) {
        if let Some(bit) = Self::bit(letter) {
            self.0 |= bit;
        }
    }

    /// Check if the set contains a letter
    #[inline]
    #[must_use]
    pub fn contains(self, letter: char) -> bool {
        Self::bit(letter).is_some_and(|bit| self.0 & bit != 0)
    }

    /// True when every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Error raised when puzzle letters break the letter-set rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// Input was not exactly one alphabetic character
    NotALetter(String),
    /// An outer letter was given twice
    DuplicateLetter(char),
    /// An outer letter repeats the center letter
    CenterInOuter(char),
    /// More than six outer letters
    TooManyLetters(usize),
    /// An outer-letter list was given but contained nothing
    NoOuterLetters,
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotALetter(input) => {
                write!(f, "Input must be a single letter, got '{input}'")
            }
            Self::DuplicateLetter(letter) => {
                write!(f, "Outer letters cannot contain duplicates ('{letter}')")
            }
            Self::CenterInOuter(letter) => {
                write!(
                    f,
                    "Center letter cannot be contained in outer letters ('{letter}')"
                )
            }
            Self::TooManyLetters(count) => write!(
                f,
                "Outer letters can have between one and {MAX_ALLOWED} entries, got {count}"
            ),
            Self::NoOuterLetters => write!(
                f,
                "Outer letters can have between one and {MAX_ALLOWED} entries"
            ),
        }
    }
}

impl std::error::Error for InvalidInputError {}

/// Parse one letter typed by the player
///
/// Surrounding whitespace is ignored and uppercase is folded to lowercase.
///
/// # Errors
/// Returns [`InvalidInputError::NotALetter`] unless the input is exactly one
/// ASCII alphabetic character.
///
/// # Examples
/// ```
/// use spelling_bee::core::parse_letter;
///
/// assert_eq!(parse_letter(" E\n"), Ok('e'));
/// assert!(parse_letter("3").is_err());
/// assert!(parse_letter("ab").is_err());
/// ```
pub fn parse_letter(input: &str) -> Result<char, InvalidInputError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase()),
        _ => Err(InvalidInputError::NotALetter(trimmed.to_string())),
    }
}

/// A validated puzzle: one mandatory letter plus up to six allowed letters
///
/// All letters are lowercase, alphabetic and pairwise distinct. The set is
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    mandatory: char,
    allowed: Vec<char>,
    full: LetterMask,
}

impl LetterSet {
    /// Validate and build a letter set
    ///
    /// Uppercase letters are accepted and folded to lowercase.
    ///
    /// # Errors
    /// Returns `InvalidInputError` if:
    /// - Any letter is not ASCII alphabetic
    /// - More than six allowed letters are given
    /// - An allowed letter equals the mandatory letter
    /// - The allowed letters are not distinct
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// let letters = LetterSet::new('e', &['a', 'b', 'c', 'k', 'l', 'o']).unwrap();
    /// assert_eq!(letters.full_set().len(), 7);
    ///
    /// assert!(LetterSet::new('3', &[]).is_err());
    /// assert!(LetterSet::new('e', &['a', 'e']).is_err());
    /// ```
    pub fn new(mandatory: char, allowed: &[char]) -> Result<Self, InvalidInputError> {
        if !mandatory.is_ascii_alphabetic() {
            return Err(InvalidInputError::NotALetter(mandatory.to_string()));
        }
        let mandatory = mandatory.to_ascii_lowercase();

        if allowed.len() > MAX_ALLOWED {
            return Err(InvalidInputError::TooManyLetters(allowed.len()));
        }

        let mut full = LetterMask::EMPTY;
        full.insert(mandatory);

        let mut letters = Vec::with_capacity(allowed.len());
        for &letter in allowed {
            if !letter.is_ascii_alphabetic() {
                return Err(InvalidInputError::NotALetter(letter.to_string()));
            }
            let letter = letter.to_ascii_lowercase();

            if letter == mandatory {
                return Err(InvalidInputError::CenterInOuter(letter));
            }
            if full.contains(letter) {
                return Err(InvalidInputError::DuplicateLetter(letter));
            }

            full.insert(letter);
            letters.push(letter);
        }

        Ok(Self {
            mandatory,
            allowed: letters,
            full,
        })
    }

    /// The letter every match must contain
    #[inline]
    #[must_use]
    pub const fn mandatory(&self) -> char {
        self.mandatory
    }

    /// The optional letters, in entry order
    #[inline]
    #[must_use]
    pub fn allowed(&self) -> &[char] {
        &self.allowed
    }

    /// Mandatory and allowed letters together
    #[inline]
    #[must_use]
    pub const fn full_set(&self) -> LetterMask {
        self.full
    }

    /// True when all seven letters are present, so pangrams are possible
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.full.len() == PUZZLE_SIZE
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mandatory.to_ascii_uppercase())?;
        if !self.allowed.is_empty() {
            write!(f, " + ")?;
            for letter in &self.allowed {
                write!(f, "{}", letter.to_ascii_uppercase())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_from_bytes_ignores_repeats() {
        let mask = LetterMask::from_bytes(b"allele");
        assert_eq!(mask.len(), 3);
        assert!(mask.contains('a'));
        assert!(mask.contains('l'));
        assert!(mask.contains('e'));
        assert!(!mask.contains('b'));
    }

    #[test]
    fn mask_ignores_non_lowercase() {
        let mut mask = LetterMask::from_bytes(b"aB3 ");
        mask.insert('Q');
        mask.insert('7');
        assert_eq!(mask.len(), 1);
        assert!(!mask.contains('B'));
        assert!(!mask.contains('3'));
    }

    #[test]
    fn mask_subset() {
        let puzzle = LetterMask::from_bytes(b"eabcklo");
        assert!(LetterMask::from_bytes(b"able").is_subset_of(puzzle));
        assert!(LetterMask::EMPTY.is_subset_of(puzzle));
        assert!(!LetterMask::from_bytes(b"zoo").is_subset_of(puzzle));
    }

    #[test]
    fn letter_set_mask_matches_letters() {
        let letters = LetterSet::new('E', &['a', 'B', 'c']).unwrap();
        assert_eq!(letters.full_set(), LetterMask::from_bytes(b"abce"));
    }

    #[test]
    fn parse_letter_valid() {
        assert_eq!(parse_letter("e"), Ok('e'));
        assert_eq!(parse_letter("E"), Ok('e'));
        assert_eq!(parse_letter("  q \n"), Ok('q'));
    }

    #[test]
    fn parse_letter_invalid() {
        assert!(matches!(
            parse_letter("3"),
            Err(InvalidInputError::NotALetter(s)) if s == "3"
        ));
        assert!(parse_letter("").is_err());
        assert!(parse_letter("ab").is_err());
        assert!(parse_letter("é").is_err());
        assert!(parse_letter("!").is_err());
    }

    #[test]
    fn letter_set_full_puzzle() {
        let letters = LetterSet::new('e', &['a', 'b', 'c', 'k', 'l', 'o']).unwrap();
        assert_eq!(letters.mandatory(), 'e');
        assert_eq!(letters.allowed(), &['a', 'b', 'c', 'k', 'l', 'o']);
        assert_eq!(letters.full_set().len(), 7);
        assert!(letters.is_complete());
    }

    #[test]
    fn letter_set_mandatory_only() {
        let letters = LetterSet::new('e', &[]).unwrap();
        assert!(letters.allowed().is_empty());
        assert_eq!(letters.full_set().len(), 1);
        assert!(!letters.is_complete());
    }

    #[test]
    fn letter_set_folds_case() {
        let letters = LetterSet::new('E', &['A', 'b']).unwrap();
        assert_eq!(letters.mandatory(), 'e');
        assert_eq!(letters.allowed(), &['a', 'b']);
    }

    #[test]
    fn letter_set_rejects_non_alphabetic_mandatory() {
        assert!(matches!(
            LetterSet::new('3', &['a']),
            Err(InvalidInputError::NotALetter(_))
        ));
    }

    #[test]
    fn letter_set_rejects_non_alphabetic_allowed() {
        assert!(matches!(
            LetterSet::new('e', &['a', '-']),
            Err(InvalidInputError::NotALetter(_))
        ));
    }

    #[test]
    fn letter_set_rejects_mandatory_in_allowed() {
        assert_eq!(
            LetterSet::new('e', &['a', 'e']),
            Err(InvalidInputError::CenterInOuter('e'))
        );
        // Case folding happens before the comparison
        assert_eq!(
            LetterSet::new('e', &['E']),
            Err(InvalidInputError::CenterInOuter('e'))
        );
    }

    #[test]
    fn letter_set_rejects_duplicate_allowed() {
        assert_eq!(
            LetterSet::new('e', &['a', 'b', 'a']),
            Err(InvalidInputError::DuplicateLetter('a'))
        );
    }

    #[test]
    fn letter_set_rejects_too_many_allowed() {
        assert_eq!(
            LetterSet::new('e', &['a', 'b', 'c', 'd', 'f', 'g', 'h']),
            Err(InvalidInputError::TooManyLetters(7))
        );
    }

    #[test]
    fn letter_set_display() {
        let letters = LetterSet::new('e', &['a', 'b', 'c']).unwrap();
        assert_eq!(letters.to_string(), "E + ABC");
        assert_eq!(LetterSet::new('q', &[]).unwrap().to_string(), "Q");
    }

    #[test]
    fn error_messages_mention_the_problem() {
        let err = InvalidInputError::CenterInOuter('e');
        assert!(err.to_string().contains("Center letter"));

        let err = InvalidInputError::TooManyLetters(8);
        assert!(err.to_string().contains("got 8"));
    }
}
