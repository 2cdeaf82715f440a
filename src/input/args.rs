//! Command-line letter validation
//!
//! Turns the raw `--center` and `--letters` strings into checked letters.
//! Either may be missing; the prompt layer asks for whatever is left.

use crate::core::{InvalidInputError, LetterMask, MAX_ALLOWED, parse_letter};

/// Letters supplied up front, not necessarily a complete puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialLetters {
    pub center: Option<char>,
    pub outer: Vec<char>,
}

impl PartialLetters {
    /// True when nothing is left to ask for
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.center.is_some() && self.outer.len() == MAX_ALLOWED
    }
}

/// Validate the command-line letters
///
/// Each `letters` token is one `-l` value: a single letter (`-l a -l b`) or a
/// run of letters (`-l abc`). When given, the outer letters must number between one and six,
/// be distinct, and exclude the center letter.
///
/// # Errors
///
/// Returns `InvalidInputError` describing the first rule broken.
///
/// # Examples
/// ```
/// use spelling_bee::input::parse_args;
///
/// let letters = ["ab".to_string(), "C".to_string()];
/// let partial = parse_args(Some("e"), Some(letters.as_slice())).unwrap();
/// assert_eq!(partial.center, Some('e'));
/// assert_eq!(partial.outer, ['a', 'b', 'c']);
///
/// let repeated = ["e".to_string()];
/// assert!(parse_args(Some("e"), Some(repeated.as_slice())).is_err());
/// ```
pub fn parse_args(
    center: Option<&str>,
    letters: Option<&[String]>,
) -> Result<PartialLetters, InvalidInputError> {
    let center = center.map(parse_letter).transpose()?;

    let Some(tokens) = letters else {
        return Ok(PartialLetters {
            center,
            outer: Vec::new(),
        });
    };

    let mut outer = Vec::new();
    for token in tokens {
        let token = token.trim();
        if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InvalidInputError::NotALetter(token.to_string()));
        }
        outer.extend(token.chars().map(|c| c.to_ascii_lowercase()));
    }

    if outer.is_empty() {
        return Err(InvalidInputError::NoOuterLetters);
    }
    if outer.len() > MAX_ALLOWED {
        return Err(InvalidInputError::TooManyLetters(outer.len()));
    }

    let mut seen = LetterMask::EMPTY;
    for &letter in &outer {
        if seen.contains(letter) {
            return Err(InvalidInputError::DuplicateLetter(letter));
        }
        seen.insert(letter);
    }

    if let Some(c) = center
        && seen.contains(c)
    {
        return Err(InvalidInputError::CenterInOuter(c));
    }

    Ok(PartialLetters { center, outer })
}
