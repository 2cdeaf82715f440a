//! Step-by-step letter entry
//!
//! A small state machine that accepts one answer at a time: first the center
//! letter, then outer letters until six are in. Rejected answers leave the
//! state untouched, so callers simply ask again.

use super::args::PartialLetters;
use crate::core::{InvalidInputError, LetterSet, MAX_ALLOWED, parse_letter};

const ORDINALS: [&str; MAX_ALLOWED] = ["first", "second", "third", "fourth", "fifth", "sixth"];

/// Where the builder is in the entry sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    AwaitingCenter,
    /// Waiting for the outer letter with this zero-based index
    AwaitingOuter(usize),
    Complete,
}

/// Collects puzzle letters one answer at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSetBuilder {
    center: Option<char>,
    outer: Vec<char>,
}

impl LetterSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from letters already validated on the command line
    #[must_use]
    pub fn from_partial(partial: PartialLetters) -> Self {
        Self {
            center: partial.center,
            outer: partial.outer,
        }
    }

    #[must_use]
    pub fn state(&self) -> BuilderState {
        match self.center {
            None => BuilderState::AwaitingCenter,
            Some(_) if self.outer.len() < MAX_ALLOWED => {
                BuilderState::AwaitingOuter(self.outer.len())
            }
            Some(_) => BuilderState::Complete,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state() == BuilderState::Complete
    }

    #[must_use]
    pub const fn center(&self) -> Option<char> {
        self.center
    }

    #[must_use]
    pub fn outer(&self) -> &[char] {
        &self.outer
    }

    /// Text asking for the next letter, or `None` once complete
    #[must_use]
    pub fn prompt(&self) -> Option<String> {
        match self.state() {
            BuilderState::AwaitingCenter => Some("Please enter the center letter:".to_string()),
            BuilderState::AwaitingOuter(index) => Some(format!(
                "Please enter the {} outer letter:",
                ORDINALS[index]
            )),
            BuilderState::Complete => None,
        }
    }

    /// Validate one typed answer and advance
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError` if the answer is not a single letter, or
    /// repeats a letter already entered. The state does not change.
    pub fn push(&mut self, input: &str) -> Result<BuilderState, InvalidInputError> {
        let letter = parse_letter(input)?;
        self.push_letter(letter)
    }

    /// Validate one letter and advance
    ///
    /// Input after the puzzle is complete is rejected as too many letters.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputError` if the letter is not alphabetic, repeats a
    /// letter already entered, or the puzzle is already complete.
    pub fn push_letter(&mut self, letter: char) -> Result<BuilderState, InvalidInputError> {
        if !letter.is_ascii_alphabetic() {
            return Err(InvalidInputError::NotALetter(letter.to_string()));
        }
        let letter = letter.to_ascii_lowercase();

        match self.state() {
            BuilderState::AwaitingCenter => {
                if self.outer.contains(&letter) {
                    return Err(InvalidInputError::CenterInOuter(letter));
                }
                self.center = Some(letter);
            }
            BuilderState::AwaitingOuter(_) => {
                if self.center == Some(letter) {
                    return Err(InvalidInputError::CenterInOuter(letter));
                }
                if self.outer.contains(&letter) {
                    return Err(InvalidInputError::DuplicateLetter(letter));
                }
                self.outer.push(letter);
            }
            BuilderState::Complete => {
                return Err(InvalidInputError::TooManyLetters(MAX_ALLOWED + 1));
            }
        }

        Ok(self.state())
    }

    /// Remove the most recently entered letter
    pub fn pop(&mut self) -> Option<char> {
        self.outer.pop().or_else(|| self.center.take())
    }

    /// Clear all entered letters
    pub fn reset(&mut self) {
        self.center = None;
        self.outer.clear();
    }

    /// Build the letter set from what has been entered so far
    ///
    /// Returns `None` until the center letter is known. Fewer than six outer
    /// letters is still a valid, if smaller, puzzle.
    #[must_use]
    pub fn finish(&self) -> Option<LetterSet> {
        self.center
            .and_then(|center| LetterSet::new(center, &self.outer).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_walks_through_states() {
        let mut builder = LetterSetBuilder::new();
        assert_eq!(builder.state(), BuilderState::AwaitingCenter);

        assert_eq!(builder.push("E"), Ok(BuilderState::AwaitingOuter(0)));
        for (i, letter) in ["a", "b", "c", "k", "l"].iter().enumerate() {
            assert_eq!(builder.push(letter), Ok(BuilderState::AwaitingOuter(i + 1)));
        }
        assert_eq!(builder.push("o"), Ok(BuilderState::Complete));
        assert!(builder.is_complete());

        let letters = builder.finish().unwrap();
        assert_eq!(letters.mandatory(), 'e');
        assert_eq!(letters.allowed(), &['a', 'b', 'c', 'k', 'l', 'o']);
    }

    #[test]
    fn builder_prompts() {
        let mut builder = LetterSetBuilder::new();
        assert_eq!(
            builder.prompt().as_deref(),
            Some("Please enter the center letter:")
        );

        builder.push("e").unwrap();
        assert_eq!(
            builder.prompt().as_deref(),
            Some("Please enter the first outer letter:")
        );

        builder.push("a").unwrap();
        assert_eq!(
            builder.prompt().as_deref(),
            Some("Please enter the second outer letter:")
        );
    }

    #[test]
    fn builder_no_prompt_when_complete() {
        let partial = PartialLetters {
            center: Some('e'),
            outer: vec!['a', 'b', 'c', 'k', 'l', 'o'],
        };
        let builder = LetterSetBuilder::from_partial(partial);
        assert!(builder.is_complete());
        assert_eq!(builder.prompt(), None);
    }

    #[test]
    fn builder_rejects_invalid_without_advancing() {
        let mut builder = LetterSetBuilder::new();

        assert!(matches!(
            builder.push("3"),
            Err(InvalidInputError::NotALetter(_))
        ));
        assert!(builder.push("ab").is_err());
        assert!(builder.push("").is_err());
        assert_eq!(builder.state(), BuilderState::AwaitingCenter);

        builder.push("e").unwrap();
        assert_eq!(
            builder.push("e"),
            Err(InvalidInputError::CenterInOuter('e'))
        );
        builder.push("a").unwrap();
        assert_eq!(
            builder.push("A"),
            Err(InvalidInputError::DuplicateLetter('a'))
        );
        assert_eq!(builder.state(), BuilderState::AwaitingOuter(1));
    }

    #[test]
    fn builder_center_after_outer_from_args() {
        let partial = PartialLetters {
            center: None,
            outer: vec!['a', 'b'],
        };
        let mut builder = LetterSetBuilder::from_partial(partial);
        assert_eq!(builder.state(), BuilderState::AwaitingCenter);

        assert_eq!(
            builder.push("a"),
            Err(InvalidInputError::CenterInOuter('a'))
        );
        assert_eq!(builder.push("e"), Ok(BuilderState::AwaitingOuter(2)));
    }

    #[test]
    fn builder_rejects_input_when_complete() {
        let mut builder = LetterSetBuilder::from_partial(PartialLetters {
            center: Some('e'),
            outer: vec!['a', 'b', 'c', 'k', 'l', 'o'],
        });
        assert!(matches!(
            builder.push_letter('z'),
            Err(InvalidInputError::TooManyLetters(_))
        ));
    }

    #[test]
    fn builder_pop_and_reset() {
        let mut builder = LetterSetBuilder::new();
        builder.push("e").unwrap();
        builder.push("a").unwrap();

        assert_eq!(builder.pop(), Some('a'));
        assert_eq!(builder.pop(), Some('e'));
        assert_eq!(builder.pop(), None);
        assert_eq!(builder.state(), BuilderState::AwaitingCenter);

        builder.push("q").unwrap();
        builder.reset();
        assert_eq!(builder, LetterSetBuilder::new());
    }

    #[test]
    fn builder_finish_partial_puzzle() {
        let mut builder = LetterSetBuilder::new();
        assert!(builder.finish().is_none());

        builder.push("e").unwrap();
        let letters = builder.finish().unwrap();
        assert!(letters.allowed().is_empty());

        builder.push("a").unwrap();
        assert_eq!(builder.finish().unwrap().allowed(), &['a']);
    }
}
