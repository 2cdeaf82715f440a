//! Core domain types for the Spelling Bee
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and validated on construction.

mod letters;
mod word;

pub use letters::{
    InvalidInputError, LetterMask, LetterSet, MAX_ALLOWED, PUZZLE_SIZE, parse_letter,
};
pub use word::{Word, WordError};
