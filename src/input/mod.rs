//! Puzzle letter input
//!
//! Validation that turns loosely typed strings (command-line flags, prompt
//! answers, key presses) into a typed [`LetterSet`](crate::core::LetterSet).

mod args;
mod builder;

pub use args::{PartialLetters, parse_args};
pub use builder::{BuilderState, LetterSetBuilder};
