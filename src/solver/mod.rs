//! Spelling Bee solving
//!
//! This module contains the letter-constraint filter and the solver that
//! applies it to a loaded dictionary.

mod engine;
pub mod filter;

pub use engine::Solver;
pub use filter::{DEFAULT_MIN_LENGTH, FilterConfig, FilterResult, Match, filter_words};
