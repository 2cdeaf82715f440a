//! Spelling Bee Solver
//!
//! Finds every dictionary word for a Spelling Bee puzzle (one mandatory center
//! letter plus up to six outer letters) and flags the pangrams.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::LetterSet;
//! use spelling_bee::solver::{FilterConfig, Solver};
//! use spelling_bee::wordlists::words_from_slice;
//!
//! let words = words_from_slice(&["able", "lockable", "zoo"]);
//! let letters = LetterSet::new('e', &['a', 'b', 'c', 'k', 'l', 'o']).unwrap();
//!
//! let result = Solver::new(&words, FilterConfig::default()).solve(&letters);
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.pangram_count, 1);
//! ```

// Core domain types
pub mod core;

// Letter validation
pub mod input;

// Word filtering
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
