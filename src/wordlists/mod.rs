//! Word lists for the Spelling Bee
//!
//! The dictionary is an external, newline-separated word list read once at startup.

pub mod loader;

pub use loader::{load_from_file, parse_word_list, words_from_slice};

/// Default word list path, relative to the working directory
pub const DEFAULT_WORDLIST: &str = "nyt.txt";
