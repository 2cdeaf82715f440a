//! Command implementations

pub mod simple;
pub mod solve;

pub use simple::{PromptError, prompt_letters};
pub use solve::{SolveConfig, load_dictionary, resolve_letters, solve_puzzle};
