//! Display functions for command results

use super::formatters::{display_word, summary_line};
use crate::core::LetterSet;
use crate::solver::FilterResult;
use colored::Colorize;

/// Print the result of solving a puzzle
pub fn print_solve_result(letters: &LetterSet, result: &FilterResult<'_>, verbose: bool) {
    if verbose {
        println!("\n{}", "─".repeat(60).cyan());
        println!(
            "Puzzle: {}",
            letters.to_string().bright_yellow().bold()
        );
        println!("{}", "─".repeat(60).cyan());
    }

    println!("{}", summary_line(result.len(), result.pangram_count));

    for m in &result.matches {
        let word = display_word(m);
        if m.is_pangram {
            println!("\t{}", word.bright_green().bold());
        } else {
            println!("\t{word}");
        }
    }
}
