//! Formatting utilities for terminal output

use crate::solver::{FilterResult, Match};

/// Summary line for a result, e.g. `"3 words, including 1 pangram, were found:"`
#[must_use]
pub fn summary_line(word_count: usize, pangram_count: usize) -> String {
    if word_count == 0 {
        return "No words were found.".to_string();
    }

    let pangrams = if pangram_count > 0 {
        format!(
            ", including {pangram_count} pangram{},",
            plural(pangram_count)
        )
    } else {
        String::new()
    };
    let verb = if word_count == 1 { "was" } else { "were" };

    format!("{word_count} word{}{pangrams} {verb} found:", plural(word_count))
}

/// How a match is written: pangrams in uppercase
#[must_use]
pub fn display_word(m: &Match<'_>) -> String {
    if m.is_pangram {
        m.text().to_uppercase()
    } else {
        m.text().to_string()
    }
}

/// Plain-text rendering of a whole result, one tab-indented word per line
#[must_use]
pub fn format_result(result: &FilterResult<'_>) -> String {
    let mut out = summary_line(result.len(), result.pangram_count);
    out.push('\n');
    for m in &result.matches {
        out.push('\t');
        out.push_str(&display_word(m));
        out.push('\n');
    }
    out
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
