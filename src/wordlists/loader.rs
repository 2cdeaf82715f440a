//! Word list loading utilities
//!
//! Provides functions to load a dictionary from a file or from in-memory slices.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// The first `skip_lines` lines are ignored (word lists often carry a header).
/// Each remaining line is trimmed and lowercased; blank lines, lines that are
/// not purely alphabetic, and repeated words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::loader::load_from_file;
///
/// let words = load_from_file("nyt.txt", 2).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, skip_lines: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words = parse_word_list(&content, skip_lines);

    log::debug!(
        "loaded {} words from {}",
        words.len(),
        path.as_ref().display()
    );

    Ok(words)
}

/// Parse newline-separated words, with the same rules as [`load_from_file`]
#[must_use]
pub fn parse_word_list(content: &str, skip_lines: usize) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();

    content
        .lines()
        .skip(skip_lines)
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Convert a string slice to a Word vector
///
/// Entries that are not valid words are skipped. Duplicates are kept.
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["able", "cable", "c4ble"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["able", "allele", "allocable"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "able");
        assert_eq!(words[1].text(), "allele");
        assert_eq!(words[2].text(), "allocable");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["able", "don't", "", "ABLE", "a1"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "able");
        assert_eq!(words[1].text(), "able"); // Lowercased
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn parse_word_list_skips_header() {
        let content = "NYT Spelling Bee word list\n\nable\ncable\n";
        let words = parse_word_list(content, 2);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "able");
    }

    #[test]
    fn parse_word_list_drops_blank_and_invalid_lines() {
        let content = "able\n\n   \nself-aware\n  Cable  \nzoo42\r\nbloke\r\n";
        let words = parse_word_list(content, 0);

        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["able", "cable", "bloke"]);
    }

    #[test]
    fn parse_word_list_drops_repeats() {
        let content = "able\ncable\nABLE\nable\n";
        let words = parse_word_list(content, 0);

        let texts: Vec<_> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["able", "cable"]);
    }

    #[test]
    fn parse_word_list_skip_past_end() {
        assert!(parse_word_list("able\ncable\n", 10).is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "spelling_bee_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "header\nable\nlockable\n").unwrap();

        let words = load_from_file(&path, 1).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "lockable");
    }

    #[test]
    fn load_from_file_missing() {
        let result = load_from_file("definitely/not/a/real/word/list.txt", 0);
        assert!(result.is_err());
    }
}
