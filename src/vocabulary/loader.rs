//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Lines are trimmed and blank lines skipped. Lines that are not valid words
/// are skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_scorer::vocabulary::loader::load_from_file;
///
/// let words = load_from_file("valid_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(words_from_lines(&content, path.as_ref()))
}

fn words_from_lines(content: &str, source: &Path) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    log::warn!(
                        "{}:{}: skipping \"{trimmed}\": {e}",
                        source.display(),
                        line_no + 1
                    );
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_scorer::vocabulary::loader::words_from_slice;
/// use wordle_scorer::vocabulary::VALID_WORDS;
///
/// let words = words_from_slice(VALID_WORDS);
/// assert_eq!(words.len(), VALID_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
