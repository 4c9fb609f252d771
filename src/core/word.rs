//! Word representation
//!
//! A Word stores a lower-cased run of ASCII letters. All words in one game
//! share a length, but the type itself only bounds it by [`MAX_WORD_LEN`].

use crate::error::WordError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Longest word a [`Pattern`](super::Pattern) can encode
pub const MAX_WORD_LEN: usize = 20;

/// A case-normalized word
///
/// Ordering is lexicographic so candidate sets can be kept sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is zero or longer than [`MAX_WORD_LEN`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_scorer::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_lowercase();
        if text.is_empty() || text.len() > MAX_WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes, one per letter
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // Words are never empty
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    /// How many times each letter occurs
    ///
    /// Used for feedback calculation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_other_lengths() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("rhythmic").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
        assert!(matches!(
            Word::new("a".repeat(MAX_WORD_LEN + 1)),
            Err(WordError::InvalidLength(21))
        ));
        assert_eq!(
            WordError::InvalidLength(21).to_string(),
            "word must be between 1 and 20 letters, got 21"
        );
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran "), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn non_ascii_is_rejected_before_lowercasing() {
        // Kelvin sign lowercases to an ASCII 'k'
        assert_eq!(Word::new("\u{212A}nife"), Err(WordError::NonAscii));
        assert_eq!(Word::new("é".repeat(15)), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(4), b'e');
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn word_char_counts_all_same() {
        let word = Word::new("aaaaa").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'a'), Some(&5));
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words = vec![
            Word::new("slate").unwrap(),
            Word::new("crane").unwrap(),
            Word::new("crate").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "crate", "slate"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
