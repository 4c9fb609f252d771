//! Vocabularies for a game
//!
//! A vocabulary is the fixed set of words targets and guesses are drawn from.
//! It is read once and never changes. An embedded default list is compiled
//! into the binary.

mod embedded;
pub mod loader;

pub use embedded::{VALID_WORDS, VALID_WORDS_COUNT};

use crate::core::Word;
use crate::engine::CandidateSet;
use crate::error::VocabularyError;
use rand::Rng;
use std::path::Path;

/// An immutable set of words sharing one length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: CandidateSet,
    word_len: usize,
}

impl Vocabulary {
    /// Build a vocabulary, dropping duplicates
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` for no words and
    /// `VocabularyError::MixedLengths` if the words differ in length.
    pub fn new(words: Vec<Word>) -> Result<Self, VocabularyError> {
        let word_len = words.first().ok_or(VocabularyError::Empty)?.len();

        if let Some(odd) = words.iter().find(|w| w.len() != word_len) {
            return Err(VocabularyError::MixedLengths {
                expected: word_len,
                word: odd.text().to_string(),
            });
        }

        Ok(Self {
            words: CandidateSet::new(words),
            word_len,
        })
    }

    /// Load a vocabulary from a newline-delimited file
    ///
    /// # Errors
    /// Returns `VocabularyError::Io` if the file cannot be read, or any error
    /// from [`Vocabulary::new`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let vocabulary = Self::new(words)?;
        log::info!(
            "loaded {} words of length {} from {}",
            vocabulary.len(),
            vocabulary.word_len(),
            path.display()
        );
        Ok(vocabulary)
    }

    /// The vocabulary compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded list is broken.
    pub fn embedded() -> Result<Self, VocabularyError> {
        Self::new(loader::words_from_slice(VALID_WORDS))
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// The whole vocabulary as a candidate set, as at the start of a game
    #[inline]
    #[must_use]
    pub const fn as_candidates(&self) -> &CandidateSet {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Pick a word uniformly at random
    pub fn choose_random<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words.words()[rng.random_range(0..self.len())]
    }
}
