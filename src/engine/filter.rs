//! Candidate sets and filtering by observed feedback

use crate::core::{Pattern, Word};
use crate::error::EngineError;

/// Words still consistent with all feedback observed so far
///
/// Holds distinct words in sorted order. Sets are replaced, never mutated,
/// when new feedback arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Build a set from arbitrary words, dropping duplicates
    #[must_use]
    pub fn new(mut words: Vec<Word>) -> Self {
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Number of candidates
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

    /// Check membership
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// The candidates in sorted order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Filter by observed feedback, failing if nothing survives
    ///
    /// # Errors
    /// Returns `EngineError::EmptyCandidateSet` when the feedback is inconsistent
    /// with every candidate, or any error from [`filter`].
    pub fn narrow(&self, guess: &Word, pattern: Pattern) -> Result<Self, EngineError> {
        let next = filter(guess, pattern, self)?;
        if next.is_empty() {
            return Err(EngineError::EmptyCandidateSet {
                guess: guess.text().to_string(),
                pattern,
            });
        }
        Ok(next)
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Keep the candidates that would produce exactly `pattern` for `guess`
///
/// Each candidate is treated as a hypothetical target and the full feedback is
/// recomputed, so filtering always agrees with [`Pattern::calculate`].
///
/// # Errors
/// Returns `EngineError::PatternLengthMismatch` if the pattern does not fit the
/// guess, or `EngineError::LengthMismatch` if a candidate has another length.
///
/// # Examples
/// ```
/// use wordle_scorer::core::{Pattern, Word};
/// use wordle_scorer::engine::{CandidateSet, filter};
///
/// let candidates: CandidateSet = ["crane", "crate", "slate"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let guess = Word::new("crane").unwrap();
/// let pattern = Pattern::from_str("GGG-G").unwrap();
///
/// let remaining = filter(&guess, pattern, &candidates).unwrap();
/// assert_eq!(remaining.len(), 1);
/// ```
pub fn filter(
    guess: &Word,
    pattern: Pattern,
    candidates: &CandidateSet,
) -> Result<CandidateSet, EngineError> {
    if pattern.len() != guess.len() {
        return Err(EngineError::PatternLengthMismatch {
            pattern: pattern.len(),
            guess: guess.len(),
        });
    }

    let mut words = Vec::new();
    for candidate in candidates {
        if Pattern::calculate(guess, candidate)? == pattern {
            words.push(candidate.clone());
        }
    }

    // Input order is sorted and distinct, so the output is too
    Ok(CandidateSet { words })
}
