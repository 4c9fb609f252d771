//! Word analysis command
//!
//! Prior-knowledge-free analysis of one guess: its outcome distribution over
//! the whole vocabulary, as if it were the first guess of a game.

use crate::core::{Pattern, Word};
use crate::engine::{distribution, skill};
use crate::error::SessionError;
use crate::vocabulary::Vocabulary;

/// How many of the largest outcome buckets to report
const TOP_BUCKETS: usize = 5;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub skill: f64,
    pub distinct_patterns: usize,
    pub largest_bucket: usize,
    pub total_candidates: usize,
    /// Largest buckets first
    pub top_buckets: Vec<(Pattern, usize)>,
}

/// Analyze a guess against every word in the vocabulary
///
/// # Errors
///
/// Returns an error if:
/// - The word is malformed
/// - The word is not in the vocabulary
pub fn analyze_word(word: &str, vocabulary: &Vocabulary) -> Result<AnalysisResult, SessionError> {
    let guess = Word::new(word.trim())?;
    if !vocabulary.contains(&guess) {
        return Err(SessionError::NotInVocabulary(guess.text().to_string()));
    }

    let outcomes = distribution(&guess, vocabulary.as_candidates())?;
    let entropy = outcomes.entropy();

    let mut top_buckets = outcomes.sorted_buckets();
    top_buckets.sort_by(|a, b| b.1.cmp(&a.1));
    top_buckets.truncate(TOP_BUCKETS);

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        entropy,
        expected_reduction: entropy.exp2(),
        expected_remaining: outcomes.expected_remaining(),
        skill: skill(&outcomes),
        distinct_patterns: outcomes.distinct_patterns(),
        largest_bucket: outcomes.largest_bucket(),
        total_candidates: outcomes.total(),
        top_buckets,
    })
}
