//! Outcome distributions and Shannon entropy
//!
//! Given a guess and a candidate set, every candidate is treated as a possible
//! target and the feedback it would produce is counted. The resulting
//! pattern → count map is the basis of every score.

use super::CandidateSet;
use crate::core::{Pattern, Word};
use crate::error::EngineError;
use rustc_hash::FxHashMap;

/// Pattern → number of candidates producing it, for one guess
///
/// Counts always sum to the size of the candidate set the map was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomeMap {
    buckets: FxHashMap<Pattern, usize>,
    total: usize,
}

impl OutcomeMap {
    /// Number of candidates the map was built from (`n`)
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct patterns (`k`)
    #[inline]
    #[must_use]
    pub fn distinct_patterns(&self) -> usize {
        self.buckets.len()
    }

    /// Candidates that would produce `pattern`
    #[must_use]
    pub fn count(&self, pattern: Pattern) -> usize {
        self.buckets.get(&pattern).copied().unwrap_or(0)
    }

    /// Size of the largest bucket (worst-case remaining candidates)
    #[must_use]
    pub fn largest_bucket(&self) -> usize {
        self.buckets.values().copied().max().unwrap_or(0)
    }

    /// Expected remaining candidates if the target is uniform over the set
    ///
    /// Σ c²/n over bucket counts c.
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.bucket_sizes()
            .into_iter()
            .map(|count| count as f64 * count as f64 / total)
            .sum()
    }

    /// Shannon entropy of the distribution, in bits
    #[must_use]
    pub fn entropy(&self) -> f64 {
        shannon_entropy(&self.buckets)
    }

    /// Bucket sizes, largest first
    #[must_use]
    pub fn bucket_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.buckets.values().copied().collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    /// Buckets sorted by pattern, for stable display
    #[must_use]
    pub fn sorted_buckets(&self) -> Vec<(Pattern, usize)> {
        let mut buckets: Vec<(Pattern, usize)> =
            self.buckets.iter().map(|(&p, &c)| (p, c)).collect();
        buckets.sort_unstable();
        buckets
    }
}

/// Partition `candidates` by the feedback each would produce for `guess`
///
/// Callers choose the hypothesis space by what they pass: the live candidate
/// set for "given what we know so far", or a whole vocabulary for a
/// prior-knowledge-free expectation.
///
/// # Errors
/// Returns `EngineError::LengthMismatch` if a candidate's length differs from
/// the guess.
///
/// # Examples
/// ```
/// use wordle_scorer::core::Word;
/// use wordle_scorer::engine::{CandidateSet, distribution};
///
/// let guess = Word::new("slate").unwrap();
/// let candidates: CandidateSet = ["slate", "zzzzz"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let outcomes = distribution(&guess, &candidates).unwrap();
/// assert_eq!(outcomes.distinct_patterns(), 2);
/// assert!((outcomes.entropy() - 1.0).abs() < 1e-9); // perfect binary split
/// ```
pub fn distribution(guess: &Word, candidates: &CandidateSet) -> Result<OutcomeMap, EngineError> {
    let mut buckets = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate)?;
        *buckets.entry(pattern).or_insert(0) += 1;
    }

    Ok(OutcomeMap {
        buckets,
        total: candidates.len(),
    })
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// Counts are summed in a fixed order so identical inputs give bit-identical
/// results.
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    let mut counts: Vec<usize> = pattern_counts
        .values()
        .copied()
        .filter(|&count| count > 0)
        .collect();
    counts.sort_unstable();

    counts
        .into_iter()
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}
