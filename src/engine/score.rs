//! Skill and luck scoring
//!
//! Each turn is scored against the candidate set that was live *before* the
//! guess, never against the whole vocabulary:
//!
//! - **Skill** is the share of candidates outside the largest outcome bucket,
//!   scaled to `[0, 100]`. It depends only on how the guess splits the
//!   candidates, not on which pattern came up.
//! - **Luck** compares the candidates actually eliminated (`n - c_observed`)
//!   with the reduction an average bucket would give (`n - n/k`), as a
//!   percentage clamped to `[-100, 100]`. Zero means an average outcome.
//!
//! Degenerate inputs (no candidates, a single bucket, a zero denominator)
//! score [`NEUTRAL_SCORE`].

use super::{CandidateSet, OutcomeMap, distribution};
use crate::core::{Pattern, Word};
use crate::error::EngineError;

/// Highest possible skill
pub const MAX_SKILL: f64 = 100.0;

/// Luck is clamped to `[-MAX_LUCK, MAX_LUCK]`
pub const MAX_LUCK: f64 = 100.0;

/// Score returned when a formula has nothing to measure
pub const NEUTRAL_SCORE: f64 = 0.0;

/// One guess as the scorer sees it
#[derive(Debug, Clone, Copy)]
pub struct Turn<'a> {
    pub guess: &'a Word,
    pub feedback: Pattern,
    /// Candidates before this guess was applied
    pub prior: &'a CandidateSet,
}

/// Scores and supporting figures for one guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnScore {
    /// Expected information gain in bits
    pub entropy: f64,
    pub skill: f64,
    pub luck: f64,
    /// `n`
    pub candidates_before: usize,
    /// `k`
    pub distinct_patterns: usize,
    /// `c_observed`
    pub observed_bucket: usize,
    pub expected_remaining: f64,
}

/// Skill for a guess whose outcomes are `outcomes`
#[must_use]
pub fn skill(outcomes: &OutcomeMap) -> f64 {
    let n = outcomes.total();
    if n == 0 {
        return NEUTRAL_SCORE;
    }

    let spread = (n - outcomes.largest_bucket()) as f64 / n as f64;
    (spread * MAX_SKILL).clamp(0.0, MAX_SKILL)
}

/// Luck of observing `observed` given `outcomes`
#[must_use]
pub fn luck(outcomes: &OutcomeMap, observed: Pattern) -> f64 {
    let n = outcomes.total();
    let k = outcomes.distinct_patterns();
    if n == 0 || k <= 1 {
        return NEUTRAL_SCORE;
    }

    let n = n as f64;
    let mean_bucket = n / k as f64;
    let expected_reduction = n - mean_bucket;
    if expected_reduction <= 0.0 {
        return NEUTRAL_SCORE;
    }

    let actual_reduction = n - outcomes.count(observed) as f64;
    let luck = (actual_reduction - expected_reduction) / expected_reduction * 100.0;
    if luck.is_finite() {
        luck.clamp(-MAX_LUCK, MAX_LUCK)
    } else {
        NEUTRAL_SCORE
    }
}

/// Score one guess from scratch
///
/// # Errors
/// Returns `EngineError::LengthMismatch` if the guess and candidates differ in
/// length.
pub fn score_turn(turn: Turn<'_>) -> Result<TurnScore, EngineError> {
    let outcomes = distribution(turn.guess, turn.prior)?;

    let score = TurnScore {
        entropy: outcomes.entropy(),
        skill: skill(&outcomes),
        luck: luck(&outcomes, turn.feedback),
        candidates_before: outcomes.total(),
        distinct_patterns: outcomes.distinct_patterns(),
        observed_bucket: outcomes.count(turn.feedback),
        expected_remaining: outcomes.expected_remaining(),
    };

    log::debug!(
        "scored {} {}: n={} k={} observed={} entropy={:.3} skill={:.1} luck={:.1}",
        turn.guess,
        turn.feedback,
        score.candidates_before,
        score.distinct_patterns,
        score.observed_bucket,
        score.entropy,
        score.skill,
        score.luck
    );

    Ok(score)
}

/// Score a whole history, each turn against its own prior candidates
///
/// # Errors
/// Propagates the first error from [`score_turn`].
pub fn score(history: &[Turn<'_>]) -> Result<ScoreSheet, EngineError> {
    let turns = history
        .iter()
        .map(|&turn| score_turn(turn))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ScoreSheet { turns })
}

/// Rebuild every turn's prior candidates from `initial` and score the history
///
/// Nothing is carried over between calls, so the same inputs always yield the
/// same sheet.
///
/// # Errors
/// Returns `EngineError::EmptyCandidateSet` if some feedback rules out every
/// remaining candidate before the last guess, or any length error.
pub fn replay(
    initial: &CandidateSet,
    guesses: &[(Word, Pattern)],
) -> Result<ScoreSheet, EngineError> {
    let mut priors = Vec::with_capacity(guesses.len());
    let mut current = initial.clone();

    for (i, (guess, feedback)) in guesses.iter().enumerate() {
        let prior = if i + 1 < guesses.len() {
            let next = current.narrow(guess, *feedback)?;
            std::mem::replace(&mut current, next)
        } else {
            current.clone()
        };
        priors.push(prior);
    }

    let history: Vec<Turn<'_>> = guesses
        .iter()
        .zip(&priors)
        .map(|((guess, feedback), prior)| Turn {
            guess,
            feedback: *feedback,
            prior,
        })
        .collect();

    score(&history)
}

/// Per-turn scores for a game, in submission order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreSheet {
    turns: Vec<TurnScore>,
}

impl ScoreSheet {
    #[must_use]
    pub fn turns(&self) -> &[TurnScore] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&TurnScore> {
        self.turns.last()
    }

    #[must_use]
    pub fn skills(&self) -> Vec<f64> {
        self.turns.iter().map(|t| t.skill).collect()
    }

    #[must_use]
    pub fn lucks(&self) -> Vec<f64> {
        self.turns.iter().map(|t| t.luck).collect()
    }

    /// Mean skill over all turns
    #[must_use]
    pub fn cumulative_skill(&self) -> f64 {
        mean(self.turns.iter().map(|t| t.skill))
    }

    /// Mean luck over all turns
    #[must_use]
    pub fn cumulative_luck(&self) -> f64 {
        mean(self.turns.iter().map(|t| t.luck))
    }

    /// Total expected information over all turns, in bits
    #[must_use]
    pub fn total_entropy(&self) -> f64 {
        self.turns.iter().map(|t| t.entropy).sum()
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let count = values.len();
    if count == 0 {
        return NEUTRAL_SCORE;
    }
    values.sum::<f64>() / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| word(w)).collect()
    }

    fn feedback(guess: &str, target: &str) -> Pattern {
        Pattern::calculate(&word(guess), &word(target)).unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn even_split_scores_average_luck() {
        let prior = set(&["crane", "slate", "trace", "crate", "grade"]);
        let guess = word("crane");
        let turn = Turn {
            guess: &guess,
            feedback: feedback("crane", "crate"),
            prior: &prior,
        };

        let score = score_turn(turn).unwrap();

        // Five singleton buckets: 4 of 5 outside the largest, and the observed
        // bucket is exactly average
        assert!(close(score.skill, 80.0));
        assert!(close(score.luck, 0.0));
        assert!(close(score.entropy, 5f64.log2()));
        assert_eq!(score.candidates_before, 5);
        assert_eq!(score.distinct_patterns, 5);
        assert_eq!(score.observed_bucket, 1);
    }

    #[test]
    fn small_bucket_is_lucky_large_bucket_is_not() {
        let prior = set(&["irate", "crate", "grate", "slate"]);
        let guess = word("crane");

        let lucky = score_turn(Turn {
            guess: &guess,
            feedback: feedback("crane", "crate"),
            prior: &prior,
        })
        .unwrap();
        let unlucky = score_turn(Turn {
            guess: &guess,
            feedback: feedback("crane", "grate"),
            prior: &prior,
        })
        .unwrap();

        // n=4, k=3, expected reduction 4 - 4/3
        assert!(close(lucky.luck, 12.5));
        assert!(close(unlucky.luck, -25.0));

        // Skill does not depend on the observed pattern
        assert!(close(lucky.skill, 50.0));
        assert!(close(unlucky.skill, lucky.skill));
    }

    #[test]
    fn single_bucket_is_neutral() {
        let prior = set(&["aaaaa", "bbbbb", "ccccc"]);
        let guess = word("zzzzz");
        let score = score_turn(Turn {
            guess: &guess,
            feedback: Pattern::from_str("-----").unwrap(),
            prior: &prior,
        })
        .unwrap();

        assert!(close(score.skill, 0.0));
        assert!(close(score.luck, NEUTRAL_SCORE));
        assert!(close(score.entropy, 0.0));
    }

    #[test]
    fn empty_prior_is_neutral() {
        let prior = CandidateSet::default();
        let guess = word("crane");
        let score = score_turn(Turn {
            guess: &guess,
            feedback: Pattern::perfect(5),
            prior: &prior,
        })
        .unwrap();

        assert!(close(score.skill, NEUTRAL_SCORE));
        assert!(close(score.luck, NEUTRAL_SCORE));
        assert!(score.entropy.is_finite());
        assert!(score.expected_remaining.is_finite());
    }

    #[test]
    fn score_rejects_length_mismatch() {
        let prior = set(&["crane"]);
        let guess = word("cranes");
        let result = score_turn(Turn {
            guess: &guess,
            feedback: Pattern::perfect(6),
            prior: &prior,
        });
        assert!(matches!(result, Err(EngineError::LengthMismatch { .. })));
    }

    #[test]
    fn replay_scores_each_turn_against_its_prior() {
        let initial = set(&["crane", "slate", "trace", "crate", "grade"]);
        let guesses = vec![
            (word("crane"), feedback("crane", "crate")),
            (word("crate"), feedback("crate", "crate")),
        ];

        let sheet = replay(&initial, &guesses).unwrap();

        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.turns()[0].candidates_before, 5);
        assert_eq!(sheet.turns()[1].candidates_before, 1);
        assert_eq!(sheet.skills(), [80.0, 0.0]);
        assert_eq!(sheet.lucks(), [0.0, 0.0]);
        assert!(close(sheet.cumulative_skill(), 40.0));
        assert!(close(sheet.total_entropy(), 5f64.log2()));
    }

    #[test]
    fn replay_narrows_through_a_three_turn_game() {
        let initial = set(&["crane", "slate", "trace", "crate", "grade"]);
        let guesses: Vec<(Word, Pattern)> = ["grade", "crane", "crate"]
            .iter()
            .map(|g| (word(g), feedback(g, "crate")))
            .collect();

        let sheet = replay(&initial, &guesses).unwrap();

        let sizes: Vec<usize> = sheet.turns().iter().map(|t| t.candidates_before).collect();
        assert_eq!(sizes, [5, 3, 1]);
        assert_eq!(sheet.last().map(|t| t.observed_bucket), Some(1));
    }

    #[test]
    fn replay_reports_inconsistent_feedback() {
        let initial = set(&["crane", "slate"]);
        let guesses = vec![
            (word("trace"), Pattern::perfect(5)),
            (word("crane"), Pattern::perfect(5)),
        ];

        assert!(matches!(
            replay(&initial, &guesses),
            Err(EngineError::EmptyCandidateSet { .. })
        ));
    }

    #[test]
    fn replay_empty_history() {
        let sheet = replay(&set(&["crane"]), &[]).unwrap();
        assert!(sheet.is_empty());
        assert!(close(sheet.cumulative_skill(), NEUTRAL_SCORE));
        assert!(close(sheet.cumulative_luck(), NEUTRAL_SCORE));
        assert!(sheet.last().is_none());
    }

    fn game() -> impl Strategy<Value = (Vec<String>, usize, Vec<usize>)> {
        proptest::collection::vec("[a-d]{4}", 1..25).prop_flat_map(|words| {
            let n = words.len();
            (Just(words), 0..n, proptest::collection::vec(0..n, 1..5))
        })
    }

    proptest! {
        #[test]
        fn scores_are_bounded_and_deterministic((words, target_idx, guess_idxs) in game()) {
            let initial: CandidateSet = words.iter().map(|w| word(w)).collect();
            let target = word(&words[target_idx]);
            let guesses: Vec<(Word, Pattern)> = guess_idxs
                .iter()
                .map(|&i| {
                    let guess = word(&words[i]);
                    let pattern = Pattern::calculate(&guess, &target).unwrap();
                    (guess, pattern)
                })
                .collect();

            let first = replay(&initial, &guesses).unwrap();
            let second = replay(&initial, &guesses).unwrap();
            prop_assert_eq!(&first, &second);

            for turn in first.turns() {
                prop_assert!(turn.skill.is_finite() && turn.luck.is_finite());
                prop_assert!((0.0..=MAX_SKILL).contains(&turn.skill));
                prop_assert!((-MAX_LUCK..=MAX_LUCK).contains(&turn.luck));
                prop_assert!(turn.observed_bucket >= 1);
            }
        }
    }
}
