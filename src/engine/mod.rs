//! Guess-evaluation engine
//!
//! Feedback → candidate filtering → outcome distribution → skill/luck scoring.
//! Every function here is pure over its arguments.

mod distribution;
mod filter;
mod score;

pub use distribution::{OutcomeMap, distribution, shannon_entropy};
pub use filter::{CandidateSet, filter};
pub use score::{
    MAX_LUCK, MAX_SKILL, NEUTRAL_SCORE, ScoreSheet, Turn, TurnScore, luck, replay, score,
    score_turn, skill,
};

use crate::core::{Pattern, Word};
use crate::error::EngineError;

/// Feedback for `guess` against `target`
///
/// # Errors
/// Returns `EngineError::LengthMismatch` if the words differ in length.
pub fn feedback(guess: &Word, target: &Word) -> Result<Pattern, EngineError> {
    Pattern::calculate(guess, target)
}
