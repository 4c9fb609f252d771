//! Score a fixed sequence of guesses
//!
//! Plays the guesses against a known target without any interaction, e.g. to
//! score a game after the fact.

use crate::core::Word;
use crate::error::SessionError;
use crate::session::{GameSession, GameStatus, TurnRecord};
use crate::vocabulary::Vocabulary;

/// Result of scoring a game
pub struct ScoreReport {
    pub target: String,
    /// Each record with the share of the vocabulary it left, in percent
    pub turns: Vec<(TurnRecord, f64)>,
    pub solved: bool,
    pub cumulative_skill: f64,
    pub cumulative_luck: f64,
    pub total_entropy: f64,
}

/// Play `guesses` against `target` and collect the scores
///
/// # Errors
///
/// Returns an error if the target or any guess is not in the vocabulary, or if
/// guesses continue after the game ended.
pub fn score_guesses(
    vocabulary: &Vocabulary,
    target: Word,
    max_turns: usize,
    guesses: &[String],
) -> Result<ScoreReport, SessionError> {
    let mut session = GameSession::new(vocabulary, target, max_turns)?;

    for guess in guesses {
        session.submit_guess(guess)?;
    }

    let sheet = session.score_sheet()?;
    let turns = session
        .history()
        .iter()
        .map(|record| (record.clone(), session.remaining_percentage(record)))
        .collect();

    Ok(ScoreReport {
        target: session.target().text().to_string(),
        turns,
        solved: session.status() == GameStatus::Won,
        cumulative_skill: sheet.cumulative_skill(),
        cumulative_luck: sheet.cumulative_luck(),
        total_entropy: sheet.total_entropy(),
    })
}
