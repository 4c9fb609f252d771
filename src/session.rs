//! Game session: turn history and the live candidate set
//!
//! The session validates guesses, calls the engine once per guess and keeps
//! an append-only record of every turn. The engine itself stays pure; all
//! mutable game state lives here.

use crate::core::{Pattern, Word};
use crate::engine::{CandidateSet, ScoreSheet, replay};
use crate::error::SessionError;
use crate::vocabulary::Vocabulary;

/// Turn limit of the classic game
pub const DEFAULT_MAX_TURNS: usize = 6;

/// One submitted guess and everything derived from it
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRecord {
    pub guess: Word,
    pub feedback: Pattern,
    /// Candidates ruled out by this guess
    pub eliminated: usize,
    /// Candidates still consistent after this guess
    pub remaining: usize,
    pub entropy: f64,
    pub skill: f64,
    pub luck: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A single game against a hidden target
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    vocabulary: &'a Vocabulary,
    target: Word,
    candidates: CandidateSet,
    history: Vec<TurnRecord>,
    max_turns: usize,
}

impl<'a> GameSession<'a> {
    /// Start a game
    ///
    /// # Errors
    /// Returns `SessionError::TargetNotInVocabulary` if the target is not a
    /// vocabulary word, and `SessionError::NoTurns` for a zero turn limit.
    pub fn new(
        vocabulary: &'a Vocabulary,
        target: Word,
        max_turns: usize,
    ) -> Result<Self, SessionError> {
        if max_turns == 0 {
            return Err(SessionError::NoTurns);
        }
        if !vocabulary.contains(&target) {
            return Err(SessionError::TargetNotInVocabulary(target.text().to_string()));
        }

        log::debug!(
            "new session: {} candidates, {max_turns} turns",
            vocabulary.len()
        );

        Ok(Self {
            vocabulary,
            target,
            candidates: vocabulary.as_candidates().clone(),
            history: Vec::new(),
            max_turns,
        })
    }

    /// Evaluate a guess and append its record
    ///
    /// State changes only when every step succeeds, so a rejected guess leaves
    /// the session exactly as it was.
    ///
    /// # Errors
    /// - `SessionError::GameOver` once the game is won or lost
    /// - `SessionError::InvalidWord` for malformed input
    /// - `SessionError::NotInVocabulary` for unknown words
    /// - `SessionError::Engine` if the engine reports an inconsistency
    pub fn submit_guess(&mut self, input: &str) -> Result<&TurnRecord, SessionError> {
        if self.status().is_over() {
            return Err(SessionError::GameOver);
        }

        let guess = Word::new(input.trim())?;
        if !self.vocabulary.contains(&guess) {
            return Err(SessionError::NotInVocabulary(guess.text().to_string()));
        }

        let feedback = Pattern::calculate(&guess, &self.target)?;
        let next = self.candidates.narrow(&guess, feedback)?;

        let mut guesses = self.guesses();
        guesses.push((guess.clone(), feedback));
        let sheet = replay(self.vocabulary.as_candidates(), &guesses)?;
        let score = sheet.turns()[guesses.len() - 1];

        let record = TurnRecord {
            guess,
            feedback,
            eliminated: self.candidates.len() - next.len(),
            remaining: next.len(),
            entropy: score.entropy,
            skill: score.skill,
            luck: score.luck,
        };

        log::debug!(
            "turn {}: {} {} eliminated {} remaining {}",
            self.history.len() + 1,
            record.guess,
            record.feedback,
            record.eliminated,
            record.remaining
        );

        self.candidates = next;
        self.history.push(record);
        Ok(&self.history[self.history.len() - 1])
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.history.iter().any(|r| r.feedback.is_perfect()) {
            GameStatus::Won
        } else if self.history.len() >= self.max_turns {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Recompute every turn's scores from scratch
    ///
    /// # Errors
    /// Only fails if the history is inconsistent, which `submit_guess` prevents.
    pub fn score_sheet(&self) -> Result<ScoreSheet, SessionError> {
        Ok(replay(self.vocabulary.as_candidates(), &self.guesses())?)
    }

    /// Share of the vocabulary still consistent after `record`
    #[must_use]
    pub fn remaining_percentage(&self, record: &TurnRecord) -> f64 {
        record.remaining as f64 / self.vocabulary.len() as f64 * 100.0
    }

    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub const fn vocabulary(&self) -> &'a Vocabulary {
        self.vocabulary
    }

    /// The hidden word; front ends reveal it only once the game is over
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    #[must_use]
    pub fn turns_left(&self) -> usize {
        self.max_turns.saturating_sub(self.history.len())
    }

    fn guesses(&self) -> Vec<(Word, Pattern)> {
        self.history
            .iter()
            .map(|r| (r.guess.clone(), r.feedback))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::loader::words_from_slice;

    fn vocabulary() -> Vocabulary {
        Vocabulary::new(words_from_slice(&["crane", "slate", "trace", "crate", "grade"])).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn winning_game() {
        let vocabulary = vocabulary();
        let mut session = GameSession::new(&vocabulary, word("crate"), DEFAULT_MAX_TURNS).unwrap();

        let first = session.submit_guess("CRANE").unwrap().clone();
        assert_eq!(first.feedback, Pattern::from_str("GGG-G").unwrap());
        assert_eq!(first.eliminated, 4);
        assert_eq!(first.remaining, 1);
        assert!((first.skill - 80.0).abs() < 1e-9);
        assert!(first.luck.abs() < 1e-9);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.candidates().words(), [word("crate")]);
        assert!((session.remaining_percentage(&first) - 20.0).abs() < 1e-9);

        let second = session.submit_guess("crate").unwrap().clone();
        assert!(second.feedback.is_perfect());
        assert_eq!(second.eliminated, 0);
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn guesses_after_win_are_rejected() {
        let vocabulary = vocabulary();
        let mut session = GameSession::new(&vocabulary, word("crate"), DEFAULT_MAX_TURNS).unwrap();
        session.submit_guess("crate").unwrap();

        assert_eq!(session.submit_guess("slate"), Err(SessionError::GameOver));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn turn_limit_loses() {
        let vocabulary = vocabulary();
        let mut session = GameSession::new(&vocabulary, word("crate"), 2).unwrap();
        session.submit_guess("slate").unwrap();
        assert_eq!(session.turns_left(), 1);
        session.submit_guess("grade").unwrap();

        assert_eq!(session.status(), GameStatus::Lost);
        assert!(matches!(session.submit_guess("crate"), Err(SessionError::GameOver)));
    }

    #[test]
    fn unknown_and_malformed_words_leave_state_untouched() {
        let vocabulary = vocabulary();
        let mut session = GameSession::new(&vocabulary, word("crate"), DEFAULT_MAX_TURNS).unwrap();

        assert_eq!(
            session.submit_guess("zebra"),
            Err(SessionError::NotInVocabulary("zebra".to_string()))
        );
        assert!(matches!(
            session.submit_guess("cr4te"),
            Err(SessionError::InvalidWord(_))
        ));
        assert!(matches!(
            session.submit_guess("crates"),
            Err(SessionError::NotInVocabulary(_))
        ));

        assert!(session.history().is_empty());
        assert_eq!(session.candidates().len(), 5);
    }

    #[test]
    fn target_must_be_in_vocabulary() {
        let vocabulary = vocabulary();
        assert_eq!(
            GameSession::new(&vocabulary, word("zebra"), DEFAULT_MAX_TURNS).err(),
            Some(SessionError::TargetNotInVocabulary("zebra".to_string()))
        );
        assert_eq!(
            GameSession::new(&vocabulary, word("crate"), 0).err(),
            Some(SessionError::NoTurns)
        );
    }

    #[test]
    fn candidates_shrink_monotonically_and_keep_target() {
        let vocabulary = Vocabulary::embedded().unwrap();
        let target = word("trace");
        let mut session = GameSession::new(&vocabulary, target.clone(), DEFAULT_MAX_TURNS).unwrap();

        let mut previous = session.candidates().clone();
        for guess in ["about", "slate", "crane", "trace"] {
            session.submit_guess(guess).unwrap();
            let current = session.candidates();
            assert!(current.len() <= previous.len());
            assert!(current.iter().all(|w| previous.contains(w)));
            assert!(current.contains(&target));
            previous = current.clone();
        }
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn score_sheet_matches_records() {
        let vocabulary = Vocabulary::embedded().unwrap();
        let mut session = GameSession::new(&vocabulary, word("trace"), DEFAULT_MAX_TURNS).unwrap();
        session.submit_guess("slate").unwrap();
        session.submit_guess("crane").unwrap();

        let sheet = session.score_sheet().unwrap();
        assert_eq!(sheet.len(), 2);
        for (record, score) in session.history().iter().zip(sheet.turns()) {
            assert_eq!(record.skill.to_bits(), score.skill.to_bits());
            assert_eq!(record.luck.to_bits(), score.luck.to_bits());
        }
    }
}
