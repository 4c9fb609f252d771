//! Error types for every layer of the crate
//!
//! Engine errors are contract violations or data inconsistencies; the session,
//! vocabulary and config errors wrap them for the front ends.

use crate::core::Pattern;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced when constructing a [`Word`](crate::core::Word)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be between 1 and {max} letters, got {0}", max = crate::core::MAX_WORD_LEN)]
    InvalidLength(usize),

    #[error("word must contain only ASCII letters")]
    NonAscii,

    #[error("word contains invalid characters")]
    InvalidCharacters,
}

/// Errors produced by the guess-evaluation engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Guess and target have different lengths.
    #[error("guess has {guess} letters but target has {target}")]
    LengthMismatch { guess: usize, target: usize },

    /// A feedback pattern cannot describe a guess of a different length.
    #[error("pattern has {pattern} marks but guess has {guess} letters")]
    PatternLengthMismatch { pattern: usize, guess: usize },

    /// Observed feedback ruled out every candidate.
    #[error("no candidates remain after \"{guess}\" with feedback {pattern}")]
    EmptyCandidateSet { guess: String, pattern: Pattern },
}

/// Errors produced while building a [`Vocabulary`](crate::vocabulary::Vocabulary)
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("could not read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list contains no valid words")]
    Empty,

    #[error("word list mixes lengths: expected {expected} letters, found \"{word}\"")]
    MixedLengths { expected: usize, word: String },
}

/// Errors produced by a [`GameSession`](crate::session::GameSession)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("\"{0}\" is not in the word list")]
    NotInVocabulary(String),

    #[error("target \"{0}\" is not in the word list")]
    TargetNotInVocabulary(String),

    #[error("turn limit must be at least 1")]
    NoTurns,

    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Errors produced while loading a [`GameConfig`](crate::config::GameConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config")]
    Parse(#[from] serde_json::Error),

    #[error("configured target word is invalid")]
    InvalidTarget(#[source] WordError),

    #[error("max_turns must be at least 1")]
    InvalidMaxTurns,
}
