//! Wordle Scorer
//!
//! Evaluates Wordle guesses and rates every turn of a game on two axes:
//! skill, how well the guess was chosen given what was known, and luck, how
//! favourable the feedback that came back was.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_scorer::core::Word;
//! use wordle_scorer::engine::{CandidateSet, Turn, feedback, score_turn};
//!
//! let prior: CandidateSet = ["crane", "slate", "trace", "crate", "grade"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("crate").unwrap();
//! let pattern = feedback(&guess, &target).unwrap();
//! assert_eq!(pattern.to_string(), "🟩🟩🟩⬜🟩");
//!
//! let score = score_turn(Turn { guess: &guess, feedback: pattern, prior: &prior }).unwrap();
//! assert!((score.skill - 80.0).abs() < 1e-9);
//! ```

// Core domain types
pub mod core;

// Feedback, filtering, distributions and scoring
pub mod engine;

// Word lists
pub mod vocabulary;

// Game state
pub mod session;

// File configuration
pub mod config;

// Error types
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
