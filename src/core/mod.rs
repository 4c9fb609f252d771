//! Core domain types for Wordle
//!
//! Words and feedback patterns. Everything here is pure and has clear
//! mathematical properties; the feedback rules live on [`Pattern::calculate`].

mod pattern;
mod word;

pub use pattern::{Mark, Pattern};
pub use word::{MAX_WORD_LEN, Word};
