//! Command implementations

pub mod analyze;
pub mod score;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_word};
pub use score::{ScoreReport, score_guesses};
pub use simple::run_simple;
