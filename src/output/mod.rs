//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{format_totals, format_turn_record, print_analysis_result, print_score_report};
