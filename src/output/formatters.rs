//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Render a guess as colored letter tiles
#[must_use]
pub fn colored_tiles(word: &Word, pattern: Pattern) -> String {
    word.text()
        .to_uppercase()
        .chars()
        .zip(pattern.marks())
        .map(|(letter, mark)| tile(letter, mark).to_string())
        .collect()
}

fn tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {letter} ").black().bold();
    match mark {
        Mark::Correct => text.on_green(),
        Mark::Present => text.on_yellow(),
        Mark::Absent => text.on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Luck with an explicit sign, e.g. `+12.5`
#[must_use]
pub fn signed(value: f64) -> String {
    // Avoid printing "-0.0"
    let value = if value.abs() < 0.05 { 0.0 } else { value };
    format!("{value:+.1}")
}

/// Color a luck value by direction
#[must_use]
pub fn colored_luck(value: f64) -> ColoredString {
    let text = signed(value);
    if value >= 5.0 {
        text.green()
    } else if value <= -5.0 {
        text.red()
    } else {
        text.normal()
    }
}

/// Color a skill value by band
#[must_use]
pub fn colored_skill(value: f64) -> ColoredString {
    let text = format!("{value:.1}");
    if value >= 75.0 {
        text.green()
    } else if value >= 40.0 {
        text.yellow()
    } else {
        text.red()
    }
}
