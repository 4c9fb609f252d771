//! Display functions for command results

use super::formatters::{colored_luck, colored_skill, colored_tiles, create_progress_bar};
use crate::commands::{AnalysisResult, ScoreReport};
use crate::engine::MAX_SKILL;
use crate::session::TurnRecord;
use colored::Colorize;

/// One line per guess: tiles, elimination counts and scores
#[must_use]
pub fn format_turn_record(turn: usize, record: &TurnRecord, remaining_pct: f64) -> String {
    format!(
        "{turn}. {} {} | Words eliminated: {} | Words remaining: {} ({remaining_pct:.2}%) | Skill: {} | Luck: {}",
        colored_tiles(&record.guess, record.feedback),
        record.feedback.to_emoji(),
        record.eliminated,
        record.remaining,
        colored_skill(record.skill),
        colored_luck(record.luck),
    )
}

/// Cumulative scores for a finished or ongoing game
#[must_use]
pub fn format_totals(skill: f64, luck: f64, entropy: f64) -> String {
    format!(
        "Skill [{}] {} | Luck {} | Expected information {entropy:.2} bits",
        create_progress_bar(skill, MAX_SKILL, 20).green(),
        colored_skill(skill),
        colored_luck(luck),
    )
}

/// Print the result of scoring a sequence of guesses
pub fn print_score_report(report: &ScoreReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Scoring against: {}",
        report.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, (record, pct)) in report.turns.iter().enumerate() {
        println!("{}", format_turn_record(i + 1, record, *pct));
    }

    println!();
    println!(
        "{}",
        format_totals(
            report.cumulative_skill,
            report.cumulative_luck,
            report.total_entropy
        )
    );

    if report.solved {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", report.turns.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved after {} guesses", report.turns.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against the whole vocabulary ({} words, no prior feedback):",
        result.total_candidates
    );
    println!(
        "   Entropy:     {}",
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!(
        "   Patterns:    {} distinct, largest bucket {}",
        result.distinct_patterns, result.largest_bucket
    );
    println!(
        "   Skill:       [{}] {}",
        create_progress_bar(result.skill, MAX_SKILL, 30).green(),
        colored_skill(result.skill)
    );

    if !result.top_buckets.is_empty() {
        println!("\n📈 {}", "Most likely outcomes:".bright_cyan().bold());
        for (pattern, count) in &result.top_buckets {
            let pct = *count as f64 / result.total_candidates as f64 * 100.0;
            println!("   {} {count:5} ({pct:5.1}%)", pattern.to_emoji());
        }
    }
}
