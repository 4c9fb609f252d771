//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Reads guesses from any `BufRead` and
//! writes to any `Write`, so a whole game can be scripted.

use crate::error::SessionError;
use crate::output::{format_totals, format_turn_record};
use crate::session::{GameSession, GameStatus};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run one game in line mode
///
/// Returns the final status; a game abandoned with `quit` or end of input is
/// still `InProgress`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut GameSession<'_>,
    mut input: R,
    mut out: W,
) -> io::Result<GameStatus> {
    writeln!(out, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(out, "{}", "  Wordle - every guess scored for skill and luck".bold())?;
    writeln!(out, "{}\n", "═".repeat(62).bright_cyan())?;
    writeln!(
        out,
        "{} words, {} letters each, {} guesses. Type 'quit' to exit.\n",
        session.vocabulary().len(),
        session.vocabulary().word_len(),
        session.max_turns()
    )?;

    while !session.status().is_over() {
        write!(
            out,
            "Enter your guess ({} letters, {} left): ",
            session.vocabulary().word_len(),
            session.turns_left()
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let guess = line.trim();

        if matches!(guess.to_lowercase().as_str(), "quit" | "q" | "exit") {
            break;
        }

        match session.submit_guess(guess).map(|_| ()) {
            Ok(()) => {
                let turn = session.history().len();
                let record = &session.history()[turn - 1];
                let pct = session.remaining_percentage(record);
                writeln!(out, "{}", format_turn_record(turn, record, pct))?;
            }
            Err(SessionError::InvalidWord(_) | SessionError::NotInVocabulary(_)) => {
                writeln!(out, "{}", "Invalid word. Please try again.".red())?;
            }
            Err(e) => {
                log::error!("guess \"{guess}\" failed: {e}");
                writeln!(out, "{}", format!("Error: {e}").red())?;
            }
        }
    }

    let status = session.status();
    write_summary(session, status, &mut out)?;
    Ok(status)
}

fn write_summary<W: Write>(
    session: &GameSession<'_>,
    status: GameStatus,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n{}", "Previous guesses".bright_cyan().bold())?;
    for (i, record) in session.history().iter().enumerate() {
        let pct = session.remaining_percentage(record);
        writeln!(out, "{}", format_turn_record(i + 1, record, pct))?;
    }

    if let Ok(sheet) = session.score_sheet()
        && !sheet.is_empty()
    {
        writeln!(
            out,
            "\n{}",
            format_totals(
                sheet.cumulative_skill(),
                sheet.cumulative_luck(),
                sheet.total_entropy()
            )
        )?;
    }

    match status {
        GameStatus::Won => writeln!(
            out,
            "\n{}",
            "Congratulations! You've guessed the word!".green().bold()
        )?,
        GameStatus::Lost => writeln!(
            out,
            "\n{} The word was {}.",
            "Game Over. You've used all your guesses!".red().bold(),
            session.target().text().to_uppercase().bright_yellow().bold()
        )?,
        GameStatus::InProgress => writeln!(out, "\n👋 Thanks for playing!")?,
    }

    Ok(())
}
