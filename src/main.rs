//! Wordle Scorer - CLI
//!
//! Play Wordle in a TUI or on the command line with every guess scored for
//! skill and luck, or score and analyze guesses directly.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::io;
use std::path::{Path, PathBuf};
use wordle_scorer::{
    commands::{analyze_word, run_simple, score_guesses},
    config::GameConfig,
    core::Word,
    interactive::{App, TargetSource, run_tui},
    output::{print_analysis_result, print_score_report},
    session::GameSession,
    vocabulary::Vocabulary,
};

#[derive(Parser)]
#[command(
    name = "wordle_scorer",
    about = "Wordle with every guess scored for skill and luck",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON game configuration (target_word, max_turns, word_list)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Target word (default: from config, otherwise random)
    #[arg(short, long, global = true)]
    target: Option<String>,

    /// Number of guesses allowed
    #[arg(long, global = true)]
    max_turns: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score a finished sequence of guesses against the target
    Score {
        /// Guesses in the order they were played
        #[arg(required = true)]
        guesses: Vec<String>,
    },

    /// Analyze a word as an opening guess over the whole vocabulary
    Analyze {
        /// Word to analyze
        word: String,
    },
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

/// Word list precedence: `--words`, then the config's `word_list`, then the
/// embedded list
fn load_vocabulary(cli: &Cli, config: &GameConfig) -> Result<Vocabulary> {
    match cli.words.as_deref().or(config.word_list.as_deref()) {
        Some(path) => Vocabulary::from_file(path)
            .with_context(|| format!("failed to load word list {}", path.display())),
        None => Vocabulary::embedded().context("embedded word list is invalid"),
    }
}

/// Target precedence: `--target`, then the config's `target_word`
fn fixed_target(cli: &Cli, config: &GameConfig) -> Result<Option<Word>> {
    if let Some(text) = &cli.target {
        return Word::new(text.trim())
            .map(Some)
            .with_context(|| format!("invalid target word '{text}'"));
    }
    Ok(config.target()?)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let vocabulary = load_vocabulary(&cli, &config)?;
    let target = fixed_target(&cli, &config)?;
    let max_turns = cli.max_turns.unwrap_or(config.max_turns);

    log::debug!(
        "vocabulary of {} words, max {max_turns} turns, target {}",
        vocabulary.len(),
        if target.is_some() { "fixed" } else { "random" }
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&vocabulary, target, max_turns),
        Commands::Simple => run_simple_command(&vocabulary, target, max_turns),
        Commands::Score { guesses } => {
            run_score_command(&vocabulary, target, max_turns, &guesses)
        }
        Commands::Analyze { word } => run_analyze_command(&word, &vocabulary),
    }
}

fn run_play_command(vocabulary: &Vocabulary, target: Option<Word>, max_turns: usize) -> Result<()> {
    let source = target.map_or(TargetSource::Random, TargetSource::Fixed);
    let app = App::new(vocabulary, source, max_turns)?;
    run_tui(app)
}

fn run_simple_command(
    vocabulary: &Vocabulary,
    target: Option<Word>,
    max_turns: usize,
) -> Result<()> {
    let target = target.unwrap_or_else(|| vocabulary.choose_random(&mut rand::rng()).clone());
    let mut session = GameSession::new(vocabulary, target, max_turns)?;
    run_simple(&mut session, io::stdin().lock(), io::stdout())?;
    Ok(())
}

fn run_score_command(
    vocabulary: &Vocabulary,
    target: Option<Word>,
    max_turns: usize,
    guesses: &[String],
) -> Result<()> {
    let Some(target) = target else {
        bail!("scoring needs a target word: pass --target or set target_word in the config");
    };
    let report = score_guesses(vocabulary, target, max_turns, guesses)?;
    print_score_report(&report);
    Ok(())
}

fn run_analyze_command(word: &str, vocabulary: &Vocabulary) -> Result<()> {
    let result = analyze_word(word, vocabulary)?;
    print_analysis_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_flag_is_trimmed_like_config() {
        let cli = Cli::parse_from(["wordle_scorer", "--target", " CRATE ", "analyze", "crane"]);
        let target = fixed_target(&cli, &GameConfig::default()).unwrap();
        assert_eq!(target, Some(Word::new("crate").unwrap()));

        let config = GameConfig::from_json(r#"{ "target_word": " crate " }"#).unwrap();
        let cli = Cli::parse_from(["wordle_scorer", "analyze", "crane"]);
        assert_eq!(fixed_target(&cli, &config).unwrap(), target);
    }

    #[test]
    fn target_flag_overrides_config() {
        let config = GameConfig::from_json(r#"{ "target_word": "slate" }"#).unwrap();
        let cli = Cli::parse_from(["wordle_scorer", "-t", "crate", "play"]);
        assert_eq!(
            fixed_target(&cli, &config).unwrap(),
            Some(Word::new("crate").unwrap())
        );
    }
}
