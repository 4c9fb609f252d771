//! TUI application state and logic

use crate::core::Word;
use crate::engine::ScoreSheet;
use crate::error::SessionError;
use crate::session::{GameSession, GameStatus};
use crate::vocabulary::Vocabulary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Where each new game's target comes from
#[derive(Debug, Clone)]
pub enum TargetSource {
    Fixed(Word),
    Random,
}

/// Application state
pub struct App<'a> {
    pub vocabulary: &'a Vocabulary,
    pub session: GameSession<'a>,
    pub sheet: ScoreSheet,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    target_source: TargetSource,
    max_turns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `i` counts games won in `i` guesses
    pub guess_distribution: Vec<usize>,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    /// Returns an error if the fixed target is not in the vocabulary.
    pub fn new(
        vocabulary: &'a Vocabulary,
        target_source: TargetSource,
        max_turns: usize,
    ) -> Result<Self, SessionError> {
        let target = pick_target(vocabulary, &target_source);
        let session = GameSession::new(vocabulary, target, max_turns)?;

        let mut app = Self {
            vocabulary,
            session,
            sheet: ScoreSheet::default(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                guess_distribution: vec![0; max_turns + 1],
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guess,
            target_source,
            max_turns,
        };
        app.add_message(
            &format!(
                "Guess the hidden {}-letter word in {max_turns} tries.",
                vocabulary.word_len()
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Every guess is scored for skill and luck.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.vocabulary.word_len() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&input).map(|_| ()) {
            Ok(()) => {
                match self.session.score_sheet() {
                    Ok(sheet) => self.sheet = sheet,
                    Err(e) => log::error!("could not rescore history: {e}"),
                }
                self.after_guess();
            }
            Err(SessionError::InvalidWord(_) | SessionError::NotInVocabulary(_)) => {
                self.add_message("Invalid word. Please try again.", MessageStyle::Error);
                self.input_buffer = input;
            }
            Err(e) => {
                self.add_message(&format!("Error: {e}"), MessageStyle::Error);
            }
        }
    }

    fn after_guess(&mut self) {
        match self.session.status() {
            GameStatus::Won => {
                let guess_count = self.session.history().len();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(guess_count) {
                    *slot += 1;
                }
                self.input_mode = InputMode::GameOver;

                let celebration = match guess_count {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    _ => "🎉 Congratulations! You've guessed the word! 🎉",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!(
                        "Game Over. You've used all your guesses! The word was {}.",
                        self.session.target().text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            GameStatus::InProgress => {
                if let Some(record) = self.session.history().last() {
                    let text = format!(
                        "{} eliminated {} words, {} remain",
                        record.guess.text().to_uppercase(),
                        record.eliminated,
                        record.remaining
                    );
                    self.add_message(&text, MessageStyle::Info);
                }
            }
        }
    }

    /// Start a new game with a fresh target
    ///
    /// # Errors
    /// Returns an error if the fixed target is not in the vocabulary.
    pub fn new_game(&mut self) -> Result<(), SessionError> {
        let target = pick_target(self.vocabulary, &self.target_source);
        self.session = GameSession::new(self.vocabulary, target, self.max_turns)?;
        self.sheet = ScoreSheet::default();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    ///
    /// `Esc` and `Ctrl-C` quit. Once the game is over, `n` or `Ctrl-N` starts
    /// a new one and `q` quits.
    ///
    /// # Errors
    /// Returns an error if a new game cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), SessionError> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match (self.input_mode, key.code) {
            (_, KeyCode::Esc) => self.should_quit = true,
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (InputMode::GameOver, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::GameOver, KeyCode::Char('n')) => self.new_game()?,
            (InputMode::Guess, KeyCode::Char(c)) if !ctrl => self.push_char(c),
            (InputMode::Guess, KeyCode::Backspace) => {
                self.input_buffer.pop();
            }
            (InputMode::Guess, KeyCode::Enter) => self.submit_guess(),
            _ => {}
        }
        Ok(())
    }

    #[must_use]
    pub fn max_turns(&self) -> usize {
        self.max_turns
    }
}

fn pick_target(vocabulary: &Vocabulary, source: &TargetSource) -> Word {
    match source {
        TargetSource::Fixed(word) => word.clone(),
        TargetSource::Random => vocabulary.choose_random(&mut rand::rng()).clone(),
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup, rendering, or event handling fails.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
