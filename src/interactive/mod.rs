//! Interactive TUI game

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, TargetSource, run_tui};
