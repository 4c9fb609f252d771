//! TUI rendering with ratatui
//!
//! Board, candidate panel and score gauges for the interactive game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Mark;
use crate::engine::MAX_LUCK;
use crate::session::TurnRecord;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed by name when at most this many remain
const LIST_CANDIDATES: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE - Skill & Luck")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Correct => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn luck_color(luck: f64) -> Color {
    if luck >= 5.0 {
        Color::Green
    } else if luck <= -5.0 {
        Color::Red
    } else {
        Color::White
    }
}

fn record_line(record: &TurnRecord) -> Line<'static> {
    let mut spans: Vec<Span> = record
        .guess
        .text()
        .to_uppercase()
        .chars()
        .zip(record.feedback.marks())
        .map(|(letter, mark)| Span::styled(format!(" {letter} "), tile_style(mark)))
        .collect();

    spans.push(Span::raw(format!("  skill {:5.1}  ", record.skill)));
    spans.push(Span::styled(
        format!("luck {:+6.1}", record.luck),
        Style::default().fg(luck_color(record.luck)),
    ));
    spans.push(Span::styled(
        format!("  -{} → {}", record.eliminated, record.remaining),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let word_len = app.vocabulary.word_len();
    let history = app.session.history();

    let mut lines: Vec<Line> = history.iter().map(record_line).collect();

    if !app.session.status().is_over() && history.len() < app.max_turns() {
        // Row being typed
        let typed: Vec<Span> = (0..word_len)
            .map(|i| {
                let letter = app
                    .input_buffer
                    .chars()
                    .nth(i)
                    .map_or('_', |c| c.to_ascii_uppercase());
                Span::styled(
                    format!(" {letter} "),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        lines.push(Line::from(typed));
    }

    while lines.len() < app.max_turns() {
        lines.push(Line::from(Span::styled(
            " · ".repeat(word_len),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Board ({}/{}) ", history.len(), app.max_turns()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Candidates
            Constraint::Length(3),      // Skill gauge
            Constraint::Length(3),      // Luck gauge
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_skill(f, app, chunks[1]);
    render_luck(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();
    let total = app.vocabulary.len();
    let pct = candidates.len() as f64 / total as f64 * 100.0;

    let mut content = vec![
        Line::from(format!("{} of {total} words remain ({pct:.2}%)", candidates.len())),
        Line::from(format!(
            "Information needed: {:.2} bits",
            (candidates.len().max(1) as f64).log2()
        )),
    ];

    if app.session.status().is_over() {
        content.push(Line::from(vec![
            Span::raw("Answer: "),
            Span::styled(
                app.session.target().text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    } else if candidates.len() <= LIST_CANDIDATES {
        let names: Vec<String> = candidates
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect();
        content.push(Line::from(names.join(" ")));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_skill(f: &mut Frame, app: &App, area: Rect) {
    let skill = app.sheet.cumulative_skill();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Skill ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((skill / 100.0).clamp(0.0, 1.0))
        .label(format!(
            "{skill:.1} avg | {:.1} bits expected",
            app.sheet.total_entropy()
        ));

    f.render_widget(gauge, area);
}

fn render_luck(f: &mut Frame, app: &App, area: Rect) {
    let luck = app.sheet.cumulative_luck();

    // Neutral luck sits in the middle of the bar
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Luck ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(luck_color(luck)))
        .ratio(((luck + MAX_LUCK) / (2.0 * MAX_LUCK)).clamp(0.0, 1.0))
        .label(format!("{luck:+.1} avg"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Guess => (
            format!(
                " Enter your guess ({} letters) | Enter to submit ",
                app.vocabulary.word_len()
            ),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let turns_text = format!("Turns left: {}", app.session.turns_left());
    let turns = Paragraph::new(turns_text).alignment(Alignment::Center);
    f.render_widget(turns, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n/Ctrl-N: New Game",
        InputMode::Guess => "Esc: Quit | Enter: Submit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
