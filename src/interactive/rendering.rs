//! TUI rendering with ratatui
//!
//! Layout and widgets for the interactive Bulls and Cows game.

use super::app::{App, InputMode, MessageStyle};
use crate::game::GameState;
use crate::output::formatters::hint_pegs;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐂 BULLS AND COWS - Interactive Mode 🐄")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Game info
            Constraint::Min(3),    // History
        ])
        .split(area);

    render_game_info(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_game_info(f: &mut Frame, app: &App, area: Rect) {
    let length = app.secret_length();

    let state = match (app.session.state(), &app.input_mode) {
        (GameState::Solved, _) => Span::styled(
            "Solved",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        (_, InputMode::GameOver) => Span::styled("Lost", Style::default().fg(Color::Red)),
        (GameState::Ready, _) => Span::styled("Guessing", Style::default().fg(Color::Yellow)),
        (GameState::Uninitialized, _) => Span::raw("No secret"),
    };

    let secret = if app.is_over() {
        app.session
            .secret()
            .map(ToString::to_string)
            .unwrap_or_default()
    } else {
        "?".repeat(length)
    };

    let best = app.best_hint().map_or_else(
        || "none yet".to_string(),
        |hint| format!("{hint} {}", hint_pegs(hint, length)),
    );

    let content = vec![
        Line::from(vec![
            Span::raw("Secret:    "),
            Span::styled(
                secret,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  ({length} digits)")),
        ]),
        Line::from(vec![Span::raw("State:     "), state]),
        Line::from(format!(
            "Attempts:  {} used, {} left",
            app.session.attempts(),
            app.attempts_left()
        )),
        Line::from(format!("Best hint: {best}")),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Current Game ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let length = app.secret_length();
    let visible = usize::from(area.height.saturating_sub(2));
    let history = app.session.history();

    let history_items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .take(visible)
        .map(|(i, round)| {
            let style = if round.hint.is_solved(length) {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:>2}: ", i + 1)),
                Span::styled(round.guess.to_string(), style.add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(round.hint.to_string(), Style::default().fg(Color::Yellow)),
                Span::raw("  "),
                Span::styled(
                    hint_pegs(round.hint, length),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_attempts_gauge(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_attempts_gauge(f: &mut Frame, app: &App, area: Rect) {
    let used = app.session.attempts();
    let max = app.config.max_attempts;
    let pct = if max == 0 {
        100
    } else {
        (used * 100 / max).min(100) as u16
    };

    let color = match app.attempts_left() {
        0 => Color::Red,
        1..=2 => Color::Yellow,
        _ => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(pct)
        .label(format!("{used}/{max} used"));

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
    let masked;
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guess => (
            " Enter Guess (digits) | Enter: submit  m: set secret ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualSecret => {
            masked = "*".repeat(app.secret_buffer.len());
            (
                " Enter Secret (hidden) | Enter: confirm  ESC: cancel ",
                masked.as_str(),
                Color::Cyan,
            )
        }
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guess => "Mode: Guessing",
        InputMode::ManualSecret => "Mode: Set Secret",
        InputMode::GameOver => "Mode: Game Over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

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
    f.render_widget(stats, chunks[1]);

    let best_text = app
        .stats
        .best_attempts
        .map_or_else(|| "Best: -".to_string(), |best| format!("Best: {best} guesses"));
    let best = Paragraph::new(best_text).alignment(Alignment::Center);
    f.render_widget(best, chunks[2]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::ManualSecret => "q: Quit | Enter: Confirm | Esc: Cancel",
        InputMode::Guess => "q: Quit | n: New | r: Reset | m: Secret",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
