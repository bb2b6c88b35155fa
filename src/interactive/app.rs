//! TUI application state and logic

use crate::core::{Code, Hint};
use crate::game::{GameConfig, GameState, SecretGenerator, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub config: GameConfig,
    generator: SecretGenerator,
    pub input_buffer: String,
    pub secret_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guess,
    ManualSecret,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub best_attempts: Option<usize>,
}

impl App {
    /// Start an app with a freshly generated secret
    ///
    /// # Errors
    ///
    /// Returns an error if the configured secret length cannot be generated.
    pub fn new(config: GameConfig, mut generator: SecretGenerator) -> Result<Self> {
        let secret = generator.generate(config.secret_length)?;

        Ok(Self {
            session: Session::with_secret(secret),
            config,
            generator,
            input_buffer: String::new(),
            secret_buffer: String::new(),
            messages: vec![
                Message {
                    text: format!(
                        "Welcome! Guess the {}-digit secret.",
                        config.secret_length
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "A = right digit, right place. B = right digit, wrong place."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guess,
        })
    }

    /// Length of the current secret
    #[must_use]
    pub fn secret_length(&self) -> usize {
        self.session
            .secret()
            .map_or(self.config.secret_length, Code::len)
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.config
            .max_attempts
            .saturating_sub(self.session.attempts())
    }

    /// Best hint seen so far, by bulls then cows
    #[must_use]
    pub fn best_hint(&self) -> Option<Hint> {
        self.session.history().iter().map(|round| round.hint).max()
    }

    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        let guess = match Code::new(&input) {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let text = guess.to_string();
        let outcome = match self.session.play_round(guess) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let attempts = self.session.attempts();

        if outcome.solved {
            self.stats.total_games += 1;
            self.stats.games_won += 1;
            self.stats.best_attempts = Some(
                self.stats
                    .best_attempts
                    .map_or(attempts, |best| best.min(attempts)),
            );
            self.input_mode = InputMode::GameOver;

            let celebration = match attempts {
                1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                2..=4 => "🔥 MAGNIFICENT! Sharp deduction! 🔥",
                5..=7 => "✨ SPLENDID! Solved! ✨",
                _ => "😅 PHEW! Got it just in time! 😅",
            };
            self.add_message(
                &format!("{text} → {} in {attempts}. {celebration}", outcome.hint),
                MessageStyle::Success,
            );
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else if self.attempts_left() == 0 {
            self.stats.total_games += 1;
            self.input_mode = InputMode::GameOver;

            let secret = self
                .session
                .secret()
                .map(ToString::to_string)
                .unwrap_or_default();
            self.add_message(
                &format!("Out of attempts! The secret was {secret}."),
                MessageStyle::Error,
            );
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        } else {
            self.add_message(
                &format!("{text} → {}", outcome.hint),
                MessageStyle::Info,
            );
        }
    }

    pub fn new_game(&mut self) {
        match self.generator.generate(self.config.secret_length) {
            Ok(secret) => self.start_game(secret),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn start_game(&mut self, secret: Code) {
        // A game abandoned after at least one guess counts as lost
        if !self.is_over() && self.session.attempts() > 0 {
            self.stats.total_games += 1;
            debug!("abandoned game after {} attempts", self.session.attempts());
        }

        let length = secret.len();
        self.session.set_secret(secret);
        self.input_buffer.clear();
        self.secret_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        debug!("tui game started");
        self.add_message(
            &format!("New game started! Guess the {length}-digit secret."),
            MessageStyle::Info,
        );
    }

    pub fn reset_round(&mut self) {
        if self.session.history().is_empty() {
            self.add_message("Nothing to reset!", MessageStyle::Error);
            return;
        }
        self.session.reset();
        self.input_buffer.clear();
        self.add_message(
            "History cleared. Same secret, fresh attempts.",
            MessageStyle::Info,
        );
    }

    pub fn confirm_manual_secret(&mut self) {
        match Code::new(&self.secret_buffer) {
            Ok(secret) => self.start_game(secret),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
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
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {
                    // Game finished, ignore other keys
                }
            },
            InputMode::Guess => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('r') => self.reset_round(),
                KeyCode::Char('m') => {
                    self.input_mode = InputMode::ManualSecret;
                    self.secret_buffer.clear();
                    self.add_message(
                        "Enter a secret (digits only), Enter to confirm",
                        MessageStyle::Info,
                    );
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.input_buffer.len() < self.secret_length() {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::ManualSecret => match code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc => {
                    self.input_mode = InputMode::Guess;
                    self.secret_buffer.clear();
                    self.add_message("Cancelled manual secret entry", MessageStyle::Info);
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    self.secret_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.secret_buffer.pop();
                }
                KeyCode::Enter => self.confirm_manual_secret(),
                _ => {}
            },
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.input_mode == InputMode::GameOver || self.session.state() == GameState::Solved
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
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

            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
