//! Bulls and Cows
//!
//! The classic number-guessing game: a secret of digits, guesses scored in
//! bulls (right digit, right place) and cows (right digit, wrong place).
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_and_cows::core::Hint;
//! use bulls_and_cows::game::{SecretGenerator, Session};
//!
//! // Draw a reproducible secret and start a session
//! let mut generator = SecretGenerator::from_seed(42);
//! let secret = generator.generate(4).unwrap();
//! let mut session = Session::with_secret(secret.clone());
//!
//! // Guessing the secret itself solves the game
//! let outcome = session.play_round(secret).unwrap();
//! assert_eq!(outcome.hint, Hint::solved(4));
//! assert!(outcome.solved);
//! ```

// Core domain types
pub mod core;

// Session state machine and secret generation
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
