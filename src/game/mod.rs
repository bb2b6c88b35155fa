//! Game session, configuration and secret generation

mod config;
mod secret;
mod session;

pub use config::GameConfig;
pub use secret::{SecretGenerator, generate_random_secret};
pub use session::{GameState, Round, RoundOutcome, Session};
