//! Game configuration

use super::SecretGenerator;
use crate::core::{ALPHABET_SIZE, GameError};

/// Settings for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Digits in a generated secret
    pub secret_length: usize,
    /// Guesses allowed before the secret is revealed
    pub max_attempts: usize,
    /// Fixed seed for reproducible secrets
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(secret_length: usize, max_attempts: usize) -> Self {
        Self {
            secret_length,
            max_attempts,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration is playable
    ///
    /// # Errors
    ///
    /// Returns an error if the secret length is outside 1-10 or no attempts
    /// are allowed.
    pub const fn validate(&self) -> Result<(), GameError> {
        if self.secret_length == 0 || self.secret_length > ALPHABET_SIZE {
            return Err(GameError::SecretLength {
                requested: self.secret_length,
                max: ALPHABET_SIZE,
            });
        }
        if self.max_attempts == 0 {
            return Err(GameError::InvalidConfig("max attempts must be at least 1"));
        }
        Ok(())
    }

    /// Build the secret generator this configuration asks for
    #[must_use]
    pub fn secret_generator(&self) -> SecretGenerator {
        self.seed
            .map_or_else(SecretGenerator::from_os_rng, SecretGenerator::from_seed)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(4, 10)
    }
}
