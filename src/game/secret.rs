//! Random secret generation
//!
//! Secrets are drawn without replacement from the digit alphabet, so a
//! generated secret never repeats a digit.

use crate::core::{ALPHABET_SIZE, Code, GameError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a secret of `length` distinct digits using `rng`
///
/// Every ordered selection of distinct digits is equally likely. The session
/// is not touched; pass the result to `Session::set_secret`.
///
/// # Errors
/// Returns `GameError::SecretLength` unless `1 <= length <= 10`.
///
/// # Examples
/// ```
/// use bulls_and_cows::game::generate_random_secret;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let secret = generate_random_secret(&mut rng, 4).unwrap();
/// assert_eq!(secret.len(), 4);
/// assert!(secret.has_distinct_digits());
/// ```
pub fn generate_random_secret<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> Result<Code, GameError> {
    if length == 0 || length > ALPHABET_SIZE {
        return Err(GameError::SecretLength {
            requested: length,
            max: ALPHABET_SIZE,
        });
    }

    let digits = rand::seq::index::sample(rng, ALPHABET_SIZE, length)
        .iter()
        .map(|d| d as u8)
        .collect();

    Ok(Code::from_digits(digits))
}

/// Seedable source of random secrets
///
/// Production code seeds from the OS; tests use [`SecretGenerator::from_seed`]
/// to get a reproducible sequence of secrets.
pub struct SecretGenerator {
    rng: StdRng,
}

impl SecretGenerator {
    /// Generator seeded from operating system entropy
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic generator for a given seed
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw the next secret
    ///
    /// # Errors
    /// Returns `GameError::SecretLength` unless `1 <= length <= 10`.
    pub fn generate(&mut self, length: usize) -> Result<Code, GameError> {
        generate_random_secret(&mut self.rng, length)
    }
}

impl Default for SecretGenerator {
    fn default() -> Self {
        Self::from_os_rng()
    }
}
