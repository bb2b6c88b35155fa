//! Bulls-and-cows hint calculation and representation
//!
//! A hint summarises how close a guess is to the secret:
//! - bulls: digits that match the secret at the same position
//! - cows: digits present in the secret but at a different position
//!
//! Hints are written in the traditional `xAyB` notation, where `A` counts
//! bulls and `B` counts cows (secret 1234, guess 1357 gives `1A1B`).

use super::code::ALPHABET_SIZE;
use super::{Code, GameError};
use std::fmt;

/// Feedback for a single guess
///
/// Ordered by bulls first, then cows, so sorting descending puts the
/// hints closest to a solve first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hint {
    pub bulls: usize,
    pub cows: usize,
}

impl Hint {
    #[inline]
    #[must_use]
    pub const fn new(bulls: usize, cows: usize) -> Self {
        Self { bulls, cows }
    }

    /// The hint produced by guessing a code of `length` exactly
    #[inline]
    #[must_use]
    pub const fn solved(length: usize) -> Self {
        Self::new(length, 0)
    }

    /// Check if this hint means the secret of `length` digits was found
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.bulls == length && self.cows == 0
    }

    /// Number of guessed digits that appear in the secret at all
    #[inline]
    #[must_use]
    pub const fn matched(self) -> usize {
        self.bulls + self.cows
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A{}B", self.bulls, self.cows)
    }
}

/// Score `guess` against `secret`
///
/// Duplicate digits are counted with multiset overlap: a digit can only be
/// a cow as many times as it is left over, unmatched, in both codes.
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the codes differ in length.
///
/// # Examples
/// ```
/// use bulls_and_cows::core::{Code, Hint, score};
///
/// let secret = Code::new("1123").unwrap();
/// let guess = Code::new("1111").unwrap();
///
/// // The first two 1s are bulls; the leftover 2 and 3 have no partner
/// assert_eq!(score(&secret, &guess).unwrap(), Hint::new(2, 0));
///
/// // A leftover 1 on each side pairs up as a cow
/// let guess = Code::new("0111").unwrap();
/// assert_eq!(score(&secret, &guess).unwrap(), Hint::new(1, 1));
/// ```
pub fn score(secret: &Code, guess: &Code) -> Result<Hint, GameError> {
    if secret.len() != guess.len() {
        return Err(GameError::LengthMismatch {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    Ok(score_digits(secret.digits(), guess.digits()))
}

/// Score two digit slices of equal length
///
/// Callers guarantee equal lengths and digit values below 10.
pub(crate) fn score_digits(secret: &[u8], guess: &[u8]) -> Hint {
    debug_assert_eq!(secret.len(), guess.len());

    let mut bulls = 0;
    let mut secret_left = [0usize; ALPHABET_SIZE];
    let mut guess_left = [0usize; ALPHABET_SIZE];

    for (&s, &g) in secret.iter().zip(guess) {
        if s == g {
            bulls += 1;
        } else {
            secret_left[usize::from(s)] += 1;
            guess_left[usize::from(g)] += 1;
        }
    }

    let cows = secret_left
        .iter()
        .zip(&guess_left)
        .map(|(&s, &g)| s.min(g))
        .sum();

    Hint { bulls, cows }
}
