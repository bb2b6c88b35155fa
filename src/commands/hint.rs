//! Single-guess scoring command
//!
//! Scores one guess against a given secret and explains which positions
//! produced the bulls and cows.

use crate::core::code::ALPHABET_SIZE;
use crate::core::{Code, GameError, Hint, score};

/// What a guessed digit contributed to the hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Right digit, right position
    Bull,
    /// Right digit, wrong position
    Cow,
    /// Digit not (or no longer) available in the secret
    Miss,
}

/// Result of scoring a guess
pub struct HintResult {
    pub secret: Code,
    pub guess: Code,
    pub hint: Hint,
    pub marks: Vec<Mark>,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either code is malformed or their lengths differ.
pub fn score_guess(secret: &str, guess: &str) -> Result<HintResult, GameError> {
    let secret = Code::new(secret)?;
    let guess = Code::new(guess)?;

    let hint = score(&secret, &guess)?;
    let marks = mark_positions(&secret, &guess);
    debug_assert_eq!(
        marks.iter().filter(|&&m| m == Mark::Cow).count(),
        hint.cows
    );

    Ok(HintResult {
        secret,
        guess,
        hint,
        marks,
    })
}

/// Assign a mark to every guessed position
///
/// Bulls are marked first and removed from the pool; cows are then handed
/// out left to right while unmatched copies of the digit remain.
fn mark_positions(secret: &Code, guess: &Code) -> Vec<Mark> {
    let mut marks = vec![Mark::Miss; guess.len()];
    let mut available = [0usize; ALPHABET_SIZE];

    for (i, (&s, &g)) in secret.digits().iter().zip(guess.digits()).enumerate() {
        if s == g {
            marks[i] = Mark::Bull;
        } else {
            available[usize::from(s)] += 1;
        }
    }

    for (mark, &g) in marks.iter_mut().zip(guess.digits()) {
        if *mark == Mark::Miss && available[usize::from(g)] > 0 {
            *mark = Mark::Cow;
            available[usize::from(g)] -= 1;
        }
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_guess_classic_example() {
        let result = score_guess("1234", "1357").unwrap();
        assert_eq!(result.hint, Hint::new(1, 1));
        assert_eq!(
            result.marks,
            vec![Mark::Bull, Mark::Cow, Mark::Miss, Mark::Miss]
        );
    }

    #[test]
    fn marks_with_duplicates_follow_hint() {
        let result = score_guess("1123", "1111").unwrap();
        assert_eq!(result.hint, Hint::new(2, 0));
        assert_eq!(
            result.marks,
            vec![Mark::Bull, Mark::Bull, Mark::Miss, Mark::Miss]
        );

        let result = score_guess("1123", "0111").unwrap();
        assert_eq!(result.hint, Hint::new(1, 1));
        assert_eq!(
            result.marks,
            vec![Mark::Miss, Mark::Bull, Mark::Cow, Mark::Miss]
        );
    }

    #[test]
    fn marks_prefer_bulls_over_earlier_cows() {
        // The 2 at position 3 is a bull, so the 2 at position 0 cannot be a cow
        let result = score_guess("1342", "2562").unwrap();
        assert_eq!(result.hint, Hint::new(1, 0));
        assert_eq!(
            result.marks,
            vec![Mark::Miss, Mark::Miss, Mark::Miss, Mark::Bull]
        );
    }

    #[test]
    fn score_guess_rejects_bad_input() {
        assert_eq!(
            score_guess("12x4", "1234").err(),
            Some(GameError::InvalidSymbol('x'))
        );
        assert_eq!(
            score_guess("1234", "12345").err(),
            Some(GameError::LengthMismatch {
                secret: 4,
                guess: 5
            })
        );
    }
}
