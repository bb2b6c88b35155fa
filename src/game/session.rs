//! Game session state machine
//!
//! A session owns one secret and the ordered record of guesses made against
//! it. It moves `Uninitialized -> Ready -> ... -> Solved`; setting a new
//! secret returns it to `Ready` with an empty history.

use crate::core::{Code, GameError, Hint, score};
use log::{debug, trace};

/// Lifecycle state of a [`Session`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No secret has been set
    Uninitialized,
    /// Accepting guesses
    Ready,
    /// The secret was guessed; no further rounds are accepted
    Solved,
}

/// One played guess and the hint it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Code,
    pub hint: Hint,
}

/// Result of playing a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub hint: Hint,
    pub solved: bool,
}

/// A single Bulls and Cows game
///
/// # Examples
/// ```
/// use bulls_and_cows::core::{Code, Hint};
/// use bulls_and_cows::game::{GameState, Session};
///
/// let mut session = Session::new();
/// session.set_secret(Code::new("1234").unwrap());
///
/// let outcome = session.play_round(Code::new("1357").unwrap()).unwrap();
/// assert_eq!(outcome.hint, Hint::new(1, 1));
/// assert!(!outcome.solved);
///
/// let outcome = session.play_round(Code::new("1234").unwrap()).unwrap();
/// assert!(outcome.solved);
/// assert_eq!(session.state(), GameState::Solved);
/// assert_eq!(session.history().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    secret: Option<Code>,
    history: Vec<Round>,
    state: GameState,
}

impl Session {
    /// Create a session with no secret
    #[must_use]
    pub const fn new() -> Self {
        Self {
            secret: None,
            history: Vec::new(),
            state: GameState::Uninitialized,
        }
    }

    /// Create a session ready to play against `secret`
    #[must_use]
    pub fn with_secret(secret: Code) -> Self {
        let mut session = Self::new();
        session.set_secret(secret);
        session
    }

    /// Replace the secret and clear the history
    ///
    /// Valid in any state; the session becomes `Ready`.
    pub fn set_secret(&mut self, secret: Code) {
        debug!("secret set ({} digits), history cleared", secret.len());
        trace!("secret is {secret}");
        self.secret = Some(secret);
        self.history.clear();
        self.state = GameState::Ready;
    }

    /// Score `guess` against the secret and record the round
    ///
    /// A failed call leaves the session unchanged.
    ///
    /// # Errors
    ///
    /// - `GameError::SecretNotSet` if no secret has been set
    /// - `GameError::AlreadySolved` if the secret was already guessed
    /// - `GameError::LengthMismatch` if the guess length differs from the secret
    pub fn play_round(&mut self, guess: Code) -> Result<RoundOutcome, GameError> {
        let secret = match self.state {
            GameState::Uninitialized => return Err(GameError::SecretNotSet),
            GameState::Solved => return Err(GameError::AlreadySolved),
            GameState::Ready => self.secret.as_ref().ok_or(GameError::SecretNotSet)?,
        };

        let hint = score(secret, &guess)?;
        let solved = hint.is_solved(secret.len());

        self.history.push(Round { guess, hint });
        if solved {
            self.state = GameState::Solved;
        }

        debug!(
            "round {}: {hint}{}",
            self.history.len(),
            if solved { " (solved)" } else { "" }
        );

        Ok(RoundOutcome { hint, solved })
    }

    /// Rounds played so far, in play order
    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Clear the history while keeping the secret
    pub fn reset(&mut self) {
        debug!("history cleared after {} rounds", self.history.len());
        self.history.clear();
        self.state = if self.secret.is_some() {
            GameState::Ready
        } else {
            GameState::Uninitialized
        };
    }

    /// The current secret, if one has been set
    #[must_use]
    pub const fn secret(&self) -> Option<&Code> {
        self.secret.as_ref()
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Number of rounds played since the secret was set or the game reset
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == GameState::Solved
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(text: &str) -> Code {
        Code::new(text).unwrap()
    }

    #[test]
    fn new_session_is_uninitialized() {
        let session = Session::new();
        assert_eq!(session.state(), GameState::Uninitialized);
        assert!(session.secret().is_none());
        assert!(session.history().is_empty());
    }

    #[test]
    fn play_before_secret_is_state_error() {
        let mut session = Session::new();
        let err = session.play_round(code("1234")).unwrap_err();
        assert_eq!(err, GameError::SecretNotSet);
        assert_eq!(err.kind(), crate::core::ErrorKind::State);
    }

    #[test]
    fn play_records_history_in_order() {
        let mut session = Session::with_secret(code("1234"));

        let guesses = ["5678", "1357", "4321"];
        for guess in guesses {
            session.play_round(code(guess)).unwrap();
        }

        let played: Vec<String> = session
            .history()
            .iter()
            .map(|round| round.guess.to_string())
            .collect();
        assert_eq!(played, guesses);
        assert_eq!(session.history()[1].hint, Hint::new(1, 1));
        assert_eq!(session.attempts(), 3);
        assert_eq!(session.state(), GameState::Ready);
    }

    #[test]
    fn length_mismatch_leaves_history_untouched() {
        let mut session = Session::with_secret(code("1234"));
        session.play_round(code("5678")).unwrap();

        let err = session.play_round(code("123")).unwrap_err();
        assert_eq!(
            err,
            GameError::LengthMismatch {
                secret: 4,
                guess: 3
            }
        );
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.state(), GameState::Ready);
    }

    #[test]
    fn exact_guess_solves() {
        let mut session = Session::with_secret(code("0429"));
        let outcome = session.play_round(code("0429")).unwrap();

        assert_eq!(outcome.hint, Hint::solved(4));
        assert!(outcome.solved);
        assert!(session.is_solved());
    }

    #[test]
    fn solved_session_rejects_further_rounds() {
        let mut session = Session::with_secret(code("12"));
        session.play_round(code("12")).unwrap();

        assert_eq!(
            session.play_round(code("21")),
            Err(GameError::AlreadySolved)
        );
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn reset_keeps_secret_and_clears_history() {
        let mut session = Session::with_secret(code("1234"));
        session.play_round(code("1234")).unwrap();

        session.reset();

        assert!(session.history().is_empty());
        assert_eq!(session.secret(), Some(&code("1234")));
        assert_eq!(session.state(), GameState::Ready);
        assert!(session.play_round(code("4321")).is_ok());
    }

    #[test]
    fn reset_without_secret_stays_uninitialized() {
        let mut session = Session::new();
        session.reset();
        assert_eq!(session.state(), GameState::Uninitialized);
    }

    #[test]
    fn set_secret_clears_history_in_any_state() {
        let mut session = Session::with_secret(code("1234"));
        session.play_round(code("1234")).unwrap();
        assert!(session.is_solved());

        session.set_secret(code("98765"));

        assert_eq!(session.state(), GameState::Ready);
        assert!(session.history().is_empty());
        assert_eq!(
            session.play_round(code("1234")),
            Err(GameError::LengthMismatch {
                secret: 5,
                guess: 4
            })
        );
    }

    #[test]
    fn repeated_digit_secret_plays_normally() {
        let mut session = Session::with_secret(code("1123"));
        let outcome = session.play_round(code("1111")).unwrap();
        assert_eq!(outcome.hint, Hint::new(2, 0));
        assert!(!outcome.solved);

        let outcome = session.play_round(code("0111")).unwrap();
        assert_eq!(outcome.hint, Hint::new(1, 1));
        assert_eq!(session.attempts(), 2);
    }
}
