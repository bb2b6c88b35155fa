//! Game error type
//!
//! Every failure the core reports falls into one of two kinds: bad input
//! from the caller, or an operation attempted in the wrong session state.

/// Broad classification of a [`GameError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed code, mismatched lengths, or out-of-range configuration
    InvalidInput,
    /// Operation not permitted in the current session state
    State,
}

/// Errors surfaced by scoring, sessions and secret generation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("guess length ({guess}) must match secret length ({secret})")]
    LengthMismatch { secret: usize, guess: usize },
    #[error("invalid symbol {0:?}: codes may only contain the digits 0-9")]
    InvalidSymbol(char),
    #[error("code must contain at least one digit")]
    EmptyCode,
    #[error("secret length must be between 1 and {max}, got {requested}")]
    SecretLength { requested: usize, max: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("secret is not set; set a secret before playing")]
    SecretNotSet,
    #[error("game is already solved; reset or set a new secret")]
    AlreadySolved,
}

impl GameError {
    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthMismatch { .. }
            | Self::InvalidSymbol(_)
            | Self::EmptyCode
            | Self::SecretLength { .. }
            | Self::InvalidConfig(_) => ErrorKind::InvalidInput,
            Self::SecretNotSet | Self::AlreadySolved => ErrorKind::State,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_names_both_lengths() {
        let err = GameError::LengthMismatch {
            secret: 4,
            guess: 3,
        };
        assert_eq!(
            err.to_string(),
            "guess length (3) must match secret length (4)"
        );
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn state_errors_are_classified() {
        assert_eq!(GameError::SecretNotSet.kind(), ErrorKind::State);
        assert_eq!(GameError::AlreadySolved.kind(), ErrorKind::State);
        assert_eq!(GameError::InvalidSymbol('x').kind(), ErrorKind::InvalidInput);
    }
}
