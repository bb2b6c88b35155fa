//! Core domain types for Bulls and Cows

pub mod code;
mod error;
pub mod hint;

pub use code::{ALPHABET_SIZE, Code};
pub use error::{ErrorKind, GameError};
pub use hint::{Hint, score};
