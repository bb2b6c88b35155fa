//! Command implementations

pub mod analyze;
pub mod hint;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_guess, secret_space_size};
pub use hint::{HintResult, Mark, score_guess};
pub use simple::{GameSummary, run_simple};
