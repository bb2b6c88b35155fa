//! Formatting utilities for terminal output

use crate::commands::Mark;
use crate::core::Hint;

const BULL: char = '●';
const COW: char = '○';
const MISS: char = '·';

/// Render a hint as pegs: one `●` per bull, `○` per cow, `·` for the rest
#[must_use]
pub fn hint_pegs(hint: Hint, length: usize) -> String {
    let misses = length.saturating_sub(hint.matched());

    let mut result = String::with_capacity(length * 3);
    result.extend(std::iter::repeat_n(BULL, hint.bulls));
    result.extend(std::iter::repeat_n(COW, hint.cows));
    result.extend(std::iter::repeat_n(MISS, misses));
    result
}

/// Render per-position marks in guess order
#[must_use]
pub fn marks_to_symbols(marks: &[Mark]) -> String {
    marks
        .iter()
        .map(|mark| match mark {
            Mark::Bull => BULL,
            Mark::Cow => COW,
            Mark::Miss => MISS,
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_pegs_orders_bulls_then_cows() {
        assert_eq!(hint_pegs(Hint::new(1, 2), 4), "●○○·");
        assert_eq!(hint_pegs(Hint::solved(4), 4), "●●●●");
        assert_eq!(hint_pegs(Hint::default(), 3), "···");
    }

    #[test]
    fn marks_render_in_position_order() {
        let marks = [Mark::Miss, Mark::Bull, Mark::Cow];
        assert_eq!(marks_to_symbols(&marks), "·●○");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
