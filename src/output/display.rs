//! Display functions for command results

use super::formatters::{create_progress_bar, marks_to_symbols};
use crate::commands::{AnalysisResult, HintResult};
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_hint_result(result: &HintResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Secret: {}", result.secret.to_string().bright_white().bold());
    println!("Guess:  {}", result.guess.to_string().bright_white().bold());
    println!("        {}", marks_to_symbols(&result.marks).bright_cyan());
    println!("{}", "─".repeat(40).cyan());

    println!(
        "Hint:   {}  ({} {}, {} {})",
        result.hint.to_string().bright_yellow().bold(),
        result.hint.bulls,
        if result.hint.bulls == 1 { "bull" } else { "bulls" },
        result.hint.cows,
        if result.hint.cows == 1 { "cow" } else { "cows" }
    );

    if result.hint.is_solved(result.secret.len()) {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HINT ANALYSIS:".bright_cyan().bold(),
        result.guess.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let max_entropy = (result.total_secrets as f64).log2();
    let bar = create_progress_bar(result.entropy, max_entropy, 30);

    println!("\n📊 Against {} possible secrets:", result.total_secrets);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} secrets remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} secrets", result.max_partition);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for &(hint, count) in &result.distribution {
        let pct = count as f64 / result.total_secrets as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {hint}: {} {count:7} ({pct:5.1}%)", bar.green());
    }
}
