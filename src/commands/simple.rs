//! Simple interactive console mode
//!
//! Line-oriented game without the TUI. Reads commands and guesses from any
//! `BufRead` so the whole loop can be driven by a script.

use crate::core::Code;
use crate::game::{GameConfig, Round, SecretGenerator, Session};
use crate::output::formatters::hint_pegs;
use anyhow::{Result, bail};
use colored::Colorize;
use log::info;
use std::io::{BufRead, Write};

/// How a console game ended
#[derive(Debug)]
pub struct GameSummary {
    pub secret: Code,
    pub solved: bool,
    pub attempts: usize,
    pub history: Vec<Round>,
}

/// Run one console game
///
/// # Errors
///
/// Returns an error on I/O failure, or if input ends before a secret has
/// been chosen.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<R: BufRead, W: Write>(
    config: &GameConfig,
    generator: &mut SecretGenerator,
    input: &mut R,
    out: &mut W,
) -> Result<GameSummary> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Bulls and Cows - Console Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(out, "Rules:")?;
    writeln!(out, "  - Bulls (A): right digit in the right position")?;
    writeln!(out, "  - Cows (B):  right digit in the wrong position")?;
    writeln!(out, "  - Example: secret 1234, guess 1357 gives 1A1B\n")?;

    let secret = choose_secret(config, generator, input, out)?;
    let length = secret.len();
    let mut session = Session::with_secret(secret.clone());
    info!("console game started with a {length}-digit secret");

    writeln!(out, "\nThe secret has {length} digits. Start guessing!")?;
    writeln!(
        out,
        "Type 'quit' to give up, 'history' to review guesses, 'help' for commands"
    )?;
    writeln!(out, "{}", "─".repeat(40))?;

    let mut quit = false;

    while session.attempts() < config.max_attempts {
        let turn = session.attempts() + 1;
        let left = config.max_attempts - session.attempts();

        let Some(line) = prompt(input, out, &format!("Guess {turn} ({left} left)"))? else {
            quit = true;
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                quit = true;
                break;
            }
            "history" | "h" => {
                print_history(out, session.history(), length)?;
                continue;
            }
            "help" => {
                writeln!(out, "Commands:")?;
                writeln!(out, "  quit    - give up and reveal the secret")?;
                writeln!(out, "  history - show previous guesses")?;
                writeln!(out, "  reset   - clear guesses and start over on the same secret")?;
                writeln!(out, "  help    - show this help")?;
                continue;
            }
            "reset" => {
                session.reset();
                writeln!(out, "🔄 History cleared. Same secret, fresh attempts.")?;
                continue;
            }
            _ => {}
        }

        let outcome = match Code::new(&line).and_then(|guess| session.play_round(guess)) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(out, "❌ {e}")?;
                continue;
            }
        };

        writeln!(
            out,
            "Result: {} {}",
            outcome.hint.to_string().bright_yellow().bold(),
            hint_pegs(outcome.hint, length)
        )?;

        if outcome.solved {
            writeln!(
                out,
                "\n{}",
                format!(
                    "🎉 Congratulations! You found {secret} in {} {}!",
                    session.attempts(),
                    if session.attempts() == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            )?;
            break;
        }

        writeln!(out, "Keep going!")?;
        writeln!(out, "{}", "─".repeat(30))?;
    }

    let solved = session.is_solved();

    if quit {
        writeln!(out, "\nGame over. The secret was: {}", secret.to_string().bright_cyan())?;
    } else if !solved {
        writeln!(
            out,
            "\n{}",
            format!("Out of attempts! You used all {}.", config.max_attempts).red()
        )?;
        writeln!(out, "The secret was: {}", secret.to_string().bright_cyan())?;
    }

    writeln!(out, "\n📊 Game statistics:")?;
    writeln!(out, "   Total attempts: {}", session.attempts())?;
    print_history(out, session.history(), length)?;

    Ok(GameSummary {
        secret,
        solved,
        attempts: session.attempts(),
        history: session.history().to_vec(),
    })
}

/// Ask for a generated or manual secret until one is valid
fn choose_secret<R: BufRead, W: Write>(
    config: &GameConfig,
    generator: &mut SecretGenerator,
    input: &mut R,
    out: &mut W,
) -> Result<Code> {
    writeln!(out, "Choose a game mode:")?;
    writeln!(out, "  1. Computer picks a random secret")?;
    writeln!(out, "  2. Enter the secret manually")?;

    loop {
        let Some(mode) = prompt(input, out, "Mode (1 or 2)")? else {
            bail!("input closed before a secret was chosen");
        };

        match mode.as_str() {
            "1" => {
                let Some(text) = prompt(
                    input,
                    out,
                    &format!("Secret length (default {})", config.secret_length),
                )?
                else {
                    bail!("input closed before a secret was chosen");
                };

                let length = if text.is_empty() {
                    config.secret_length
                } else if let Ok(length) = text.parse() {
                    length
                } else {
                    writeln!(out, "❌ '{text}' is not a number")?;
                    continue;
                };

                match generator.generate(length) {
                    Ok(secret) => {
                        writeln!(out, "The computer picked a {length}-digit secret.")?;
                        return Ok(secret);
                    }
                    Err(e) => writeln!(out, "❌ {e}")?,
                }
            }
            "2" => {
                let Some(text) = prompt(input, out, "Secret")? else {
                    bail!("input closed before a secret was chosen");
                };

                match Code::new(&text) {
                    Ok(secret) => {
                        writeln!(out, "Secret set.")?;
                        return Ok(secret);
                    }
                    Err(e) => writeln!(out, "❌ {e}")?,
                }
            }
            _ => writeln!(out, "Invalid choice, enter 1 or 2")?,
        }
    }
}

fn print_history<W: Write>(out: &mut W, history: &[Round], length: usize) -> Result<()> {
    if history.is_empty() {
        writeln!(out, "No guesses yet")?;
        return Ok(());
    }

    writeln!(out, "History:")?;
    for (i, round) in history.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} -> {} {}",
            i + 1,
            round.guess,
            round.hint,
            hint_pegs(round.hint, length)
        )?;
    }
    Ok(())
}

/// Prompt for one trimmed line; `None` once input is exhausted
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(script: &str, config: GameConfig) -> (Result<GameSummary>, String) {
        let mut generator = SecretGenerator::from_seed(7);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run_simple(&config, &mut generator, &mut input, &mut out);
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn manual_secret_solved() {
        let (result, output) = play("2\n1234\n1357\n1234\n", GameConfig::default());
        let summary = result.unwrap();

        assert!(summary.solved);
        assert_eq!(summary.attempts, 2);
        assert_eq!(summary.secret.to_string(), "1234");
        assert!(output.contains("1A1B"));
        assert!(output.contains("4A0B"));
        assert!(output.contains("1. 1357 -> 1A1B"));
    }

    #[test]
    fn invalid_input_reprompts_without_using_attempts() {
        // A rejected secret returns to mode selection
        let script = "3\n2\n12a4\n2\n1234\n12\nabc\n1234\n";
        let (result, output) = play(script, GameConfig::default());
        let summary = result.unwrap();

        assert!(output.contains("Invalid choice"));
        assert!(output.contains("invalid symbol 'a'"));
        assert!(output.contains("guess length (2) must match secret length (4)"));
        assert!(summary.solved);
        assert_eq!(summary.attempts, 1);
    }

    #[test]
    fn running_out_of_attempts_reveals_secret() {
        let (result, output) = play("2\n1234\n5678\n5679\n", GameConfig::new(4, 2));
        let summary = result.unwrap();

        assert!(!summary.solved);
        assert_eq!(summary.attempts, 2);
        assert!(output.contains("Out of attempts"));
        assert!(output.contains("1234"));
    }

    #[test]
    fn random_secret_uses_default_length() {
        let (result, output) = play("1\n\nquit\n", GameConfig::default());
        let summary = result.unwrap();

        let expected = SecretGenerator::from_seed(7).generate(4).unwrap();
        assert_eq!(summary.secret, expected);
        assert!(!summary.solved);
        assert_eq!(summary.attempts, 0);
        assert!(output.contains("Game over"));
    }

    #[test]
    fn random_secret_rejects_bad_lengths() {
        let (result, output) = play("1\n11\n1\nx\n1\n6\nquit\n", GameConfig::default());
        let summary = result.unwrap();

        assert!(output.contains("secret length must be between 1 and 10, got 11"));
        assert!(output.contains("'x' is not a number"));
        assert_eq!(summary.secret.len(), 6);
    }

    #[test]
    fn reset_clears_attempts_and_keeps_secret() {
        let script = "2\n1234\n5678\nreset\nhistory\n1234\n";
        let (result, output) = play(script, GameConfig::default());
        let summary = result.unwrap();

        assert!(output.contains("History cleared"));
        assert!(output.contains("No guesses yet"));
        assert!(summary.solved);
        assert_eq!(summary.attempts, 1);
    }

    #[test]
    fn end_of_input_while_guessing_counts_as_quit() {
        let (result, output) = play("2\n0042\n1111\n", GameConfig::default());
        let summary = result.unwrap();

        assert!(!summary.solved);
        assert_eq!(summary.attempts, 1);
        assert_eq!(summary.history[0].guess.to_string(), "1111");
        assert!(output.contains("The secret was"));
    }

    #[test]
    fn end_of_input_before_secret_is_an_error() {
        let (result, _) = play("2\n", GameConfig::default());
        assert!(result.is_err());
    }
}
