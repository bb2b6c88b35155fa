//! Bulls and Cows - CLI
//!
//! Number-guessing game with TUI and console modes, plus scoring and
//! analysis helpers.

use anyhow::Result;
use bulls_and_cows::{
    commands::{analyze_guess, run_simple, score_guess},
    game::GameConfig,
    interactive::{App, run_tui},
    output::{print_analysis_result, print_hint_result},
};
use clap::{Parser, Subcommand};
use log::info;
use std::io;

#[derive(Parser)]
#[command(
    name = "bulls_and_cows",
    about = "Bulls and Cows number-guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of digits in generated secrets (1-10)
    #[arg(short, long, global = true, default_value_t = 4)]
    length: usize,

    /// Guesses allowed per game
    #[arg(short = 'a', long, global = true, default_value_t = 10)]
    max_attempts: usize,

    /// Seed for reproducible secrets
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple console mode (line-by-line, no TUI)
    Simple,

    /// Score a single guess against a secret
    Hint {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Show how a guess splits all possible secrets by hint
    Analyze {
        /// Guess to analyze
        guess: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::new(cli.length, cli.max_attempts);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple_command(config),
        Commands::Hint { secret, guess } => run_hint_command(&secret, &guess),
        Commands::Analyze { guess } => run_analyze_command(&guess),
    }
}

fn run_play_command(config: GameConfig) -> Result<()> {
    info!(
        "starting tui: length {}, {} attempts",
        config.secret_length, config.max_attempts
    );
    let app = App::new(config, config.secret_generator())?;
    run_tui(app)
}

fn run_simple_command(config: GameConfig) -> Result<()> {
    let mut generator = config.secret_generator();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let summary = run_simple(&config, &mut generator, &mut input, &mut output)?;
    info!(
        "console game finished: solved={} after {} attempts",
        summary.solved, summary.attempts
    );
    Ok(())
}

fn run_hint_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess)?;
    print_hint_result(&result);
    Ok(())
}

fn run_analyze_command(guess: &str) -> Result<()> {
    let result = analyze_guess(guess, true)?;
    print_analysis_result(&result);
    Ok(())
}
