//! Hungman - CLI
//!
//! Guess the word behind a randomly redacted reveal.

use anyhow::{Context, Result};
use clap::Parser;
use hungman::{
    game::run_session,
    random::SeededRandom,
    wordlists::{DEFAULT_WORDS_PATH, load_from_file},
};
use std::io;
use std::path::PathBuf;
use tracing::{Level, info};

#[derive(Parser)]
#[command(
    name = "hungman",
    about = "Guess the word from a randomly redacted reveal",
    version,
    author
)]
struct Cli {
    /// Word list, one answer per line
    #[arg(short = 'w', long, default_value = DEFAULT_WORDS_PATH)]
    words: PathBuf,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Route logs to stderr so stdout carries only the game
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let words = load_from_file(&cli.words)
        .with_context(|| format!("Failed to open \"{}\"", cli.words.display()))?;

    let mut rng = SeededRandom::from_clock();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    let summary = run_session(&words, &mut rng, &mut input, &mut output)?;
    info!(rounds = summary.rounds_played, "session finished");
    Ok(())
}
