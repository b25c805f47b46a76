//! Hangman - CLI
//!
//! Word-guessing game with TUI and simple line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    interactive::{App, run_tui},
    wordlists::{Difficulty, EmbeddedWordSource, FileWordSource, WordSource},
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word before the figure is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy, medium or hard (asked each round when omitted)
    #[arg(short, long, global = true)]
    difficulty: Option<Difficulty>,

    /// Custom word list file, one word per line (bucketed into tiers by length)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for reproducible word choice
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG, default hangman=info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let mut source = build_word_source(cli.wordlist.as_deref(), cli.seed)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(source, cli.difficulty)),
        Commands::Simple => run_simple(source.as_mut(), cli.difficulty),
    }
}

/// Send tracing output to `path`; the terminal belongs to the game
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "hangman=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    info!("Hangman tracing initialized");
    Ok(())
}

/// Pick the word source based on the -w flag
fn build_word_source(wordlist: Option<&Path>, seed: Option<u64>) -> Result<Box<dyn WordSource>> {
    match wordlist {
        Some(path) => Ok(Box::new(FileWordSource::from_path(path, seed)?)),
        None => Ok(Box::new(EmbeddedWordSource::new(seed))),
    }
}
