//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::GameSession;
use crate::output::{print_guess_error, print_round, print_round_over};
use crate::wordlists::{Difficulty, WordSource};
use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::info;

/// Run the simple interactive CLI mode
///
/// When `difficulty` is `None` the player is asked before every round.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// word source cannot provide a usable word.
pub fn run_simple(source: &mut dyn WordSource, difficulty: Option<Difficulty>) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        Hangman - Simple Mode         ║");
    println!("╚══════════════════════════════════════╝\n");

    println!("Guess the hidden word one letter at a time.");
    println!("Six wrong guesses and the round is lost.\n");
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    let Some(word) = next_word(source, difficulty)? else {
        return farewell();
    };
    let mut session = GameSession::new(word).context(UNUSABLE_WORD)?;
    print_round(&session);

    loop {
        let Some(input) = get_user_input("Guess a letter")? else {
            return farewell();
        };

        match input.trim().to_lowercase().as_str() {
            "quit" | "exit" => return farewell(),
            "new" => {
                if !restart(&mut session, source, difficulty)? {
                    return farewell();
                }
                continue;
            }
            _ => {}
        }

        match session.guess(Some(input.as_str())) {
            Ok(status) => {
                print_round(&session);
                if status.is_terminal() {
                    print_round_over(&session);
                    info!(?status, word = session.word().text(), "round over");

                    if !play_again()? || !restart(&mut session, source, difficulty)? {
                        return farewell();
                    }
                }
            }
            Err(e) => print_guess_error(&e),
        }
    }
}

const UNUSABLE_WORD: &str = "word source returned an unusable word";

/// Start a fresh round on `session`; false if the player quit instead
fn restart(
    session: &mut GameSession,
    source: &mut dyn WordSource,
    difficulty: Option<Difficulty>,
) -> Result<bool> {
    let Some(word) = next_word(source, difficulty)? else {
        return Ok(false);
    };
    session.start(word).context(UNUSABLE_WORD)?;
    print_round(session);
    Ok(true)
}

/// Pick a word, asking for the difficulty when none was configured
///
/// Returns `None` if the player quit while choosing a difficulty.
fn next_word(
    source: &mut dyn WordSource,
    difficulty: Option<Difficulty>,
) -> Result<Option<String>> {
    let difficulty = match difficulty {
        Some(d) => d,
        None => match ask_difficulty()? {
            Some(d) => d,
            None => return Ok(None),
        },
    };

    let word = source.word(difficulty)?;
    info!(%difficulty, "new round");
    println!("\n🎯 New {difficulty} round started!");
    Ok(Some(word))
}

fn ask_difficulty() -> Result<Option<Difficulty>> {
    loop {
        let Some(input) = get_user_input("Difficulty (easy/medium/hard)")? else {
            return Ok(None);
        };
        if matches!(input.trim(), "quit" | "exit") {
            return Ok(None);
        }
        match input.parse() {
            Ok(difficulty) => return Ok(Some(difficulty)),
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

fn play_again() -> Result<bool> {
    let answer = get_user_input("Play again? (yes/no)")?.unwrap_or_default();
    Ok(matches!(answer.trim().to_lowercase().as_str(), "yes" | "y"))
}

fn farewell() -> Result<()> {
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
///
/// Only the line ending is stripped, so a lone space still reaches the
/// session as a guess.
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}
