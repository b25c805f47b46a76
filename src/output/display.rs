//! Display functions for the line-based game mode

use super::formatters::{gallows_lines, lives_bar};
use crate::core::{GameSession, GuessError, Status};
use colored::Colorize;

/// Print the board after a round starts or a guess lands
pub fn print_round(session: &GameSession) {
    println!("\n{}", "─".repeat(40).cyan());
    for line in gallows_lines(session.wrong_guess_stage()) {
        println!("{line}");
    }
    println!();
    println!("  Word:    {}", session.masked_word().bright_white().bold());
    println!("  {}", session.guess_history_text());
    println!(
        "  Lives:   [{}] {} left",
        lives_bar(session.remaining_wrong_guesses()).green(),
        session.remaining_wrong_guesses()
    );
    println!("{}", "─".repeat(40).cyan());
}

/// Print the end-of-round banner
pub fn print_round_over(session: &GameSession) {
    match session.status() {
        Status::Won => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!("{}", "    🎉  Y O U   W I N !  🎉".bright_green().bold());
            println!("{}", "═".repeat(40).bright_cyan());
            println!(
                "\n  Solved {} with {} wrong {}",
                session.word().text().to_uppercase().bright_yellow().bold(),
                session.wrong_guess_stage(),
                if session.wrong_guess_stage() == 1 {
                    "guess"
                } else {
                    "guesses"
                }
            );
        }
        Status::Lost => {
            println!("\n{}", "═".repeat(40).red());
            println!(
                "{}",
                "    You lost! Better luck next time.".bright_red().bold()
            );
            println!("{}", "═".repeat(40).red());
            println!(
                "\n  The word was {}",
                session.word().text().to_uppercase().bright_yellow().bold()
            );
        }
        Status::InProgress => {}
    }
}

/// Print a rejected guess
pub fn print_guess_error(error: &GuessError) {
    println!("{} {error}", "❌".red());
}
