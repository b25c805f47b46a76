//! Errors raised by a game session
//!
//! All of these are ordinary player or word-source mistakes. They are
//! recoverable, and a failed call never changes the session.

use thiserror::Error;

/// Reasons a guess is rejected
///
/// Variants are listed in the order `GameSession::guess` checks them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("No guess made. Please try again")]
    Missing,

    #[error("'{0}' is not a single letter a-z. Please try again")]
    InvalidLetter(String),

    #[error("Letter '{0}' has already been guessed. Please try again")]
    Duplicate(char),

    #[error("The round is already over. Start a new round to keep playing")]
    RoundAlreadyOver,
}

/// Reasons a word cannot start a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidWordError {
    #[error("Word must not be empty")]
    Empty,

    #[error("Word '{0}' must contain only letters a-z")]
    InvalidCharacters(String),
}
