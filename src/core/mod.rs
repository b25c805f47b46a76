//! Core domain types for Hangman
//!
//! This module holds the round state machine and its value types. Nothing
//! here renders, reads input, or fetches words.

mod error;
mod letter;
mod session;
mod word;

pub use error::{GuessError, InvalidWordError};
pub use letter::Letter;
pub use session::{GameSession, HISTORY_LABEL, MAX_WRONG_GUESSES, PLACEHOLDER, Status};
pub use word::SecretWord;
