//! Hangman round state machine
//!
//! A `GameSession` owns the secret word and the guessed letters of the
//! current round. Status and wrong-guess count are derived from those two
//! on every query, so they can never disagree with the guess history.
//!
//! ```text
//!            start
//!   (any) ──────────▶ InProgress ──guess(completes word)──▶ Won
//!                       │    ▲
//!                       │    └── guess(correct, incomplete / wrong < 6th)
//!                       └────guess(6th wrong)──────────────▶ Lost
//! ```

use super::{GuessError, InvalidWordError, Letter, SecretWord};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::{debug, instrument};

/// Wrong guesses allowed before the round is lost
pub const MAX_WRONG_GUESSES: usize = 6;

/// Marker shown for an unguessed letter in the masked word
pub const PLACEHOLDER: char = '_';

/// Label prefixed to the guess history text
pub const HISTORY_LABEL: &str = "Guesses: ";

/// Lifecycle status of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// Whether the round is over (`Won` or `Lost`)
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "In progress"),
            Self::Won => write!(f, "Won"),
            Self::Lost => write!(f, "Lost"),
        }
    }
}

/// One hangman round
#[derive(Debug, Clone)]
pub struct GameSession {
    word: SecretWord,
    guesses: Vec<Letter>,
    guessed: FxHashSet<Letter>,
}

impl GameSession {
    /// Create a session with its first round already started
    ///
    /// # Errors
    /// Returns `InvalidWordError` if the word is empty or contains
    /// anything other than letters `a`-`z`.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameSession, Status};
    ///
    /// let mut session = GameSession::new("book").unwrap();
    /// session.guess(Some("o")).unwrap();
    /// assert_eq!(session.masked_word(), "_ o o _");
    /// assert_eq!(session.status(), Status::InProgress);
    /// ```
    pub fn new(word: impl Into<String>) -> Result<Self, InvalidWordError> {
        let word = SecretWord::new(word)?;
        debug!(length = word.len(), "session created");

        Ok(Self {
            word,
            guesses: Vec::new(),
            guessed: FxHashSet::default(),
        })
    }

    /// Start a new round with `word`, discarding the previous round
    ///
    /// # Errors
    /// Returns `InvalidWordError` if the word is empty or contains
    /// anything other than letters `a`-`z`. The current round is left
    /// untouched in that case.
    #[instrument(skip_all)]
    pub fn start(&mut self, word: impl Into<String>) -> Result<(), InvalidWordError> {
        let word = SecretWord::new(word)?;
        debug!(length = word.len(), "round started");

        self.word = word;
        self.guesses.clear();
        self.guessed.clear();
        Ok(())
    }

    /// Submit a guess and return the updated status
    ///
    /// `None` stands for a guess that was never supplied.
    ///
    /// # Errors
    /// Checked in this order, each leaving the session unchanged:
    /// - `GuessError::Missing` if no guess was supplied
    /// - `GuessError::InvalidLetter` if the input is not one letter `a`-`z`
    /// - `GuessError::Duplicate` if the letter was already guessed
    /// - `GuessError::RoundAlreadyOver` if the round is won or lost
    #[instrument(skip(self), fields(stage = self.wrong_guess_stage()))]
    pub fn guess(&mut self, input: Option<&str>) -> Result<Status, GuessError> {
        let input = input.ok_or(GuessError::Missing)?;
        let letter = Letter::parse(input)?;

        if self.guessed.contains(&letter) {
            return Err(GuessError::Duplicate(letter.as_char()));
        }

        if self.status().is_terminal() {
            return Err(GuessError::RoundAlreadyOver);
        }

        self.guesses.push(letter);
        self.guessed.insert(letter);

        let status = self.status();
        debug!(
            %letter,
            hit = self.word.has_letter(letter),
            ?status,
            "guess applied"
        );
        Ok(status)
    }

    /// Current lifecycle status
    #[must_use]
    pub fn status(&self) -> Status {
        if self.word.is_revealed_by(&self.guessed) {
            Status::Won
        } else if self.wrong_guess_stage() >= MAX_WRONG_GUESSES {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    /// Number of guessed letters not in the word (0-6)
    #[must_use]
    pub fn wrong_guess_stage(&self) -> usize {
        self.guesses
            .iter()
            .filter(|&&letter| !self.word.has_letter(letter))
            .count()
    }

    /// Wrong guesses left before the round is lost
    #[must_use]
    pub fn remaining_wrong_guesses(&self) -> usize {
        MAX_WRONG_GUESSES.saturating_sub(self.wrong_guess_stage())
    }

    /// The word with unguessed letters replaced by `_`, space separated
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.word
            .letters()
            .map(|letter| {
                let shown = if self.guessed.contains(&letter) {
                    letter.as_char()
                } else {
                    PLACEHOLDER
                };
                shown.to_string()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Guessed letters in submission order, e.g. `Guesses: a, b, c`
    #[must_use]
    pub fn guess_history_text(&self) -> String {
        let letters = self
            .guesses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{HISTORY_LABEL}{letters}")
    }

    /// Guessed letters in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Letter] {
        &self.guesses
    }

    /// The secret word of the current round
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &SecretWord {
        &self.word
    }
}
