//! Word sources for Hangman
//!
//! The round state machine only consumes a word string. This module
//! provides where those words come from: embedded per-tier lists compiled
//! into the binary, or a user supplied list file.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};
pub use source::{EmbeddedWordSource, FileWordSource, WordSource, WordSourceError};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty tier of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Error for an unrecognized difficulty name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(String);

impl Difficulty {
    /// All tiers, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Tier a word of `len` letters belongs to when bucketing a custom list
    ///
    /// Up to 5 letters is easy, 6-8 medium, 9 or more hard.
    #[must_use]
    pub const fn for_length(len: usize) -> Self {
        match len {
            0..=5 => Self::Easy,
            6..=8 => Self::Medium,
            _ => Self::Hard,
        }
    }

    /// Lowercase name as used on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Embedded word list for this tier
    #[must_use]
    pub const fn embedded_words(self) -> &'static [&'static str] {
        match self {
            Self::Easy => EASY,
            Self::Medium => MEDIUM,
            Self::Hard => HARD,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Ok(Self::Easy),
            "medium" | "m" => Ok(Self::Medium),
            "hard" | "h" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(EASY.len(), EASY_COUNT);
        assert_eq!(MEDIUM.len(), MEDIUM_COUNT);
        assert_eq!(HARD.len(), HARD_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for difficulty in Difficulty::ALL {
            let words = difficulty.embedded_words();
            assert!(!words.is_empty(), "{difficulty} list is empty");
            for &word in words {
                assert!(
                    !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn embedded_words_match_their_tier() {
        for difficulty in Difficulty::ALL {
            for &word in difficulty.embedded_words() {
                assert_eq!(
                    Difficulty::for_length(word.len()),
                    difficulty,
                    "Word '{word}' is in the wrong tier"
                );
            }
        }
    }

    #[test]
    fn difficulty_from_str() {
        assert_eq!("easy".parse(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse(), Ok(Difficulty::Medium));
        assert_eq!(" hard ".parse(), Ok(Difficulty::Hard));
        assert_eq!("h".parse(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_display_round_trips_names() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse(), Ok(difficulty));
        }
    }

    #[test]
    fn difficulty_for_length() {
        assert_eq!(Difficulty::for_length(3), Difficulty::Easy);
        assert_eq!(Difficulty::for_length(5), Difficulty::Easy);
        assert_eq!(Difficulty::for_length(6), Difficulty::Medium);
        assert_eq!(Difficulty::for_length(8), Difficulty::Medium);
        assert_eq!(Difficulty::for_length(9), Difficulty::Hard);
        assert_eq!(Difficulty::for_length(14), Difficulty::Hard);
    }
}
