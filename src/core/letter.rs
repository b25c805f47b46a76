//! Single guessed letter
//!
//! A Letter is one lowercase ASCII letter `a`-`z`, stored as a byte.

use super::GuessError;
use std::fmt;

/// A validated lowercase letter `a`-`z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Parse raw player input into a letter
    ///
    /// The input is lowercased first, so `"A"` is accepted as `a`.
    ///
    /// # Errors
    /// Returns `GuessError::Missing` for empty input and
    /// `GuessError::InvalidLetter` for anything that is not exactly one
    /// letter `a`-`z` after lowercasing (digits, symbols, whitespace,
    /// several characters, non-ASCII letters).
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::parse("Q").unwrap().as_char(), 'q');
    /// assert!(Letter::parse("ab").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        if input.is_empty() {
            return Err(GuessError::Missing);
        }

        let lowered = input.to_lowercase();
        let mut chars = lowered.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(GuessError::InvalidLetter(input.to_string())),
        }
    }

    /// Get the letter as a char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Get the letter as its ASCII byte
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = GuessError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Ok(Self(lower as u8))
        } else {
            Err(GuessError::InvalidLetter(c.to_string()))
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
