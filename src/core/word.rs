//! Secret word representation
//!
//! A SecretWord stores the hidden word of a round along with the set of
//! distinct letters it contains, used for win and wrong-guess checks.

use super::{InvalidWordError, Letter};
use rustc_hash::FxHashSet;
use std::fmt;

/// The hidden word of a round
///
/// Always non-empty and made of lowercase letters `a`-`z` only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    distinct: FxHashSet<Letter>,
}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `InvalidWordError` if:
    /// - The text is empty
    /// - It contains anything other than letters `a`-`z`
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Book").unwrap();
    /// assert_eq!(word.text(), "book");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("b00k").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, InvalidWordError> {
        let raw: String = text.into();
        let text = raw.to_lowercase();

        if text.is_empty() {
            return Err(InvalidWordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(InvalidWordError::InvalidCharacters(raw));
        }

        let distinct = text.chars().filter_map(|c| Letter::try_from(c).ok()).collect();

        Ok(Self { text, distinct })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the word has no letters (never true once constructed)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.distinct.contains(&letter)
    }

    /// Iterate over the word's letters in order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text
            .chars()
            .filter_map(|c| Letter::try_from(c).ok())
    }

    /// Check whether every distinct letter of the word is in `guessed`
    #[must_use]
    pub fn is_revealed_by(&self, guessed: &FxHashSet<Letter>) -> bool {
        self.distinct.is_subset(guessed)
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
