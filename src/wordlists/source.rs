//! Word providers
//!
//! Defines the WordSource trait and concrete implementations.

use super::Difficulty;
use super::loader::{load_from_file, words_from_slice};
use crate::core::SecretWord;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from obtaining a word
#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("Failed to read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No {0} words available")]
    EmptyTier(Difficulty),
}

/// Something that hands out one word per round
pub trait WordSource {
    /// Pick a word for the given tier
    ///
    /// The returned word is lowercase and made of letters `a`-`z`.
    ///
    /// # Errors
    /// Returns `WordSourceError::EmptyTier` if there is nothing to pick from.
    fn word(&mut self, difficulty: Difficulty) -> Result<String, WordSourceError>;
}

fn build_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Random words from the lists compiled into the binary
pub struct EmbeddedWordSource {
    rng: StdRng,
}

impl EmbeddedWordSource {
    /// Create a source; a seed makes the word sequence reproducible
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: build_rng(seed),
        }
    }
}

impl Default for EmbeddedWordSource {
    fn default() -> Self {
        Self::new(None)
    }
}

impl WordSource for EmbeddedWordSource {
    fn word(&mut self, difficulty: Difficulty) -> Result<String, WordSourceError> {
        difficulty
            .embedded_words()
            .choose(&mut self.rng)
            .map(|&word| word.to_string())
            .ok_or(WordSourceError::EmptyTier(difficulty))
    }
}

/// Random words from a custom list, bucketed into tiers by length
pub struct FileWordSource {
    tiers: FxHashMap<Difficulty, Vec<SecretWord>>,
    rng: StdRng,
}

impl FileWordSource {
    /// Load a newline separated word list from `path`
    ///
    /// # Errors
    /// Returns `WordSourceError::Io` if the file cannot be read.
    pub fn from_path<P: AsRef<Path>>(path: P, seed: Option<u64>) -> Result<Self, WordSourceError> {
        let path = path.as_ref();
        let words = load_from_file(path).map_err(|source| WordSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), count = words.len(), "loaded word list");
        Ok(Self::from_words(words, seed))
    }

    /// Build a source from already validated words
    #[must_use]
    pub fn from_words(words: Vec<SecretWord>, seed: Option<u64>) -> Self {
        let mut tiers: FxHashMap<Difficulty, Vec<SecretWord>> = FxHashMap::default();
        for word in words {
            tiers
                .entry(Difficulty::for_length(word.len()))
                .or_default()
                .push(word);
        }

        for difficulty in Difficulty::ALL {
            debug!(
                %difficulty,
                count = tiers.get(&difficulty).map_or(0, Vec::len),
                "tier size"
            );
        }

        Self {
            tiers,
            rng: build_rng(seed),
        }
    }

    /// Build a source from raw strings, skipping invalid entries
    #[must_use]
    pub fn from_slice(slice: &[&str], seed: Option<u64>) -> Self {
        Self::from_words(words_from_slice(slice), seed)
    }

    /// Number of words available for a tier
    #[must_use]
    pub fn tier_len(&self, difficulty: Difficulty) -> usize {
        self.tiers.get(&difficulty).map_or(0, Vec::len)
    }
}

impl WordSource for FileWordSource {
    fn word(&mut self, difficulty: Difficulty) -> Result<String, WordSourceError> {
        self.tiers
            .get(&difficulty)
            .and_then(|words| words.choose(&mut self.rng))
            .map(|word| word.text().to_string())
            .ok_or(WordSourceError::EmptyTier(difficulty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_source_returns_tier_words() {
        let mut source = EmbeddedWordSource::new(Some(7));
        for difficulty in Difficulty::ALL {
            let word = source.word(difficulty).unwrap();
            assert!(difficulty.embedded_words().contains(&word.as_str()));
        }
    }

    #[test]
    fn embedded_source_seed_is_deterministic() {
        let mut a = EmbeddedWordSource::new(Some(42));
        let mut b = EmbeddedWordSource::new(Some(42));
        for _ in 0..10 {
            assert_eq!(
                a.word(Difficulty::Medium).unwrap(),
                b.word(Difficulty::Medium).unwrap()
            );
        }
    }

    #[test]
    fn file_source_buckets_by_length() {
        let source = FileWordSource::from_slice(
            &["cat", "book", "rocket", "lantern", "microscope", "bad word"],
            None,
        );
        assert_eq!(source.tier_len(Difficulty::Easy), 2);
        assert_eq!(source.tier_len(Difficulty::Medium), 2);
        assert_eq!(source.tier_len(Difficulty::Hard), 1);
    }

    #[test]
    fn file_source_picks_from_requested_tier() {
        let mut source = FileWordSource::from_slice(&["cat", "microscope"], Some(1));
        assert_eq!(source.word(Difficulty::Easy).unwrap(), "cat");
        assert_eq!(source.word(Difficulty::Hard).unwrap(), "microscope");
    }

    #[test]
    fn file_source_empty_tier() {
        let mut source = FileWordSource::from_slice(&["cat"], None);
        assert!(matches!(
            source.word(Difficulty::Medium),
            Err(WordSourceError::EmptyTier(Difficulty::Medium))
        ));
    }

    #[test]
    fn file_source_missing_file() {
        let result = FileWordSource::from_path("no/such/list.txt", None);
        assert!(matches!(result, Err(WordSourceError::Io { .. })));
    }
}
