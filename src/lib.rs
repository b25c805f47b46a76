//! Hangman
//!
//! A word-guessing game built around a small round state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameSession, Status};
//!
//! let mut session = GameSession::new("cat").unwrap();
//! session.guess(Some("c")).unwrap();
//! session.guess(Some("a")).unwrap();
//! let status = session.guess(Some("t")).unwrap();
//!
//! assert_eq!(status, Status::Won);
//! assert_eq!(session.masked_word(), "c a t");
//! ```

// Core domain types
pub mod core;

// Word providers
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
