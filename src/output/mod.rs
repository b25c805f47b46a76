//! Terminal output formatting
//!
//! Display utilities for the game board and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_guess_error, print_round, print_round_over};
pub use formatters::{FigurePart, gallows_lines};
