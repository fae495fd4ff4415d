//! Word lists for Hangman solving
//!
//! Provides an embedded dictionary compiled into the binary and helpers for
//! loading one from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
