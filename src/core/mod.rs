//! Core domain types for Hangman
//!
//! Letters, words and the revealed frame. Everything here is pure and cheap to
//! copy or clone; the puzzle engine builds on these.

mod error;
mod frame;
mod letter;
mod word;

pub use error::{PuzzleError, PuzzleResult};
pub use frame::{Frame, WILDCARD};
pub use letter::{Letter, LetterSet};
pub use word::{Word, WordError};
