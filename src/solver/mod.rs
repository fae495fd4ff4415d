//! Hangman solving engine
//!
//! Puzzle state, candidate narrowing, letter statistics and the session that
//! ties them together.

mod candidates;
mod session;
mod state;
mod stats;
pub mod strategy;

pub use candidates::CandidateSet;
pub use session::{Phase, RevealRule, Session, SessionConfig, Transition};
pub use state::PuzzleState;
pub use stats::{LetterStat, LetterStats};
pub use strategy::{FrequencyStrategy, LetterStrategy, RandomStrategy, StrategyType};
