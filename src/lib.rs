//! Hangman Solver
//!
//! A Hangman assistant: it keeps the dictionary words that still fit a puzzle
//! and ranks the untried letters by the share of those words containing them.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::Letter;
//! use hangman_solver::solver::{Session, SessionConfig};
//! use hangman_solver::wordlists::loader::words_from_slice;
//!
//! let corpus = words_from_slice(&["apple", "angle", "ample", "zebra"]);
//! let mut session = Session::new(&corpus, SessionConfig::new(5)).unwrap();
//!
//! // The game says 'a' is the first letter
//! session.accept(Letter::new('a').unwrap(), &[1]).unwrap();
//! assert_eq!(session.count(), 3);
//!
//! let best = session.stats().best().unwrap();
//! println!("Guess '{}' next ({:?})", best.letter, best.probability);
//! ```

// Core domain types
pub mod core;

// Puzzle state, candidates and letter statistics
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
