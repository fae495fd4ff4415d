//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{PuzzleError, PuzzleResult, Word};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors reading a word list from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {0} contains no valid words")]
    Empty(PathBuf),
}

/// Load words from a newline-delimited file
///
/// Lines are trimmed and lowercased; blank lines are ignored and lines that
/// are not a single ASCII word are skipped.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Empty`
/// if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            Word::new(line)
                .inspect_err(|_| skipped += 1)
                .ok()
        })
        .collect();

    if skipped > 0 {
        warn!(path = %path.display(), skipped, "skipped invalid dictionary lines");
    }
    if words.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["gallows", "rope", "n0pe"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// The distinct words of exactly `length` letters, sorted
///
/// # Errors
///
/// - `InvalidLength` if `length` is zero
/// - `NoWordsOfLength` if nothing matches
pub fn words_of_length(words: &[Word], length: usize) -> PuzzleResult<Vec<Word>> {
    if length == 0 {
        return Err(PuzzleError::InvalidLength(length));
    }

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut matching: Vec<Word> = words
        .iter()
        .filter(|word| word.len() == length && seen.insert(word.text()))
        .cloned()
        .collect();

    if matching.is_empty() {
        return Err(PuzzleError::NoWordsOfLength(length));
    }

    matching.sort_unstable_by(|a, b| a.text().cmp(b.text()));
    Ok(matching)
}
