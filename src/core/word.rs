//! Dictionary word representation
//!
//! A Word stores its lowercase text along with the set of letters it contains,
//! so presence and absence checks during filtering are a single mask test.

use super::{Letter, LetterSet};
use std::fmt;
use thiserror::Error;

/// A lowercase dictionary word of any positive length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new("Puzzle").unwrap();
    /// assert_eq!(word.text(), "puzzle");
    /// assert_eq!(word.len(), 6);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("can't").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        text.make_ascii_lowercase();

        let mut letters = LetterSet::EMPTY;
        for byte in text.bytes() {
            let letter = Letter::from_byte(byte).ok_or(WordError::InvalidCharacters)?;
            letters.insert(letter);
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; words are validated non-empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Get the letter at a 0-based position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Letter {
        Letter::from_byte(self.text.as_bytes()[position]).unwrap_or_else(|| {
            unreachable!("word bytes are validated lowercase ASCII at construction")
        })
    }

    /// Iterate the letters in order
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.bytes().filter_map(Letter::from_byte)
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(letter)
    }

    /// 0-based positions where a letter appears
    pub fn positions_of(&self, letter: Letter) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .enumerate()
            .filter(move |&(_, l)| l == letter)
            .map(|(i, _)| i)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
