//! The partially revealed solution
//!
//! A frame has one slot per letter of the hidden word. Each slot is either a
//! confirmed letter or a wildcard. Text form uses `_` for wildcards, so a
//! three-letter word with its first and last letters known reads `"a_c"`.

use super::{Letter, LetterSet, PuzzleError, Word};
use std::fmt;

/// Character used to display an unrevealed slot
pub const WILDCARD: char = '_';

/// One slot per letter position; `None` is a wildcard
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    slots: Vec<Option<Letter>>,
}

impl Frame {
    /// A frame of `length` wildcards
    #[must_use]
    pub fn blank(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    /// Parse a frame like `"a__le"`
    ///
    /// Accepts `_`, `.`, `?` and `-` as wildcards and letters in either case.
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidFrameChar` for any other character.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Frame;
    ///
    /// let frame = Frame::parse("a_C").unwrap();
    /// assert_eq!(frame.len(), 3);
    /// assert_eq!(frame.to_string(), "a_c");
    /// assert_eq!(Frame::parse("a.?").unwrap().to_string(), "a__");
    /// ```
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let slots = text
            .chars()
            .map(|ch| match ch {
                '_' | '.' | '?' | '-' => Ok(None),
                ch if ch.is_ascii_alphabetic() => Letter::new(ch).map(Some),
                ch => Err(PuzzleError::InvalidFrameChar(ch)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { slots })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at a 0-based position
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Letter> {
        self.slots.get(position).copied().flatten()
    }

    /// Reveal a letter at a 0-based position
    ///
    /// Callers validate bounds and conflicts first; this only writes.
    pub(crate) fn reveal(&mut self, position: usize, letter: Letter) {
        self.slots[position] = Some(letter);
    }

    pub fn slots(&self) -> &[Option<Letter>] {
        &self.slots
    }

    /// True when no wildcards remain
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of wildcard slots
    #[must_use]
    pub fn unrevealed(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Distinct revealed letters
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.slots.iter().flatten().copied().collect()
    }

    /// Whether `word` agrees with every revealed slot
    ///
    /// Anchored match: the word must have exactly as many letters as the frame.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.len()
            && self
                .slots
                .iter()
                .zip(word.iter())
                .all(|(slot, letter)| slot.is_none_or(|revealed| revealed == letter))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Some(letter) => write!(f, "{letter}")?,
                None => write!(f, "{WILDCARD}")?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Frame {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn blank_frame_is_all_wildcards() {
        let frame = Frame::blank(4);
        assert_eq!(frame.to_string(), "____");
        assert_eq!(frame.unrevealed(), 4);
        assert!(!frame.is_complete());
        assert!(frame.letters().is_empty());
    }

    #[test]
    fn parse_round_trips_display() {
        let frame = Frame::parse("h_ngm_n").unwrap();
        assert_eq!(frame.to_string(), "h_ngm_n");
        assert_eq!(frame.unrevealed(), 2);
        assert_eq!(frame.letters().to_string(), "ghmn");
    }

    #[test]
    fn parse_rejects_bad_characters() {
        assert_eq!(
            Frame::parse("a_1"),
            Err(PuzzleError::InvalidFrameChar('1'))
        );
        assert!(Frame::parse("a b").is_err());
    }

    #[test]
    fn matches_respects_revealed_slots() {
        let frame = Frame::parse("a_c").unwrap();
        assert!(frame.matches(&word("abc")));
        assert!(frame.matches(&word("azc")));
        assert!(!frame.matches(&word("abd")));
        assert!(!frame.matches(&word("bbc")));
    }

    #[test]
    fn matches_is_anchored_to_length() {
        let frame = Frame::parse("a__").unwrap();
        assert!(!frame.matches(&word("ab")));
        assert!(!frame.matches(&word("abcd")));
    }

    #[test]
    fn wildcards_match_anything() {
        let frame = Frame::blank(3);
        for text in ["abc", "zzz", "the"] {
            assert!(frame.matches(&word(text)));
        }
    }

    #[test]
    fn complete_frame() {
        let frame = Frame::parse("abc").unwrap();
        assert!(frame.is_complete());
        assert_eq!(frame.unrevealed(), 0);
    }
}
