//! Error types for puzzle state changes and dictionary lookups

use super::Letter;
use thiserror::Error;

/// Errors raised at the puzzle-state boundary.
///
/// Every variant is produced before any mutation happens, so a failed
/// operation always leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Word length must be at least one letter.
    #[error("word length must be at least 1, got {0}")]
    InvalidLength(usize),

    /// The dictionary has nothing of the requested length.
    #[error("no words of length {0} in the dictionary")]
    NoWordsOfLength(usize),

    /// Letter was already accepted or rejected.
    #[error("letter '{0}' has already been guessed")]
    UnknownLetter(Letter),

    /// 1-based position outside `1..=length`.
    #[error("position {position} is out of range 1..={length}")]
    PositionOutOfRange { position: usize, length: usize },

    /// Letter given as both revealed and rejected.
    #[error("letter '{0}' cannot be both revealed and rejected")]
    ConflictingLetter(Letter),

    /// Position already shows a different letter.
    #[error("position {position} already shows '{existing}'")]
    PositionConflict { position: usize, existing: Letter },

    #[error("accept needs at least one position")]
    NoPositions,

    #[error("frame has {actual} slots but the word has {expected} letters")]
    FrameLengthMismatch { expected: usize, actual: usize },

    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    #[error("expected a single letter, got '{0}'")]
    InvalidLetterText(String),

    #[error("invalid frame character '{0}' (use letters or '_')")]
    InvalidFrameChar(char),

    #[error("nothing to undo")]
    NothingToUndo,
}

/// Result type for puzzle operations.
pub type PuzzleResult<T> = Result<T, PuzzleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let a = Letter::new('a').unwrap();

        assert_eq!(
            PuzzleError::InvalidLength(0).to_string(),
            "word length must be at least 1, got 0"
        );
        assert_eq!(
            PuzzleError::UnknownLetter(a).to_string(),
            "letter 'a' has already been guessed"
        );
        assert_eq!(
            PuzzleError::PositionOutOfRange {
                position: 7,
                length: 5
            }
            .to_string(),
            "position 7 is out of range 1..=5"
        );
        assert_eq!(
            PuzzleError::PositionConflict {
                position: 2,
                existing: a
            }
            .to_string(),
            "position 2 already shows 'a'"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PuzzleError>();
    }
}
