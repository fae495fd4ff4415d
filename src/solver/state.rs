//! Revealed frame plus the three-way letter partition
//!
//! Every letter is in exactly one of potential, accepted or rejected. Only
//! accepted and rejected are stored; potential is whatever is left.

use crate::core::{Frame, Letter, LetterSet, PuzzleError, PuzzleResult};

/// Frame and letter partition for one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    frame: Frame,
    accepted: LetterSet,
    rejected: LetterSet,
}

impl PuzzleState {
    /// A blank puzzle of `length` letters with the whole alphabet untried
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidLength` if `length` is zero.
    pub fn new(length: usize) -> PuzzleResult<Self> {
        if length == 0 {
            return Err(PuzzleError::InvalidLength(length));
        }
        Ok(Self::blank(length))
    }

    pub(crate) fn blank(length: usize) -> Self {
        Self {
            frame: Frame::blank(length),
            accepted: LetterSet::EMPTY,
            rejected: LetterSet::EMPTY,
        }
    }

    /// Rebuild a state from a frame and a list of letters known to be absent
    ///
    /// Letters shown in the frame become accepted, `rejected` become rejected,
    /// everything else is potential.
    ///
    /// # Errors
    /// - `FrameLengthMismatch` if the frame is not `length` slots long
    /// - `ConflictingLetter` if a letter is both in the frame and rejected
    pub fn from_parts(length: usize, frame: Frame, rejected: LetterSet) -> PuzzleResult<Self> {
        if length == 0 {
            return Err(PuzzleError::InvalidLength(length));
        }
        if frame.len() != length {
            return Err(PuzzleError::FrameLengthMismatch {
                expected: length,
                actual: frame.len(),
            });
        }

        let accepted = frame.letters();
        if let Some(letter) = accepted.intersection(rejected).iter().next() {
            return Err(PuzzleError::ConflictingLetter(letter));
        }

        Ok(Self {
            frame,
            accepted,
            rejected,
        })
    }

    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.frame.len()
    }

    #[inline]
    #[must_use]
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    #[inline]
    #[must_use]
    pub const fn accepted(&self) -> LetterSet {
        self.accepted
    }

    #[inline]
    #[must_use]
    pub const fn rejected(&self) -> LetterSet {
        self.rejected
    }

    /// Letters not yet guessed
    #[inline]
    #[must_use]
    pub const fn potential(&self) -> LetterSet {
        LetterSet::FULL
            .difference(self.accepted)
            .difference(self.rejected)
    }

    /// True until the first letter is accepted or rejected
    #[must_use]
    pub const fn is_untouched(&self) -> bool {
        self.accepted.is_empty() && self.rejected.is_empty()
    }

    /// Reveal `letter` at the given 1-based positions
    ///
    /// Validation happens before anything is written, so on error the state is
    /// unchanged. Returns the 0-based positions that were revealed, sorted and
    /// de-duplicated.
    ///
    /// # Errors
    /// - `UnknownLetter` if the letter was already guessed
    /// - `NoPositions` if `positions` is empty
    /// - `PositionOutOfRange` if any position is 0 or past the end
    /// - `PositionConflict` if a position already shows a different letter
    pub fn accept(&mut self, letter: Letter, positions: &[usize]) -> PuzzleResult<Vec<usize>> {
        if !self.potential().contains(letter) {
            return Err(PuzzleError::UnknownLetter(letter));
        }
        if positions.is_empty() {
            return Err(PuzzleError::NoPositions);
        }

        let length = self.length();
        let mut indices = Vec::with_capacity(positions.len());
        for &position in positions {
            if position == 0 || position > length {
                return Err(PuzzleError::PositionOutOfRange { position, length });
            }
            let index = position - 1;
            if let Some(existing) = self.frame.get(index) {
                // Any revealed letter here is accepted, so it can never equal a potential letter
                return Err(PuzzleError::PositionConflict { position, existing });
            }
            indices.push(index);
        }
        indices.sort_unstable();
        indices.dedup();

        for &index in &indices {
            self.frame.reveal(index, letter);
        }
        self.accepted.insert(letter);

        Ok(indices)
    }

    /// Mark `letter` as absent from the word
    ///
    /// # Errors
    /// Returns `UnknownLetter` if the letter was already guessed.
    pub fn reject(&mut self, letter: Letter) -> PuzzleResult<()> {
        if !self.potential().contains(letter) {
            return Err(PuzzleError::UnknownLetter(letter));
        }
        self.rejected.insert(letter);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn letters(text: &str) -> LetterSet {
        text.chars().map(letter).collect()
    }

    fn assert_partition(state: &PuzzleState) {
        let (p, a, r) = (state.potential(), state.accepted(), state.rejected());
        assert!(p.is_disjoint(a) && p.is_disjoint(r) && a.is_disjoint(r));
        assert_eq!(p.union(a).union(r), LetterSet::FULL);
    }

    #[test]
    fn new_state_is_blank() {
        let state = PuzzleState::new(5).unwrap();
        assert_eq!(state.frame().to_string(), "_____");
        assert_eq!(state.potential(), LetterSet::FULL);
        assert!(state.is_untouched());
        assert_partition(&state);
    }

    #[test]
    fn zero_length_is_invalid() {
        assert_eq!(PuzzleState::new(0), Err(PuzzleError::InvalidLength(0)));
    }

    #[test]
    fn accept_reveals_positions() {
        let mut state = PuzzleState::new(5).unwrap();
        let revealed = state.accept(letter('e'), &[5, 2, 5]).unwrap();

        assert_eq!(revealed, vec![1, 4]);
        assert_eq!(state.frame().to_string(), "_e__e");
        assert!(state.accepted().contains(letter('e')));
        assert!(!state.potential().contains(letter('e')));
        assert_partition(&state);
    }

    #[test]
    fn accept_validates_before_writing() {
        let mut state = PuzzleState::new(3).unwrap();
        let before = state.clone();

        assert_eq!(
            state.accept(letter('a'), &[1, 4]),
            Err(PuzzleError::PositionOutOfRange {
                position: 4,
                length: 3
            })
        );
        assert_eq!(
            state.accept(letter('a'), &[0]),
            Err(PuzzleError::PositionOutOfRange {
                position: 0,
                length: 3
            })
        );
        assert_eq!(state.accept(letter('a'), &[]), Err(PuzzleError::NoPositions));
        assert_eq!(state, before);
    }

    #[test]
    fn accept_refuses_to_overwrite_revealed_letter() {
        let mut state = PuzzleState::new(3).unwrap();
        state.accept(letter('a'), &[1]).unwrap();
        let before = state.clone();

        assert_eq!(
            state.accept(letter('b'), &[2, 1]),
            Err(PuzzleError::PositionConflict {
                position: 1,
                existing: letter('a')
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn accept_twice_is_unknown_letter() {
        let mut state = PuzzleState::new(3).unwrap();
        state.accept(letter('a'), &[1]).unwrap();
        assert_eq!(
            state.accept(letter('a'), &[2]),
            Err(PuzzleError::UnknownLetter(letter('a')))
        );
    }

    #[test]
    fn reject_moves_letter() {
        let mut state = PuzzleState::new(3).unwrap();
        state.reject(letter('x')).unwrap();
        assert!(state.rejected().contains(letter('x')));
        assert_eq!(state.potential().len(), 25);
        assert_partition(&state);
    }

    #[test]
    fn reject_already_rejected_is_unknown_letter() {
        let mut state = PuzzleState::new(3).unwrap();
        state.reject(letter('x')).unwrap();
        let before = state.clone();

        assert_eq!(
            state.reject(letter('x')),
            Err(PuzzleError::UnknownLetter(letter('x')))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn reject_accepted_letter_is_unknown_letter() {
        let mut state = PuzzleState::new(3).unwrap();
        state.accept(letter('a'), &[1]).unwrap();
        assert_eq!(
            state.reject(letter('a')),
            Err(PuzzleError::UnknownLetter(letter('a')))
        );
    }

    #[test]
    fn from_parts_partitions_letters() {
        let frame = Frame::parse("a__").unwrap();
        let state = PuzzleState::from_parts(3, frame, letters("z")).unwrap();

        assert_eq!(state.accepted(), letters("a"));
        assert_eq!(state.rejected(), letters("z"));
        assert_eq!(state.potential().len(), 24);
        assert_partition(&state);
    }

    #[test]
    fn from_parts_rejects_conflicts() {
        let frame = Frame::parse("ab_").unwrap();
        assert_eq!(
            PuzzleState::from_parts(3, frame, letters("bq")),
            Err(PuzzleError::ConflictingLetter(letter('b')))
        );
    }

    #[test]
    fn from_parts_checks_length() {
        let frame = Frame::parse("a__").unwrap();
        assert_eq!(
            PuzzleState::from_parts(4, frame, LetterSet::EMPTY),
            Err(PuzzleError::FrameLengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }
}
