//! Candidate set narrowing
//!
//! Each filter reads the current set and collects the survivors into a new
//! one. The session then swaps the new set in, so nothing is removed from a
//! collection while it is being walked.

use crate::core::{Frame, Letter, Word};
use rustc_hash::FxHashSet;

/// Dictionary words still consistent with the puzzle so far
///
/// Borrows words from a shared corpus; cloning only copies references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet<'a> {
    words: Vec<&'a Word>,
}

impl<'a> CandidateSet<'a> {
    /// Initial candidates: every distinct corpus word of exactly `length` letters
    ///
    /// Corpus order is preserved; later duplicates are dropped.
    #[must_use]
    pub fn from_corpus(corpus: &'a [Word], length: usize) -> Self {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let words = corpus
            .iter()
            .filter(|word| word.len() == length && seen.insert(word.text()))
            .collect();
        Self { words }
    }

    /// Number of candidates
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.words.iter().copied()
    }

    fn retain_into(&self, keep: impl Fn(&Word) -> bool) -> Self {
        Self {
            words: self.iter().filter(|&word| keep(word)).collect(),
        }
    }

    /// Words that agree with every revealed slot of `frame`
    #[must_use]
    pub fn filter_by_frame(&self, frame: &Frame) -> Self {
        self.retain_into(|word| frame.matches(word))
    }

    /// Words with no occurrence of `letter`
    #[must_use]
    pub fn filter_by_absence(&self, letter: Letter) -> Self {
        self.retain_into(|word| !word.has_letter(letter))
    }

    /// Words with at least one occurrence of `letter`
    #[must_use]
    pub fn filter_by_presence(&self, letter: Letter) -> Self {
        self.retain_into(|word| word.has_letter(letter))
    }

    /// Words where `letter` appears at exactly `positions` (0-based) and nowhere else
    #[must_use]
    pub fn filter_by_exact_positions(&self, letter: Letter, positions: &[usize]) -> Self {
        self.retain_into(|word| word.positions_of(letter).eq(positions.iter().copied()))
    }
}
