//! Letter frequency statistics over the candidate set
//!
//! For every untried letter we count how many times it appears across all
//! candidates and how many candidates contain it at least once. The latter,
//! divided by the number of candidates, is the chance the letter is in the
//! hidden word, assuming every candidate is equally likely.

use super::CandidateSet;
use crate::core::{Letter, LetterSet};
use std::cmp::Ordering;

/// Counts for one letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterStat {
    pub letter: Letter,
    /// Total instances across all candidates
    pub occurrences: usize,
    /// Candidates containing the letter at least once
    pub word_occurrences: usize,
    /// `word_occurrences / candidates`; `None` when there are no candidates
    pub probability: Option<f64>,
}

/// Statistics for every potential letter, in alphabetical order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LetterStats {
    entries: Vec<LetterStat>,
    candidates: usize,
}

impl LetterStats {
    /// Recount `potential` letters over `candidates`
    ///
    /// Linear in the total length of all candidate words.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Letter, LetterSet};
    /// use hangman_solver::solver::{CandidateSet, LetterStats};
    /// use hangman_solver::wordlists::loader::words_from_slice;
    ///
    /// let corpus = words_from_slice(&["abc", "abd"]);
    /// let candidates = CandidateSet::from_corpus(&corpus, 3);
    /// let stats = LetterStats::compute(&candidates, LetterSet::FULL);
    ///
    /// let b = stats.get(Letter::new('b').unwrap()).unwrap();
    /// assert_eq!(b.word_occurrences, 2);
    /// assert_eq!(b.probability, Some(1.0));
    /// ```
    #[must_use]
    pub fn compute(candidates: &CandidateSet<'_>, potential: LetterSet) -> Self {
        let mut occurrences = [0usize; Letter::COUNT];
        let mut word_occurrences = [0usize; Letter::COUNT];

        for word in candidates.iter() {
            for letter in word.iter() {
                occurrences[letter.index()] += 1;
            }
            for letter in word.letters().iter() {
                word_occurrences[letter.index()] += 1;
            }
        }

        let total = candidates.count();
        let entries = potential
            .iter()
            .map(|letter| {
                let i = letter.index();
                LetterStat {
                    letter,
                    occurrences: occurrences[i],
                    word_occurrences: word_occurrences[i],
                    probability: (total > 0).then(|| word_occurrences[i] as f64 / total as f64),
                }
            })
            .collect();

        Self {
            entries,
            candidates: total,
        }
    }

    /// Number of candidates the statistics were computed over
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> usize {
        self.candidates
    }

    /// True when probabilities are undefined (no candidates)
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        self.candidates == 0
    }

    /// Entries in alphabetical order
    #[must_use]
    pub fn entries(&self) -> &[LetterStat] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, letter: Letter) -> Option<&LetterStat> {
        self.entries.iter().find(|stat| stat.letter == letter)
    }

    /// Entries by probability, highest first; equal probabilities in alphabetical order
    ///
    /// All entries share one denominator, so comparing `word_occurrences` orders
    /// them exactly as probability would without float comparison. With no
    /// candidates every letter ties and the ranking is plain alphabetical.
    #[must_use]
    pub fn ranked(&self) -> Vec<LetterStat> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(rank_order);
        ranked
    }

    /// The highest ranked letter, if any letters remain
    #[must_use]
    pub fn best(&self) -> Option<LetterStat> {
        self.entries.iter().copied().min_by(rank_order)
    }
}

fn rank_order(a: &LetterStat, b: &LetterStat) -> Ordering {
    b.word_occurrences
        .cmp(&a.word_occurrences)
        .then_with(|| a.letter.cmp(&b.letter))
}
