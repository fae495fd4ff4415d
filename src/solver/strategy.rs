//! Letter selection strategies
//!
//! Defines the `LetterStrategy` trait and concrete implementations.

use super::LetterStats;
use crate::core::Letter;

/// A strategy for picking the next letter to guess
pub trait LetterStrategy {
    /// Pick a letter from the current statistics
    ///
    /// Returns `None` if no untried letter is worth guessing.
    fn select(&self, stats: &LetterStats) -> Option<Letter>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Most likely letter first (default)
    Frequency(FrequencyStrategy),
    /// Uniformly random among letters that appear in some candidate
    Random(RandomStrategy),
}

impl LetterStrategy for StrategyType {
    fn select(&self, stats: &LetterStats) -> Option<Letter> {
        match self {
            Self::Frequency(s) => s.select(stats),
            Self::Random(s) => s.select(stats),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy)
    }
}

/// Always guesses the highest ranked letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyStrategy;

impl LetterStrategy for FrequencyStrategy {
    fn select(&self, stats: &LetterStats) -> Option<Letter> {
        stats.best().map(|stat| stat.letter)
    }
}

/// Random letter among those that appear in at least one candidate
///
/// Baseline for comparing against the frequency ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomStrategy;

impl LetterStrategy for RandomStrategy {
    fn select(&self, stats: &LetterStats) -> Option<Letter> {
        use rand::prelude::IndexedRandom;

        let live: Vec<Letter> = stats
            .entries()
            .iter()
            .filter(|stat| stat.word_occurrences > 0)
            .map(|stat| stat.letter)
            .collect();

        live.choose(&mut rand::rng())
            .copied()
            .or_else(|| stats.best().map(|stat| stat.letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterSet;
    use crate::solver::CandidateSet;
    use crate::wordlists::loader::words_from_slice;

    fn stats_for(words: &[&str], length: usize) -> LetterStats {
        let corpus = words_from_slice(words);
        let candidates = CandidateSet::from_corpus(&corpus, length);
        LetterStats::compute(&candidates, LetterSet::FULL)
    }

    #[test]
    fn frequency_strategy_picks_most_common() {
        let stats = stats_for(&["cat", "car", "bar"], 3);
        assert_eq!(FrequencyStrategy.select(&stats), Letter::new('a').ok());
    }

    #[test]
    fn random_strategy_picks_a_letter_in_some_candidate() {
        let stats = stats_for(&["cat", "dog"], 3);
        for _ in 0..50 {
            let pick = RandomStrategy.select(&stats).unwrap();
            assert!("catdog".contains(pick.as_char()));
        }
    }

    #[test]
    fn strategies_handle_exhausted_stats() {
        let stats = stats_for(&["cat"], 5);
        // Falls back to the alphabetical ranking
        assert_eq!(FrequencyStrategy.select(&stats), Letter::new('a').ok());
        assert_eq!(RandomStrategy.select(&stats), Letter::new('a').ok());
    }

    #[test]
    fn strategy_from_name() {
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("frequency").name(), "frequency");
        assert_eq!(StrategyType::from_name("unknown").name(), "frequency");
    }
}
