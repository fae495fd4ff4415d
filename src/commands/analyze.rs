//! One-shot analysis
//!
//! Restores a puzzle from a frame and rejected letters and reports the
//! ranked letters, without entering an interactive loop.

use super::command::{CommandError, parse_letters};
use crate::core::{Frame, LetterSet, Word};
use crate::solver::{LetterStats, Phase, RevealRule, Session, SessionConfig};

/// Result of analyzing a puzzle position
pub struct AnalysisResult {
    pub frame: Frame,
    pub rejected: LetterSet,
    pub phase: Phase,
    pub stats: LetterStats,
    /// First few candidates, for display
    pub sample: Vec<String>,
    /// Number of ranked letters to show
    pub limit: usize,
}

/// Analyze a puzzle given as text
///
/// `frame` uses `_` for unknown letters; `rejected` is a run of letters such
/// as `"zq"` (empty for none). The word length comes from the frame.
///
/// # Errors
///
/// Returns an error if the frame or letters are malformed, the dictionary has
/// no words of that length, or a letter is both revealed and rejected.
///
/// # Examples
/// ```
/// use hangman_solver::commands::analyze_puzzle;
/// use hangman_solver::solver::RevealRule;
/// use hangman_solver::wordlists::loader::words_from_slice;
///
/// let corpus = words_from_slice(&["abc", "abd", "azy"]);
/// let result = analyze_puzzle(&corpus, RevealRule::Pattern, "a__", "z", 5).unwrap();
/// assert_eq!(result.stats.candidates(), 2);
/// ```
pub fn analyze_puzzle(
    corpus: &[Word],
    reveal: RevealRule,
    frame: &str,
    rejected: &str,
    limit: usize,
) -> Result<AnalysisResult, CommandError> {
    let frame = Frame::parse(frame)?;
    let rejected = parse_letters(rejected)?;

    let config = SessionConfig::new(frame.len()).with_reveal(reveal);
    let mut session = Session::new(corpus, config)?;
    session.set_state(frame, rejected)?;

    Ok(AnalysisResult {
        frame: session.frame().clone(),
        rejected: session.state().rejected(),
        phase: session.phase(),
        stats: session.stats().clone(),
        sample: session
            .candidates()
            .iter()
            .take(limit)
            .map(|word| word.text().to_string())
            .collect(),
        limit,
    })
}
