//! Puzzle session
//!
//! Owns one puzzle's state and candidate set and keeps them in step. The
//! corpus is only borrowed, so any number of sessions can share one
//! dictionary.

use super::{CandidateSet, LetterStats, PuzzleState};
use crate::core::{Frame, Letter, LetterSet, PuzzleError, PuzzleResult, Word};
use std::fmt;
use tracing::{debug, info};

/// How an accepted letter narrows the candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealRule {
    /// Only the revealed slots are checked; the letter may also occur elsewhere
    #[default]
    Pattern,
    /// Revealing a letter reveals every occurrence, so it appears nowhere else
    AllOccurrences,
}

impl RevealRule {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pattern" => Some(Self::Pattern),
            "all" | "all-occurrences" | "strict" => Some(Self::AllOccurrences),
            _ => None,
        }
    }
}

/// Settings for a new session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub length: usize,
    pub reveal: RevealRule,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length,
            reveal: RevealRule::Pattern,
        }
    }

    #[must_use]
    pub const fn with_reveal(mut self, reveal: RevealRule) -> Self {
        self.reveal = reveal;
        self
    }
}

/// Overall progress of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nothing guessed yet
    Initialized,
    InProgress,
    /// Every slot of the frame is revealed
    Solved,
    /// No dictionary word fits the guesses so far
    Exhausted,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initialized => "initialized",
            Self::InProgress => "in progress",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}

/// What a successful state change did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub phase: Phase,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

impl Transition {
    /// Candidates eliminated by this step
    #[must_use]
    pub const fn eliminated(&self) -> usize {
        self.candidates_before.saturating_sub(self.candidates_after)
    }
}

#[derive(Debug, Clone)]
struct Snapshot<'a> {
    state: PuzzleState,
    candidates: CandidateSet<'a>,
    stats: LetterStats,
    phase: Phase,
}

/// A single Hangman puzzle being worked on
#[derive(Debug, Clone)]
pub struct Session<'a> {
    corpus: &'a [Word],
    config: SessionConfig,
    state: PuzzleState,
    candidates: CandidateSet<'a>,
    stats: LetterStats,
    phase: Phase,
    undo_stack: Vec<Snapshot<'a>>,
}

impl<'a> Session<'a> {
    /// Start a session over every corpus word of `config.length` letters
    ///
    /// # Errors
    /// - `InvalidLength` if the length is zero
    /// - `NoWordsOfLength` if the corpus has no word of that length
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Letter;
    /// use hangman_solver::solver::{Phase, Session, SessionConfig};
    /// use hangman_solver::wordlists::loader::words_from_slice;
    ///
    /// let corpus = words_from_slice(&["abc", "abd", "xyz"]);
    /// let mut session = Session::new(&corpus, SessionConfig::new(3)).unwrap();
    ///
    /// session.reject(Letter::new('x').unwrap()).unwrap();
    /// assert_eq!(session.count(), 2);
    /// assert_eq!(session.phase(), Phase::InProgress);
    /// ```
    pub fn new(corpus: &'a [Word], config: SessionConfig) -> PuzzleResult<Self> {
        let state = PuzzleState::new(config.length)?;
        let candidates = CandidateSet::from_corpus(corpus, config.length);
        if candidates.is_empty() {
            return Err(PuzzleError::NoWordsOfLength(config.length));
        }
        let stats = LetterStats::compute(&candidates, state.potential());

        debug!(
            length = config.length,
            candidates = candidates.count(),
            "session started"
        );

        Ok(Self {
            corpus,
            config,
            state,
            candidates,
            stats,
            phase: Phase::Initialized,
            undo_stack: Vec::new(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.config.length
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &PuzzleState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn frame(&self) -> &Frame {
        self.state.frame()
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet<'a> {
        &self.candidates
    }

    /// Number of candidates
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.candidates.count()
    }

    /// Statistics for the current candidates
    #[inline]
    #[must_use]
    pub const fn stats(&self) -> &LetterStats {
        &self.stats
    }

    /// Number of steps that can be undone
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Reveal `letter` at the given 1-based positions
    ///
    /// # Errors
    /// Any `PuzzleState::accept` error; the session is unchanged on error.
    pub fn accept(&mut self, letter: Letter, positions: &[usize]) -> PuzzleResult<Transition> {
        let mut state = self.state.clone();
        let revealed = state.accept(letter, positions)?;

        let mut candidates = self.candidates.filter_by_frame(state.frame());
        if self.config.reveal == RevealRule::AllOccurrences {
            candidates = candidates.filter_by_exact_positions(letter, &revealed);
        }

        debug!(%letter, frame = %state.frame(), "accept");
        Ok(self.commit(state, candidates, true))
    }

    /// Mark `letter` as absent
    ///
    /// # Errors
    /// `UnknownLetter` if the letter was already guessed; the session is unchanged.
    pub fn reject(&mut self, letter: Letter) -> PuzzleResult<Transition> {
        let mut state = self.state.clone();
        state.reject(letter)?;

        let candidates = self.candidates.filter_by_absence(letter);

        debug!(%letter, "reject");
        Ok(self.commit(state, candidates, true))
    }

    /// Replace the whole puzzle with a frame and a set of absent letters
    ///
    /// Candidates are rebuilt from the full corpus, so this also works after
    /// the session ran dry.
    ///
    /// # Errors
    /// `FrameLengthMismatch` or `ConflictingLetter`; the session is unchanged.
    pub fn set_state(&mut self, frame: Frame, rejected: LetterSet) -> PuzzleResult<Transition> {
        let state = PuzzleState::from_parts(self.config.length, frame, rejected)?;

        let mut candidates = CandidateSet::from_corpus(self.corpus, self.config.length)
            .filter_by_frame(state.frame());
        for letter in state.rejected().iter() {
            candidates = candidates.filter_by_absence(letter);
        }
        for letter in state.accepted().iter() {
            candidates = candidates.filter_by_presence(letter);
            if self.config.reveal == RevealRule::AllOccurrences {
                let revealed: Vec<usize> = state
                    .frame()
                    .slots()
                    .iter()
                    .enumerate()
                    .filter(|&(_, slot)| *slot == Some(letter))
                    .map(|(i, _)| i)
                    .collect();
                candidates = candidates.filter_by_exact_positions(letter, &revealed);
            }
        }

        debug!(frame = %state.frame(), rejected = %state.rejected(), "set state");
        Ok(self.commit(state, candidates, false))
    }

    /// Restore the state from before the last successful change
    ///
    /// # Errors
    /// `NothingToUndo` if there is no earlier state.
    pub fn undo(&mut self) -> PuzzleResult<Transition> {
        let snapshot = self.undo_stack.pop().ok_or(PuzzleError::NothingToUndo)?;
        let candidates_before = self.count();

        self.state = snapshot.state;
        self.candidates = snapshot.candidates;
        self.stats = snapshot.stats;
        self.phase = snapshot.phase;

        debug!(frame = %self.state.frame(), "undo");
        Ok(Transition {
            phase: self.phase,
            candidates_before,
            candidates_after: self.count(),
        })
    }

    /// Start over with the same corpus and settings
    pub fn reset(&mut self) {
        let state = PuzzleState::blank(self.config.length);
        self.candidates = CandidateSet::from_corpus(self.corpus, self.config.length);
        self.stats = LetterStats::compute(&self.candidates, state.potential());
        self.state = state;
        self.phase = Phase::Initialized;
        self.undo_stack.clear();
        debug!("session reset");
    }

    fn commit(
        &mut self,
        state: PuzzleState,
        candidates: CandidateSet<'a>,
        guess: bool,
    ) -> Transition {
        let candidates_before = self.count();
        let previous_phase = self.phase;

        let snapshot = Snapshot {
            state: std::mem::replace(&mut self.state, state),
            candidates: std::mem::replace(&mut self.candidates, candidates),
            stats: std::mem::take(&mut self.stats),
            phase: self.phase,
        };
        self.undo_stack.push(snapshot);

        self.stats = LetterStats::compute(&self.candidates, self.state.potential());
        // A guess never leaves Exhausted; only set_state, undo or reset do
        self.phase = if guess && previous_phase == Phase::Exhausted {
            Phase::Exhausted
        } else {
            self.derive_phase()
        };

        if self.phase != previous_phase && self.phase.is_terminal() {
            info!(phase = %self.phase, frame = %self.state.frame(), "puzzle finished");
        }

        Transition {
            phase: self.phase,
            candidates_before,
            candidates_after: self.count(),
        }
    }

    fn derive_phase(&self) -> Phase {
        if self.state.frame().is_complete() {
            Phase::Solved
        } else if self.candidates.is_empty() {
            Phase::Exhausted
        } else if self.state.is_untouched() {
            Phase::Initialized
        } else {
            Phase::InProgress
        }
    }
}
