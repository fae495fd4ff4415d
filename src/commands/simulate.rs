//! Simulated games
//!
//! Plays a full game of Hangman against many dictionary words, letting a
//! strategy pick every guess. Each game runs in its own session; all of them
//! borrow the same corpus, so games are played in parallel.

use crate::core::{Letter, PuzzleResult, Word};
use crate::solver::{
    CandidateSet, LetterStrategy, Phase, Session, SessionConfig, StrategyType,
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub session: SessionConfig,
    pub strategy: StrategyType,
    /// Wrong guesses allowed before a game counts as lost
    pub max_wrong: usize,
    /// Play only the first N words
    pub limit: Option<usize>,
    /// Play N randomly chosen words instead of all of them
    pub sample: Option<usize>,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl SimulateConfig {
    #[must_use]
    pub fn new(session: SessionConfig) -> Self {
        Self {
            session,
            strategy: StrategyType::default(),
            max_wrong: 6,
            limit: None,
            sample: None,
            seed: None,
            show_progress: false,
        }
    }
}

/// Outcome of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub word: String,
    /// Letters in the order they were guessed
    pub guesses: Vec<Letter>,
    pub wrong: usize,
    /// Frame fully revealed
    pub solved: bool,
}

impl GameResult {
    /// Solved without exceeding the wrong-guess budget
    #[must_use]
    pub const fn won(&self, max_wrong: usize) -> bool {
        self.solved && self.wrong <= max_wrong
    }
}

/// Aggregate statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub strategy: &'static str,
    pub total_words: usize,
    pub won: usize,
    pub lost: usize,
    pub max_wrong: usize,
    /// Number of games per wrong-guess count
    pub wrong_distribution: BTreeMap<usize, usize>,
    pub average_wrong: f64,
    pub average_guesses: f64,
    /// Words needing the most wrong guesses, worst first
    pub hardest: Vec<(String, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.won as f64 / self.total_words as f64
        }
    }
}

/// Play one game against `target`
///
/// The game continues until the frame is complete or the strategy runs out of
/// letters, so the wrong-guess count is always the full cost of solving.
///
/// # Errors
///
/// Returns an error if the session cannot be created for the target's length.
pub fn play_game<S: LetterStrategy>(
    corpus: &[Word],
    target: &Word,
    config: SessionConfig,
    strategy: &S,
) -> PuzzleResult<GameResult> {
    let mut session = Session::new(corpus, SessionConfig { length: target.len(), ..config })?;
    let mut guesses = Vec::new();
    let mut wrong = 0;

    while !session.phase().is_terminal() {
        let Some(letter) = strategy.select(session.stats()) else {
            break;
        };
        guesses.push(letter);

        let positions: Vec<usize> = target.positions_of(letter).map(|i| i + 1).collect();
        if positions.is_empty() {
            wrong += 1;
            session.reject(letter)?;
        } else {
            session.accept(letter, &positions)?;
        }
    }

    Ok(GameResult {
        word: target.text().to_string(),
        guesses,
        wrong,
        solved: session.phase() == Phase::Solved,
    })
}

/// Run games against every selected word of the configured length
///
/// # Errors
///
/// Returns an error if the dictionary has no words of the configured length.
pub fn run_simulation(corpus: &[Word], config: &SimulateConfig) -> PuzzleResult<SimulationResult> {
    // Validates the length and that words exist before doing any work
    Session::new(corpus, config.session)?;

    let targets = select_targets(corpus, config);

    let pb = if config.show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{} strategy", config.strategy.name()));

    let start = Instant::now();
    let results = targets
        .par_iter()
        .map(|&target| {
            let result = play_game(corpus, target, config.session, &config.strategy);
            pb.inc(1);
            result
        })
        .collect::<PuzzleResult<Vec<_>>>()?;
    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let summary = summarize(&results, config, duration);

    info!(
        words = summary.total_words,
        won = summary.won,
        average_wrong = summary.average_wrong,
        "simulation finished"
    );
    Ok(summary)
}

fn select_targets<'a>(corpus: &'a [Word], config: &SimulateConfig) -> Vec<&'a Word> {
    let candidates = CandidateSet::from_corpus(corpus, config.session.length);
    let mut targets: Vec<&Word> = candidates.words().to_vec();

    if let Some(n) = config.sample {
        let mut rng = config
            .seed
            .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
        targets = targets.choose_multiple(&mut rng, n).copied().collect();
    }
    if let Some(limit) = config.limit {
        targets.truncate(limit);
    }

    targets
}

fn summarize(results: &[GameResult], config: &SimulateConfig, duration: Duration) -> SimulationResult {
    let total_words = results.len();
    let won = results.iter().filter(|r| r.won(config.max_wrong)).count();

    let mut wrong_distribution = BTreeMap::new();
    for result in results {
        *wrong_distribution.entry(result.wrong).or_insert(0) += 1;
    }

    let (average_wrong, average_guesses) = if total_words > 0 {
        (
            results.iter().map(|r| r.wrong).sum::<usize>() as f64 / total_words as f64,
            results.iter().map(|r| r.guesses.len()).sum::<usize>() as f64 / total_words as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let mut hardest: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.wrong > config.max_wrong || !r.solved)
        .map(|r| (r.word.clone(), r.wrong))
        .collect();
    hardest.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    hardest.truncate(10);

    let secs = duration.as_secs_f64();
    SimulationResult {
        strategy: config.strategy.name(),
        total_words,
        won,
        lost: total_words - won,
        max_wrong: config.max_wrong,
        wrong_distribution,
        average_wrong,
        average_guesses,
        hardest,
        duration,
        words_per_second: if secs > 0.0 { total_words as f64 / secs } else { 0.0 },
    }
}
