//! Hangman Solver - CLI
//!
//! Hangman assistant with TUI and CLI modes: narrows a dictionary to the words
//! that fit the puzzle and ranks untried letters by how many of them contain it.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{SimulateConfig, analyze_puzzle, run_simple, run_simulation},
    core::Word,
    output::{print_analysis_result, print_simulation_result},
    solver::{RevealRule, Session, SessionConfig, StrategyType},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice, words_of_length},
    },
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman assistant that ranks letters by how many candidate words contain them",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of letters in the hidden word
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Wordlist: 'default' (embedded) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Reveal rule: 'pattern' (default) or 'all' (a hit reveals every occurrence)
    #[arg(short, long, global = true, default_value = "pattern")]
    reveal: String,

    /// Strategy for simulated games: frequency (default), random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, without TUI)
    Simple,

    /// Rank letters for a puzzle position and exit
    Analyze {
        /// Revealed letters with '_' for unknown slots, e.g. a__le
        frame: String,

        /// Letters known to be absent, e.g. zq
        #[arg(short = 'x', long, default_value = "")]
        rejected: String,

        /// Number of letters and candidates to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Play every dictionary word of the given length and report how the strategy fares
    Simulate {
        /// Play only the first N words
        #[arg(long)]
        limit: Option<usize>,

        /// Play N randomly chosen words
        #[arg(long)]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long)]
        seed: Option<u64>,

        /// Wrong guesses allowed before a game is lost
        #[arg(short, long, default_value = "6")]
        max_wrong: usize,
    },
}

/// Set up tracing on stderr
///
/// `RUST_LOG` wins when set. The TUI owns the terminal, so play mode stays at
/// `warn` unless asked otherwise.
fn init_logging(verbose: u8, tui: bool) {
    let default_level = match (tui, verbose) {
        (true, _) | (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hangman_solver={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the dictionary based on the -w flag
fn load_corpus(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "default" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("loading word list '{path}'"))?,
    };
    debug!(words = words.len(), source = wordlist, "dictionary loaded");
    Ok(words)
}

fn parse_reveal(name: &str) -> Result<RevealRule> {
    RevealRule::from_name(name)
        .with_context(|| format!("unknown reveal rule '{name}' (use 'pattern' or 'all')"))
}

fn require_length(length: Option<usize>) -> Result<usize> {
    match length {
        Some(length) => Ok(length),
        None => bail!("--length is required, e.g. --length 7"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.verbose, matches!(command, Commands::Play));

    let reveal = parse_reveal(&cli.reveal)?;
    let words = load_corpus(&cli.wordlist)?;

    match command {
        Commands::Play => {
            let length = require_length(cli.length)?;
            run_play_command(&words, SessionConfig::new(length).with_reveal(reveal))
        }
        Commands::Simple => {
            let length = require_length(cli.length)?;
            run_simple_command(&words, SessionConfig::new(length).with_reveal(reveal))
        }
        Commands::Analyze {
            frame,
            rejected,
            limit,
        } => run_analyze_command(&words, reveal, &frame, &rejected, limit),
        Commands::Simulate {
            limit,
            sample,
            seed,
            max_wrong,
        } => {
            let length = require_length(cli.length)?;
            let config = SimulateConfig {
                session: SessionConfig::new(length).with_reveal(reveal),
                strategy: StrategyType::from_name(&cli.strategy),
                max_wrong,
                limit,
                sample,
                seed,
                show_progress: true,
            };
            run_simulate_command(&words, &config)
        }
    }
}

/// Narrow the corpus to one length so sessions never scan other words
fn corpus_for(words: &[Word], length: usize) -> Result<Vec<Word>> {
    words_of_length(words, length).with_context(|| format!("no dictionary for length {length}"))
}

fn run_play_command(words: &[Word], config: SessionConfig) -> Result<()> {
    use hangman_solver::interactive::{App, run_tui};

    let corpus = corpus_for(words, config.length)?;
    let session = Session::new(&corpus, config)?;
    run_tui(App::new(session))
}

fn run_simple_command(words: &[Word], config: SessionConfig) -> Result<()> {
    let corpus = corpus_for(words, config.length)?;
    let mut session = Session::new(&corpus, config)?;
    run_simple(&mut session)
}

fn run_analyze_command(
    words: &[Word],
    reveal: RevealRule,
    frame: &str,
    rejected: &str,
    limit: usize,
) -> Result<()> {
    let result = analyze_puzzle(words, reveal, frame, rejected, limit)
        .with_context(|| format!("cannot analyze '{frame}'"))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_simulate_command(words: &[Word], config: &SimulateConfig) -> Result<()> {
    let corpus = corpus_for(words, config.session.length)?;

    println!(
        "Simulating {} games of length {} with the {} strategy...",
        config
            .limit
            .into_iter()
            .chain(config.sample)
            .min()
            .unwrap_or(corpus.len())
            .min(corpus.len()),
        config.session.length,
        config.strategy.name()
    );

    let result = run_simulation(&corpus, config)?;
    info!(win_rate = result.win_rate(), "simulation done");
    print_simulation_result(&result);
    Ok(())
}
