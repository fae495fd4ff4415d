//! Command implementations

pub mod analyze;
pub mod command;
pub mod simple;
pub mod simulate;

pub use analyze::{AnalysisResult, analyze_puzzle};
pub use command::{Command, CommandError, Response, execute};
pub use simple::run_simple;
pub use simulate::{GameResult, SimulateConfig, SimulationResult, play_game, run_simulation};
