//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_result, print_help, print_simulation_result, print_stats, print_status,
    print_transition, print_words,
};
