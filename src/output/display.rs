//! Display functions for command results

use super::formatters::{format_probability, position_ruler, probability_bar, spaced_frame};
use crate::commands::command::HELP;
use crate::commands::{AnalysisResult, SimulationResult};
use crate::solver::{CandidateSet, LetterStats, Phase, Session, Transition};
use colored::Colorize;

/// Default number of rows shown by `stats` and `words`
pub const DEFAULT_LIMIT: usize = 10;

/// Print untried letters ranked by probability
pub fn print_stats(stats: &LetterStats, limit: Option<usize>) {
    if stats.is_undefined() {
        println!(
            "{}",
            "No candidates left: probabilities are undefined.".red()
        );
        return;
    }

    println!(
        "\n📊 {} ({} candidates)",
        "Letter probabilities".bright_cyan().bold(),
        stats.candidates()
    );
    for (rank, stat) in stats
        .ranked()
        .iter()
        .take(limit.unwrap_or(DEFAULT_LIMIT))
        .enumerate()
    {
        let bar = probability_bar(stat.probability, 30);
        let letter = stat.letter.to_string().to_uppercase();
        let line = format!(
            "  {:>2}. {}  [{}] {}  {:>5} words {:>6} total",
            rank + 1,
            if rank == 0 {
                letter.bright_yellow().bold()
            } else {
                letter.normal()
            },
            bar.green(),
            format_probability(stat.probability),
            stat.word_occurrences,
            stat.occurrences,
        );
        println!("{line}");
    }
}

/// Print remaining candidate words
pub fn print_words(candidates: &CandidateSet<'_>, limit: Option<usize>) {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if candidates.is_empty() {
        println!("{}", "No candidates remain.".red());
        return;
    }

    println!("\nRemaining candidates ({}):", candidates.count());
    for word in candidates.iter().take(limit) {
        println!("  • {word}");
    }
    if candidates.count() > limit {
        println!(
            "  {}",
            format!("… and {} more", candidates.count() - limit).bright_black()
        );
    }
}

/// Print the frame, guessed letters and phase
pub fn print_status(session: &Session<'_>) {
    let state = session.state();
    println!("\n  {}", spaced_frame(state.frame()).bright_white().bold());
    println!("  {}", position_ruler(state.length()).bright_black());
    println!(
        "\n  Accepted: {}   Rejected: {}",
        display_letters(&state.accepted().to_string()).green(),
        display_letters(&state.rejected().to_string()).red()
    );
    println!(
        "  Phase: {}   Candidates: {}",
        phase_label(session.phase()),
        session.count()
    );
}

/// Print the result of an accept, reject, set or undo
pub fn print_transition(transition: &Transition) {
    println!(
        "  Candidates: {} → {}",
        transition.candidates_before, transition.candidates_after
    );
    match transition.phase {
        Phase::Solved => println!("\n{}", "🎉 Solved!".bright_green().bold()),
        Phase::Exhausted => println!(
            "\n{}",
            "❌ No dictionary word fits. Check your input or type 'undo'."
                .red()
                .bold()
        ),
        Phase::Initialized | Phase::InProgress => {}
    }
}

pub fn print_help() {
    println!("\nCommands:");
    for (usage, description) in HELP {
        println!("  {:<26} {}", usage.bright_cyan(), description);
    }
}

/// Print the result of a one-shot analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ANALYSIS:".bright_cyan().bold(),
        spaced_frame(&result.frame).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n  Rejected: {}   Phase: {}",
        display_letters(&result.rejected.to_string()).red(),
        phase_label(result.phase)
    );

    print_stats(&result.stats, Some(result.limit));

    if !result.sample.is_empty() {
        println!("\nCandidates ({}):", result.stats.candidates());
        for word in &result.sample {
            println!("  • {word}");
        }
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Words played:     {}", result.total_words);
    println!(
        "   Won:              {} ({:.1}%) within {} wrong guesses",
        result.won.to_string().green().bold(),
        result.win_rate() * 100.0,
        result.max_wrong
    );
    println!(
        "   Average wrong:    {}",
        format!("{:.2}", result.average_wrong).bright_yellow().bold()
    );
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Wrong guesses:".bright_cyan().bold());
    for (&wrong, &count) in &result.wrong_distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = if wrong > result.max_wrong {
            "█".repeat(bar_width).red()
        } else {
            "█".repeat(bar_width).green()
        };
        println!(
            "   {wrong:>2}: {bar}{} {count:4} ({pct:5.1}%)",
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
    }

    if !result.hardest.is_empty() {
        println!("\n🔥 {}", "Hardest words:".bright_cyan().bold());
        for (word, wrong) in &result.hardest {
            println!("   {word:<12} {wrong} wrong");
        }
    }
}

fn display_letters(letters: &str) -> String {
    if letters.is_empty() {
        "-".to_string()
    } else {
        letters.to_string()
    }
}

fn phase_label(phase: Phase) -> colored::ColoredString {
    let label = phase.to_string();
    match phase {
        Phase::Initialized => label.normal(),
        Phase::InProgress => label.cyan(),
        Phase::Solved => label.green().bold(),
        Phase::Exhausted => label.red().bold(),
    }
}
