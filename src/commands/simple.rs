//! Simple interactive CLI mode
//!
//! Line-oriented assistant without TUI

use super::command::{Command, Response, execute};
use crate::output::{print_help, print_stats, print_status, print_transition, print_words};
use crate::solver::Session;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// Reads one command per line until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(session: &mut Session<'_>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Hangman Solver - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Word length {} with {} dictionary candidates.",
        session.length(),
        session.count()
    );
    println!("Guess a letter, then tell me where it landed:\n");
    println!("  accept e 2 5   'e' is at positions 2 and 5");
    println!("  reject x       'x' is not in the word");
    println!("  help           every command\n");

    print_status(session);
    print_suggestion(session);

    loop {
        let Some(line) = get_user_input("hangman")? else {
            println!();
            break;
        };
        if line.is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{} {e}", "✗".red());
                continue;
            }
        };

        match execute(session, command) {
            Ok(Response::Quit) => break,
            Ok(Response::Changed(transition)) => {
                print_transition(&transition);
                print_status(session);
                print_suggestion(session);
            }
            Ok(Response::Reset) => {
                println!("\n🔄 New puzzle started!");
                print_status(session);
                print_suggestion(session);
            }
            Ok(Response::Stats { limit }) => print_stats(session.stats(), limit),
            Ok(Response::Words { limit }) => print_words(session.candidates(), limit),
            Ok(Response::Count(count)) => println!("{count} candidates"),
            Ok(Response::Status) => print_status(session),
            Ok(Response::Help) => print_help(),
            Err(e) => println!("{} {e}", "✗".red()),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn print_suggestion(session: &Session<'_>) {
    if session.phase().is_terminal() {
        return;
    }
    if let Some(best) = session.stats().best() {
        println!(
            "\n💡 Suggested letter: {} ({} of {} candidates contain it)",
            best.letter.to_string().to_uppercase().bright_yellow().bold(),
            best.word_occurrences,
            session.count()
        );
    }
}

/// Read a trimmed line; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}> ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
