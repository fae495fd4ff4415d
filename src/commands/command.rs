//! Text commands driving a session
//!
//! Both the line-oriented mode and the TUI read the same command language:
//!
//! ```text
//! accept e 2 5      reveal 'e' at positions 2 and 5 (also: a, hit)
//! reject x          'x' is not in the word        (also: r, miss)
//! set a__le zq      frame plus rejected letters   ('-' for none)
//! stats [n]         ranked letter probabilities
//! words [n]         remaining candidates
//! count             number of candidates
//! status            current frame and guesses
//! undo | new | help | quit
//! ```

use crate::core::{Frame, Letter, LetterSet, PuzzleError, PuzzleResult};
use crate::solver::{Session, Transition};
use thiserror::Error;

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Accept { letter: Letter, positions: Vec<usize> },
    Reject(Letter),
    Set { frame: Frame, rejected: LetterSet },
    Stats { limit: Option<usize> },
    Words { limit: Option<usize> },
    Count,
    Status,
    Undo,
    New,
    Help,
    Quit,
}

/// Errors turning a line of input into a `Command`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("'{0}' is not a position")]
    InvalidPosition(String),
    #[error("'{0}' is not a count")]
    InvalidCount(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(CommandError::Empty)?.to_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match name.as_str() {
            "accept" | "a" | "hit" => {
                let (letter, rest) = letter_arg(&args, "accept")?;
                let positions = rest
                    .iter()
                    .flat_map(|arg| arg.split(','))
                    .filter(|p| !p.is_empty())
                    .map(|p| {
                        p.parse::<usize>()
                            .map_err(|_| CommandError::InvalidPosition(p.to_string()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                if positions.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "accept",
                        argument: "at least one position",
                    });
                }
                Self::Accept { letter, positions }
            }
            "reject" | "r" | "miss" => {
                let (letter, rest) = letter_arg(&args, "reject")?;
                no_more(rest)?;
                Self::Reject(letter)
            }
            "set" => {
                let frame_text = args.first().ok_or(CommandError::MissingArgument {
                    command: "set",
                    argument: "a frame like a__le",
                })?;
                let frame = Frame::parse(frame_text)?;
                let rejected = match args.get(1) {
                    None | Some(&"-") => LetterSet::EMPTY,
                    Some(text) => parse_letters(text)?,
                };
                no_more(args.get(2..).unwrap_or_default())?;
                Self::Set { frame, rejected }
            }
            "stats" | "s" => Self::Stats {
                limit: limit_arg(&args)?,
            },
            "words" | "w" | "list" => Self::Words {
                limit: limit_arg(&args)?,
            },
            "count" | "c" => Self::Count,
            "status" | "frame" => Self::Status,
            "undo" | "u" => Self::Undo,
            "new" | "n" | "reset" => Self::New,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn letter_arg<'s, 'a>(
    args: &'s [&'a str],
    command: &'static str,
) -> Result<(Letter, &'s [&'a str]), CommandError> {
    let (first, rest) = args.split_first().ok_or(CommandError::MissingArgument {
        command,
        argument: "a letter",
    })?;
    Ok((first.parse()?, rest))
}

fn limit_arg(args: &[&str]) -> Result<Option<usize>, CommandError> {
    no_more(args.get(1..).unwrap_or_default())?;
    args.first()
        .map(|arg| {
            arg.parse::<usize>()
                .map_err(|_| CommandError::InvalidCount((*arg).to_string()))
        })
        .transpose()
}

fn no_more(rest: &[&str]) -> Result<(), CommandError> {
    match rest.first() {
        Some(extra) => Err(CommandError::UnexpectedArgument((*extra).to_string())),
        None => Ok(()),
    }
}

/// Parse a run of letters such as `"zq"` or `"z,q"` into a set
///
/// # Errors
/// Returns `PuzzleError::InvalidLetter` for any non-letter other than `,`.
pub fn parse_letters(text: &str) -> PuzzleResult<LetterSet> {
    text.chars()
        .filter(|&ch| ch != ',')
        .map(Letter::new)
        .collect()
}

/// What running a command produced
///
/// Queries carry no data; the caller reads what it needs from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Changed(Transition),
    Stats { limit: Option<usize> },
    Words { limit: Option<usize> },
    Count(usize),
    Status,
    Reset,
    Help,
    Quit,
}

/// Apply a command to a session
///
/// # Errors
/// Returns the session's error for an invalid state change; the session is
/// unchanged in that case.
pub fn execute(session: &mut Session<'_>, command: Command) -> PuzzleResult<Response> {
    let response = match command {
        Command::Accept { letter, positions } => {
            Response::Changed(session.accept(letter, &positions)?)
        }
        Command::Reject(letter) => Response::Changed(session.reject(letter)?),
        Command::Set { frame, rejected } => {
            Response::Changed(session.set_state(frame, rejected)?)
        }
        Command::Undo => Response::Changed(session.undo()?),
        Command::New => {
            session.reset();
            Response::Reset
        }
        Command::Stats { limit } => Response::Stats { limit },
        Command::Words { limit } => Response::Words { limit },
        Command::Count => Response::Count(session.count()),
        Command::Status => Response::Status,
        Command::Help => Response::Help,
        Command::Quit => Response::Quit,
    };
    Ok(response)
}

/// One-line summary of every command, for help screens
pub const HELP: &[(&str, &str)] = &[
    ("accept <letter> <pos>...", "letter is at these 1-based positions"),
    ("reject <letter>", "letter is not in the word"),
    ("set <frame> [rejected]", "restore a puzzle, e.g. set a__le zq"),
    ("stats [n]", "letters ranked by probability"),
    ("words [n]", "remaining candidate words"),
    ("count", "number of candidates"),
    ("status", "current frame and guesses"),
    ("undo", "take back the last change"),
    ("new", "start over"),
    ("quit", "leave"),
];
