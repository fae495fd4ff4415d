//! TUI application state and logic

use crate::commands::command::HELP;
use crate::commands::{Command, Response, execute};
use crate::solver::{Phase, Session, Transition};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute as term_execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Show the candidate list instead of the letter ranking
    pub show_words: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            show_words: false,
            should_quit: false,
        };
        app.add_message(
            "Type a command and press Enter, e.g. 'accept e 2 5' or 'reject x'.",
            MessageStyle::Info,
        );
        app.add_message(
            "Tab fills in the best letter. 'help' lists every command.",
            MessageStyle::Info,
        );
        app
    }

    /// Parse and run the current input line
    pub fn submit(&mut self) {
        let line = std::mem::take(&mut self.input_buffer);
        if line.trim().is_empty() {
            return;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match execute(&mut self.session, command) {
            Ok(response) => self.handle_response(response),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn handle_response(&mut self, response: Response) {
        match response {
            Response::Changed(transition) => self.report_transition(transition),
            Response::Reset => {
                self.show_words = false;
                self.add_message("New puzzle started!", MessageStyle::Info);
            }
            Response::Stats { .. } => self.show_words = false,
            Response::Words { .. } => self.show_words = true,
            Response::Count(count) => {
                self.add_message(&format!("{count} candidates"), MessageStyle::Info);
            }
            Response::Status => {
                let state = self.session.state();
                let text = format!(
                    "{} | accepted: {} | rejected: {}",
                    state.frame(),
                    state.accepted(),
                    state.rejected()
                );
                self.add_message(&text, MessageStyle::Info);
            }
            Response::Help => {
                let usage: Vec<&str> = HELP.iter().map(|&(usage, _)| usage).collect();
                self.add_message(&usage.join(" | "), MessageStyle::Info);
            }
            Response::Quit => self.should_quit = true,
        }
    }

    fn report_transition(&mut self, transition: Transition) {
        match transition.phase {
            Phase::Solved => {
                let text = format!("🎉 Solved: {}", self.session.frame());
                self.add_message(&text, MessageStyle::Success);
                self.add_message("Type 'new' for another puzzle or 'quit'.", MessageStyle::Info);
            }
            Phase::Exhausted => self.add_message(
                "No dictionary word fits. Type 'undo' to go back.",
                MessageStyle::Error,
            ),
            Phase::Initialized | Phase::InProgress => self.add_message(
                &format!(
                    "{} → {} candidates",
                    transition.candidates_before, transition.candidates_after
                ),
                MessageStyle::Info,
            ),
        }
    }

    /// Replace the input line with a guess of the best letter
    pub fn fill_suggestion(&mut self) {
        if self.session.phase().is_terminal() {
            return;
        }
        if let Some(best) = self.session.stats().best() {
            self.input_buffer = format!("accept {} ", best.letter);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    term_execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    term_execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    if app.input_buffer.is_empty() {
                        app.should_quit = true;
                    } else {
                        app.input_buffer.clear();
                    }
                }
                KeyCode::Tab => app.fill_suggestion(),
                KeyCode::Char(c) => app.input_buffer.push(c),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SessionConfig;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn submit_runs_commands() {
        let corpus = words_from_slice(&["abc", "abd", "xyz"]);
        let mut app = App::new(Session::new(&corpus, SessionConfig::new(3)).unwrap());

        app.input_buffer = "reject x".to_string();
        app.submit();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.count(), 2);
        assert_eq!(app.messages.last().unwrap().text, "3 → 2 candidates");
    }

    #[test]
    fn errors_leave_session_unchanged() {
        let corpus = words_from_slice(&["abc", "abd"]);
        let mut app = App::new(Session::new(&corpus, SessionConfig::new(3)).unwrap());

        app.input_buffer = "accept a 9".to_string();
        app.submit();

        assert_eq!(app.session.count(), 2);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn tab_suggests_best_letter() {
        let corpus = words_from_slice(&["abc", "abd", "xyz"]);
        let mut app = App::new(Session::new(&corpus, SessionConfig::new(3)).unwrap());

        app.fill_suggestion();
        assert_eq!(app.input_buffer, "accept a ");
    }

    #[test]
    fn solving_reports_success() {
        let corpus = words_from_slice(&["ab"]);
        let mut app = App::new(Session::new(&corpus, SessionConfig::new(2)).unwrap());

        app.input_buffer = "set ab".to_string();
        app.submit();

        assert_eq!(app.session.phase(), Phase::Solved);
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success)
        );
    }

    #[test]
    fn messages_are_capped() {
        let corpus = words_from_slice(&["abc"]);
        let mut app = App::new(Session::new(&corpus, SessionConfig::new(3)).unwrap());
        for _ in 0..10 {
            app.input_buffer = "count".to_string();
            app.submit();
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
    }

    #[test]
    fn quit_and_words_toggle() {
        let corpus = words_from_slice(&["abc"]);
        let mut app = App::new(Session::new(&corpus, SessionConfig::new(3)).unwrap());

        app.input_buffer = "words".to_string();
        app.submit();
        assert!(app.show_words);

        app.input_buffer = "quit".to_string();
        app.submit();
        assert!(app.should_quit);
    }
}
