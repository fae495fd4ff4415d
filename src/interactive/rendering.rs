//! TUI rendering with ratatui
//!
//! Frame, letter ranking and candidate views for the Hangman assistant.

use super::app::{App, MessageStyle};
use crate::output::formatters::{format_probability, position_ruler, probability_bar, spaced_frame};
use crate::solver::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN SOLVER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(5)])
        .split(area);

    render_frame(f, app, chunks[0]);
    if app.show_words {
        render_candidates(f, app, chunks[1]);
    } else {
        render_ranking(f, app, chunks[1]);
    }
}

fn render_frame(f: &mut Frame, app: &App, area: Rect) {
    let state = app.session.state();
    let frame_color = match app.session.phase() {
        Phase::Solved => Color::Green,
        Phase::Exhausted => Color::Red,
        Phase::Initialized | Phase::InProgress => Color::Yellow,
    };

    let content = vec![
        Line::from(Span::styled(
            spaced_frame(state.frame()),
            Style::default()
                .fg(frame_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            position_ruler(state.length()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(format!(
            "{} of {} letters revealed",
            state.length() - state.frame().unrevealed(),
            state.length()
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Puzzle ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_ranking(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let rows = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = if stats.is_undefined() {
        vec![ListItem::new("No candidates: probabilities are undefined").style(
            Style::default().fg(Color::Red),
        )]
    } else {
        stats
            .ranked()
            .iter()
            .take(rows)
            .enumerate()
            .map(|(rank, stat)| {
                let letter_style = if rank == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(stat.letter.to_string().to_uppercase(), letter_style),
                    Span::raw(" "),
                    Span::styled(
                        probability_bar(stat.probability, 20),
                        Style::default().fg(Color::Green),
                    ),
                    Span::raw(format!(
                        " {} {:>5} words",
                        format_probability(stat.probability),
                        stat.word_occurrences
                    )),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Letter Probabilities ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();
    let rows = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = if candidates.is_empty() {
        vec![ListItem::new("No candidates remain").style(Style::default().fg(Color::Red))]
    } else {
        candidates
            .iter()
            .take(rows)
            .map(|word| ListItem::new(format!("  {word}")))
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Candidates ({}) ", candidates.count()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_best_letter(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_best_letter(f: &mut Frame, app: &App, area: Rect) {
    let best = app
        .session
        .stats()
        .best()
        .filter(|_| !app.session.phase().is_terminal());

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Best Guess ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan));

    let gauge = match best {
        Some(stat) => {
            let probability = stat.probability.unwrap_or(0.0);
            gauge.ratio(probability.clamp(0.0, 1.0)).label(format!(
                "{} ({})",
                stat.letter.to_string().to_uppercase(),
                format_probability(stat.probability)
            ))
        }
        None => gauge.ratio(0.0).label("-"),
    };

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(format!("> {}", app.input_buffer))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Command | Enter: run  Tab: best letter  Esc: clear/quit ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let state = app.session.state();
    let or_dash = |s: String| if s.is_empty() { "-".to_string() } else { s };

    let status = Paragraph::new(format!(
        "Phase: {} | Candidates: {} | Accepted: {} | Rejected: {}",
        app.session.phase(),
        app.session.count(),
        or_dash(state.accepted().to_string()),
        or_dash(state.rejected().to_string()),
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));

    f.render_widget(status, area);
}
