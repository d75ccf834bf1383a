//! TUI rendering with ratatui
//!
//! Board, color guide, messages, and session statistics.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CODE_LENGTH, Peg, Score};
use crate::game::{MAX_ATTEMPTS, RoundState};
use crate::output::DisplayMode;
use crate::output::display::VERSION;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14), // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Terminal color for a peg
const fn peg_color(peg: Peg) -> Color {
    match peg {
        Peg::Red => Color::Red,
        Peg::Blue => Color::Blue,
        Peg::Green => Color::Green,
        Peg::Yellow => Color::Yellow,
        Peg::Purple => Color::Magenta,
        Peg::Orange => Color::Indexed(208),
        Peg::White => Color::White,
        Peg::Cyan => Color::Cyan,
    }
}

fn peg_span(peg: Peg, mode: DisplayMode) -> Span<'static> {
    match mode {
        DisplayMode::Blocks => Span::styled("  ", Style::default().bg(peg_color(peg))),
        DisplayMode::Numbers => Span::styled(
            format!("{:^2}", peg.digit()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    }
}

fn peg_spans(pegs: &[Peg], mode: DisplayMode) -> Vec<Span<'static>> {
    pegs.iter()
        .flat_map(|&peg| [peg_span(peg, mode), Span::raw(" ")])
        .collect()
}

fn hint_spans(score: Score) -> Vec<Span<'static>> {
    let exact = (0..score.exact).map(|_| Span::styled("+ ", Style::default().fg(Color::Green)));
    let color_only =
        (0..score.color_only).map(|_| Span::styled("- ", Style::default().fg(Color::Red)));
    exact.chain(color_only).collect()
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(format!("🎯 MASTERMIND v{VERSION}"))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let history = round.history();

    let mut items: Vec<ListItem> = (0..MAX_ATTEMPTS)
        .map(|slot| {
            let mut spans = vec![Span::styled(
                format!("{:2}   ", slot + 1),
                Style::default().fg(Color::DarkGray),
            )];
            if let Some(turn) = history.get(slot) {
                spans.extend(peg_spans(turn.guess.pegs(), app.display));
                spans.push(Span::raw("   "));
                spans.extend(hint_spans(turn.score));
            } else if slot == history.len() && !round.is_finished() {
                spans.push(Span::styled(
                    "·  ".repeat(CODE_LENGTH),
                    Style::default().fg(Color::Yellow),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    items.push(ListItem::new(""));
    let secret_line = match round.secret() {
        Some(secret) => {
            let mut spans = vec![Span::raw("Code: ")];
            spans.extend(peg_spans(secret.pegs(), app.display));
            Line::from(spans)
        }
        None => Line::from(format!("Code: {}", "?  ".repeat(CODE_LENGTH))),
    };
    items.push(ListItem::new(secret_line));

    let border_color = match round.state() {
        RoundState::Won => Color::Green,
        RoundState::Lost | RoundState::Aborted => Color::Red,
        RoundState::InProgress => Color::White,
    };
    let board = List::new(items).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(border_color)),
    );

    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Color guide
            Constraint::Min(4), // Messages
            Constraint::Length(5), // Statistics
        ])
        .split(area);

    render_color_guide(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_statistics(f, app, chunks[2]);
}

fn render_color_guide(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = Peg::ALL
        .chunks(2)
        .map(|pair| {
            let mut spans = Vec::new();
            for &peg in pair {
                spans.push(peg_span(peg, app.display));
                spans.push(Span::raw(format!(" {}: {:<8}", peg.digit(), peg.name())));
            }
            Line::from(spans)
        })
        .collect();

    let guide = Paragraph::new(lines).block(
        Block::default()
            .title(" Color Guide ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(guide, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
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

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let average = stats
        .average_winning_attempts()
        .map_or_else(|| "-".to_string(), |avg| format!("{avg:.2}"));

    let content = vec![
        Line::from(format!(
            "Rounds: {}  Won: {}  Lost: {}",
            stats.rounds_played, stats.rounds_won, stats.rounds_lost
        )),
        Line::from(format!("Win rate: {:.0}%", stats.win_rate())),
        Line::from(format!("Average attempts to win: {average}")),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => {
            let pegs: Vec<Peg> = app
                .input_buffer
                .chars()
                .filter_map(Peg::from_digit)
                .collect();
            let mut spans = vec![Span::raw(format!("{:<6}", app.input_buffer))];
            spans.extend(peg_spans(&pegs, app.display));
            (
                " Your Guess (1-8) | Enter: submit | r: display | q: quit ",
                Line::from(spans),
                Color::Yellow,
            )
        }
        InputMode::RoundOver => (
            " Round Over | y: new round | n: quit ",
            Line::from("Play again? (y/n)"),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.round();
    let text = format!(
        "Attempt {}/{MAX_ATTEMPTS} | {} left | Display: {} | Ctrl-C: quit",
        (round.attempts() + 1).min(MAX_ATTEMPTS),
        round.attempts_remaining(),
        app.display.label()
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
