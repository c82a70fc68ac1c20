//! Stateless UI rendering.
//!
//! Everything drawn here comes from [`App`] and the engine snapshot it
//! holds; rendering never changes state.

use noughts_engine::{EngineSnapshot, Player, Position, RoundOutcome, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, COMPUTER, HUMAN, Phase, Screen};
use crate::config::Settings;

const TITLE: &str = "Tic-Tac-Toe Challenge";

/// Renders the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Splash => draw_splash(frame),
        Screen::Playing | Screen::ConfirmQuit => draw_game(frame, app),
    }
}

fn draw_splash(frame: &mut Frame) {
    let area = center_rect(frame.area(), 40, 7);
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("You against the computer."),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to start",
            Style::default().fg(Color::Yellow),
        )),
    ];
    let splash = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(splash, area);
}

fn draw_game(frame: &mut Frame, app: &App) {
    let snapshot = app.engine().snapshot();
    let messages = message_lines(app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Title
            Constraint::Length(5),                         // Help + scores
            Constraint::Min(7),                            // Board
            Constraint::Length(messages.len() as u16 + 2), // Messages
        ])
        .split(frame.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);
    draw_help(frame, top[0]);
    draw_scores(frame, top[1], app.settings(), &snapshot);

    draw_board(frame, chunks[2], app, &snapshot);

    let messages = Paragraph::new(messages).block(Block::default().borders(Borders::TOP));
    frame.render_widget(messages, chunks[3]);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::from("n = number view"),
        Line::from("m = enter a move"),
        Line::from("q = quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL).title("Keys"));
    frame.render_widget(help, area);
}

fn draw_scores(frame: &mut Frame, area: Rect, settings: &Settings, snapshot: &EngineSnapshot) {
    let scores = snapshot.scores();
    let scoreboard = Paragraph::new(vec![
        Line::from(format!(
            "\"{}\" (You)       = {}",
            settings.player_one_symbol(),
            scores.wins(HUMAN)
        )),
        Line::from(format!(
            "\"{}\" (Computer)  = {}",
            settings.player_two_symbol(),
            scores.wins(COMPUTER)
        )),
        Line::from(format!("Draw            = {}", scores.draws())),
    ])
    .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(scoreboard, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, snapshot: &EngineSnapshot) {
    let board_area = center_rect(area, 11, 5);
    let separator = Line::from(Span::styled(
        "---+---+---",
        Style::default().fg(Color::DarkGray),
    ));

    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            let Some(pos) = Position::from_row_col(row, col) else {
                continue;
            };
            spans.push(Span::styled(
                cell_text(app, snapshot, pos),
                cell_style(app, snapshot, pos),
            ));
            if col < 2 {
                spans.push(Span::styled("|", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
        if row < 2 {
            lines.push(separator.clone());
        }
    }

    frame.render_widget(Paragraph::new(lines), board_area);
}

/// Three-column text for a cell: its number in number view, else its marker.
fn cell_text(app: &App, snapshot: &EngineSnapshot, pos: Position) -> String {
    if *app.number_view() {
        return format!(" {} ", pos.number());
    }
    format!(" {} ", symbol(app.settings(), snapshot.cell(pos).square()))
}

fn symbol(settings: &Settings, square: Square) -> char {
    match square {
        Square::Empty => *settings.empty_symbol(),
        Square::Occupied(Player::PlayerOne) => *settings.player_one_symbol(),
        Square::Occupied(Player::PlayerTwo) => *settings.player_two_symbol(),
    }
}

fn cell_style(app: &App, snapshot: &EngineSnapshot, pos: Position) -> Style {
    let cell = snapshot.cell(pos);

    let mut style = if snapshot.is_winning_cell(pos) {
        let color = match snapshot.outcome().winner() {
            Some(HUMAN) => Color::Green,
            _ => Color::Magenta,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else if cell.was_last_move() && !*app.number_view() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        match cell.square() {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Player::PlayerOne) => Style::default().fg(Color::Blue),
            Square::Occupied(Player::PlayerTwo) => Style::default().fg(Color::Red),
        }
    };

    if app.phase() == Phase::HumanTurn && *app.cursor() == pos {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

/// Errors, then the prompt or notice for the current phase.
fn message_lines(app: &App) -> Vec<Line<'static>> {
    let error_style = Style::default().fg(Color::Red).bg(Color::White);
    let mut lines: Vec<Line<'static>> = app
        .errors()
        .iter()
        .rev()
        .map(|e| Line::from(Span::styled(e.clone(), error_style)))
        .collect();

    if app.screen() == &Screen::ConfirmQuit {
        lines.push(Line::from(Span::styled(
            "Really quit? (y/n)",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        return lines;
    }

    let settings = app.settings();
    match app.phase() {
        Phase::ChoosingFirstPlayer => {
            lines.push(Line::from("Who goes first? (1) You, (2) Computer:"));
        }
        Phase::HumanTurn => {
            lines.push(Line::from(format!(
                "Turn: Player \"{}\"!",
                settings.player_one_symbol()
            )));
            match app.entry() {
                Some(buffer) => lines.push(Line::from(format!(
                    "Enter an integer (1-9): {}_",
                    buffer
                ))),
                None => lines.push(Line::from(
                    "(press \"m\" to enter a move, or 1-9, or arrows and Enter)",
                )),
            }
        }
        Phase::ComputerTurn => {
            lines.push(Line::from(format!(
                "Turn: Player \"{}\"! (thinking...)",
                settings.player_two_symbol()
            )));
        }
        Phase::RoundOver(outcome) => {
            let (text, color) = match outcome {
                RoundOutcome::Won(HUMAN) => ("You win!".to_string(), Color::Green),
                RoundOutcome::Won(COMPUTER) => ("The computer wins.".to_string(), Color::Magenta),
                other => (format!("{}!", other), Color::Yellow),
            };
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from("Press \"r\" or Enter for a new round."));
        }
    }
    lines
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
