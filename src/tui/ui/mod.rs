//! UI rendering using ratatui.

mod board;

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::BoardLayout;

/// Draws the main UI and returns the board geometry for mouse
/// hit-testing.
pub fn draw(f: &mut Frame, app: &App) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Slide Puzzle")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let layout = board::render_board(f, chunks[1], app);

    let snapshot = app.snapshot();
    let status_line = format!("Moves: {}    {}", snapshot.move_count, app.status_message());
    let status = Paragraph::new(status_line)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help =
        Paragraph::new("Arrows: cursor | Enter: slide | 1-9: slide cell | S: Shuffle | R: Reset | Q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);

    layout
}
