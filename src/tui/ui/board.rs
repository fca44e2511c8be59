//! Puzzle board rendering and mouse geometry.

use super::super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use slide_puzzle_core::{Position, TILE_COUNT, Tile};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Screen rectangles of the nine board cells, for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardLayout {
    cells: [Rect; TILE_COUNT],
}

impl BoardLayout {
    /// Returns the board cell under the given screen coordinates.
    pub fn hit(&self, column: u16, row: u16) -> Option<Position> {
        self.cells.iter().enumerate().find_map(|(index, cell)| {
            let inside = column >= cell.x
                && column < cell.x + cell.width
                && row >= cell.y
                && row < cell.y + cell.height;
            if inside { Position::from_index(index) } else { None }
        })
    }
}

/// Renders the 3x3 board centered in `area` and returns its geometry.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) -> BoardLayout {
    let board_area = center_rect(area, 3 * CELL_WIDTH, 3 * CELL_HEIGHT);
    let movable = app.puzzle().movable_positions();
    let mut layout = BoardLayout::default();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(*row_area);

        for (col_index, cell_area) in cols.iter().enumerate() {
            if let Some(position) = Position::from_row_col(row_index, col_index) {
                layout.cells[position.index()] = *cell_area;
                render_cell(f, *cell_area, app, position, &movable);
            }
        }
    }

    layout
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, position: Position, movable: &[Position]) {
    let tile = app.puzzle().state().board().get(position);
    let at_cursor = position == app.cursor();

    match tile {
        Tile::Empty => {
            // The gap: no tile face, only the cursor marker if present.
            if at_cursor {
                let marker = Paragraph::new("·")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center)
                    .block(Block::default());
                f.render_widget(marker, area);
            }
        }
        Tile::Piece(home) => {
            let caption = if app.show_labels() {
                tile.label()
            } else {
                String::new()
            };

            let mut face = Style::default()
                .fg(piece_color(home))
                .add_modifier(Modifier::BOLD);
            if at_cursor {
                face = face.add_modifier(Modifier::REVERSED);
            }

            // Bright border marks the tiles that can slide right now.
            let border = if movable.contains(&position) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let paragraph = Paragraph::new(caption)
                .style(face)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(border));
            f.render_widget(paragraph, area);
        }
    }
}

/// Color hint at the tile's home row, standing in for the picture slice.
fn piece_color(home: Position) -> Color {
    match home.row() {
        0 => Color::Cyan,
        1 => Color::Blue,
        _ => Color::Magenta,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
