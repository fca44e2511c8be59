//! Board positions on the 3x3 grid.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, including the empty one.
pub const TILE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A cell of the puzzle board (0-8 in row-major order).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; TILE_COUNT] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Row of this position (0-2, top to bottom).
    pub fn row(self) -> usize {
        self.index() / BOARD_SIZE
    }

    /// Column of this position (0-2, left to right).
    pub fn col(self) -> usize {
        self.index() % BOARD_SIZE
    }

    /// Creates position from row and column coordinates.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Self::from_index(row * BOARD_SIZE + col)
    }

    /// In-bounds orthogonal neighbors, probed in up/down/left/right order.
    ///
    /// Corners have 2 neighbors, edges 3, the center 4.
    #[instrument]
    pub fn neighbors(self) -> Vec<Position> {
        let row = self.row();
        let col = self.col();
        let mut neighbors = Vec::with_capacity(4);
        if row > 0
            && let Some(up) = Self::from_row_col(row - 1, col)
        {
            neighbors.push(up);
        }
        if let Some(down) = Self::from_row_col(row + 1, col) {
            neighbors.push(down);
        }
        if col > 0
            && let Some(left) = Self::from_row_col(row, col - 1)
        {
            neighbors.push(left);
        }
        if let Some(right) = Self::from_row_col(row, col + 1) {
            neighbors.push(right);
        }
        neighbors
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
