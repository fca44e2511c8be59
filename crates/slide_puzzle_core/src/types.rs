//! Core domain types for the sliding puzzle.

use crate::position::{Position, TILE_COUNT};
use serde::{Deserialize, Serialize};

/// A tile occupying one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// The empty slot tiles slide into.
    Empty,
    /// A picture piece, tagged with its home cell.
    Piece(Position),
}

impl Tile {
    /// Numeric identifier: 0 for the empty tile, the home index otherwise.
    pub fn id(self) -> u8 {
        match self {
            Tile::Empty => 0,
            Tile::Piece(home) => home.index() as u8,
        }
    }

    /// Creates a tile from its identifier (0 = empty, 1-8 = piece homes).
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Tile::Empty),
            1..=8 => Position::from_index(id as usize).map(Tile::Piece),
            _ => None,
        }
    }

    /// The cell this tile occupies when the puzzle is solved.
    pub fn home(self) -> Position {
        match self {
            Tile::Empty => Position::TopLeft,
            Tile::Piece(home) => home,
        }
    }

    /// Checks if this is the empty tile.
    pub fn is_empty(self) -> bool {
        matches!(self, Tile::Empty)
    }

    /// Caption shown on the tile face (identifier + 1, numbering the
    /// picture slices); the empty tile has no caption.
    pub fn label(self) -> String {
        match self {
            Tile::Empty => String::new(),
            Tile::Piece(home) => (home.index() + 1).to_string(),
        }
    }
}

/// 3x3 puzzle board.
///
/// Invariant: the tiles are always a permutation of the 9 identifiers,
/// with exactly one empty slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Tiles in row-major order (0-8).
    tiles: [Tile; TILE_COUNT],
}

impl Board {
    /// Creates the solved arrangement: every tile on its home cell,
    /// the empty slot top-left.
    pub fn solved() -> Self {
        let mut tiles = [Tile::Empty; TILE_COUNT];
        for (index, slot) in tiles.iter_mut().enumerate().skip(1) {
            if let Some(home) = Position::from_index(index) {
                *slot = Tile::Piece(home);
            }
        }
        Self { tiles }
    }

    /// Gets the tile at the given position.
    pub fn get(&self, pos: Position) -> Tile {
        self.tiles[pos.index()]
    }

    /// Overwrites the tile at the given position (test and invariant
    /// plumbing; engine mutations go through `swap`).
    pub(crate) fn set(&mut self, pos: Position, tile: Tile) {
        self.tiles[pos.index()] = tile;
    }

    /// Swaps the tiles at two positions.
    pub(crate) fn swap(&mut self, a: Position, b: Position) {
        self.tiles.swap(a.index(), b.index());
    }

    /// Position of the empty slot.
    pub fn empty_position(&self) -> Position {
        self.tiles
            .iter()
            .position(|tile| tile.is_empty())
            .and_then(Position::from_index)
            .expect("board always contains the empty tile")
    }

    /// Returns all tiles as a slice.
    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    /// Tile identifiers in row-major board order.
    pub fn as_ids(&self) -> [u8; TILE_COUNT] {
        let mut ids = [0u8; TILE_COUNT];
        for (slot, tile) in ids.iter_mut().zip(self.tiles.iter()) {
            *slot = tile.id();
        }
        ids
    }

    /// Builds a board from identifiers; `None` unless they form a
    /// permutation of 0-8.
    pub fn from_ids(ids: [u8; TILE_COUNT]) -> Option<Self> {
        let mut seen = [false; TILE_COUNT];
        let mut tiles = [Tile::Empty; TILE_COUNT];
        for (slot, &id) in tiles.iter_mut().zip(ids.iter()) {
            let tile = Tile::from_id(id)?;
            if seen[id as usize] {
                return None;
            }
            seen[id as usize] = true;
            *slot = tile;
        }
        Some(Self { tiles })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

/// Whether the puzzle is accepting moves.
///
/// Status is event-driven, not derived from the board: `new`, `reset`,
/// and `shuffle` always yield `Active` (a freshly reset board looks
/// solved but accepts moves), while `Solved` is entered only when an
/// accepted move completes the picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleStatus {
    /// Puzzle accepts move requests.
    Active,
    /// A move completed the picture; requests are ignored until a reset
    /// or shuffle.
    Solved,
}

/// Complete puzzle state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    /// The board.
    board: Board,
    /// Accepted moves since the last reset or shuffle.
    move_count: u32,
    /// Puzzle status.
    status: PuzzleStatus,
}

impl PuzzleState {
    /// Creates a fresh state: solved board, zero moves, active.
    pub fn new() -> Self {
        Self {
            board: Board::solved(),
            move_count: 0,
            status: PuzzleStatus::Active,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of accepted moves.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the puzzle status.
    pub fn status(&self) -> PuzzleStatus {
        self.status
    }

    /// Applies an accepted slide (unchecked - use `Puzzle::try_slide`
    /// for validation).
    pub(crate) fn apply_slide(&mut self, empty: Position, target: Position) {
        self.board.swap(empty, target);
        self.move_count += 1;
    }

    /// Sets the puzzle status.
    pub(crate) fn set_status(&mut self, status: PuzzleStatus) {
        self.status = status;
    }

    /// Replaces the board wholesale, zeroing the move counter and
    /// returning to `Active`.
    pub(crate) fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.move_count = 0;
        self.status = PuzzleStatus::Active;
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot handed across the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSnapshot {
    /// Tile identifiers in row-major board order.
    pub tiles: [u8; TILE_COUNT],
    /// Accepted moves since the last reset or shuffle.
    pub move_count: u32,
    /// True once a move has completed the picture.
    pub solved: bool,
}
