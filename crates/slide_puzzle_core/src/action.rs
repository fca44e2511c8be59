//! First-class move requests and outcomes.
//!
//! Slides are domain events, not side effects. They represent the
//! player's intent and can be validated independently of execution.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A request to slide the tile at `target` into the empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slide {
    /// The cell whose tile should slide.
    pub target: Position,
}

impl Slide {
    /// Creates a new slide request.
    pub fn new(target: Position) -> Self {
        Self { target }
    }

    /// Returns the targeted cell.
    pub fn target(&self) -> Position {
        self.target
    }
}

impl std::fmt::Display for Slide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slide {}", self.target.label())
    }
}

/// Outcome of a move request: each request yields exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideOutcome {
    /// The tile slid into the empty cell.
    Moved,
    /// The tile slid in and completed the picture.
    Solved,
    /// The request was ignored: target not adjacent to the empty cell,
    /// or the puzzle is already solved. No state change.
    Rejected,
}

impl SlideOutcome {
    /// True if the request changed the board.
    pub fn accepted(self) -> bool {
        !matches!(self, SlideOutcome::Rejected)
    }
}

/// Error that can occur when validating or applying a slide.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SlideError {
    /// The targeted cell does not touch the empty cell.
    #[display("{} is not adjacent to the empty cell", _0)]
    NotAdjacent(Position),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SlideError {}

/// Malformed request from outside the board's position range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PuzzleError {
    /// Board positions are 0-8.
    #[display("invalid board position {} (expected 0-8)", _0)]
    InvalidPosition(usize),
}

impl std::error::Error for PuzzleError {}
