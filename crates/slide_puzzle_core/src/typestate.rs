//! Phase-specific typestate structs for the puzzle.
//!
//! Each phase is its own distinct type. An active puzzle accepts slides;
//! a solved puzzle has no slide method at all, so post-solve moves are
//! unrepresentable. The only way into [`PuzzleSolved`] is an accepted
//! move that completes the picture.

use crate::action::{Slide, SlideError};
use crate::contracts::{Contract, SlideContract};
use crate::position::Position;
use crate::rules;
use crate::shuffle;
use crate::types::{Board, PuzzleSnapshot};
use rand::Rng;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Active Phase
// ─────────────────────────────────────────────────────────────

/// Puzzle accepting moves.
///
/// A fresh puzzle starts in this phase even though its board is the
/// solved arrangement: `Solved` is only entered through a move.
#[derive(Debug, Clone)]
pub struct PuzzleActive {
    pub(crate) board: Board,
    pub(crate) move_count: u32,
}

impl PuzzleActive {
    /// Creates a fresh puzzle: solved arrangement, zero moves.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::solved(),
            move_count: 0,
        }
    }

    /// Starts from a scrambled, solvable arrangement.
    #[instrument(skip_all)]
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        Self {
            board: shuffle::solvable_board(rng),
            move_count: 0,
        }
    }

    /// Slides the tile at `target` into the empty cell, consuming the
    /// puzzle and returning the next phase.
    ///
    /// # Errors
    ///
    /// Returns [`SlideError::NotAdjacent`] if `target` does not touch the
    /// empty cell; callers that need to keep the puzzle clone it first.
    #[instrument(skip(self), fields(target = %target, moves = self.move_count))]
    pub fn slide(mut self, target: Position) -> Result<SlideResult, SlideError> {
        let action = Slide::new(target);
        let before = self.clone();

        // Precondition: check contract
        SlideContract::pre(&self, &action)?;

        // Apply the slide
        let empty = self.board.empty_position();
        self.board.swap(empty, target);
        self.move_count += 1;

        // Postcondition: the board is still a solvable permutation
        SlideContract::post(&before, &self)?;

        if rules::is_solved(&self.board) {
            return Ok(SlideResult::Solved(PuzzleSolved {
                board: self.board,
                move_count: self.move_count,
            }));
        }

        Ok(SlideResult::Active(self))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted moves since this puzzle was created.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Cells whose tile can slide into the empty cell.
    pub fn movable_positions(&self) -> Vec<Position> {
        self.board.empty_position().neighbors()
    }

    /// Snapshot for the presentation boundary.
    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot {
            tiles: self.board.as_ids(),
            move_count: self.move_count,
            solved: false,
        }
    }
}

impl Default for PuzzleActive {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Solved Phase
// ─────────────────────────────────────────────────────────────

/// Puzzle completed by an accepted move.
///
/// The board is solved by construction and there is no slide method:
/// leaving this phase requires [`reset`](PuzzleSolved::reset) or
/// [`reshuffle`](PuzzleSolved::reshuffle).
#[derive(Debug, Clone)]
pub struct PuzzleSolved {
    board: Board,
    move_count: u32,
}

impl PuzzleSolved {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of accepted moves it took to solve.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Snapshot for the presentation boundary.
    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot {
            tiles: self.board.as_ids(),
            move_count: self.move_count,
            solved: true,
        }
    }

    /// Returns to the solved arrangement, accepting moves again.
    #[instrument(skip(self))]
    pub fn reset(self) -> PuzzleActive {
        PuzzleActive::new()
    }

    /// Scrambles into a fresh active puzzle.
    #[instrument(skip_all)]
    pub fn reshuffle(self, rng: &mut impl Rng) -> PuzzleActive {
        PuzzleActive::shuffled(rng)
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of an accepted slide.
#[derive(Debug)]
pub enum SlideResult {
    /// Puzzle continues.
    Active(PuzzleActive),
    /// That move completed the picture.
    Solved(PuzzleSolved),
}
