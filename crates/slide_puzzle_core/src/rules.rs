//! Puzzle rules and the mutable engine.

use crate::action::{PuzzleError, SlideOutcome};
use crate::contracts;
use crate::position::Position;
use crate::shuffle;
use crate::types::{Board, PuzzleSnapshot, PuzzleState, PuzzleStatus};
use rand::Rng;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// True iff every tile sits on its home cell.
pub fn is_solved(board: &Board) -> bool {
    Position::iter().all(|pos| board.get(pos).home() == pos)
}

/// Counts pairs of out-of-order identifiers over the non-empty tiles.
///
/// The empty tile is excluded, so the count runs over the 8 pieces.
pub fn count_inversions(board: &Board) -> usize {
    let pieces: Vec<u8> = board.as_ids().into_iter().filter(|&id| id != 0).collect();
    let mut inversions = 0;
    for i in 0..pieces.len() {
        for j in (i + 1)..pieces.len() {
            if pieces[i] > pieces[j] {
                inversions += 1;
            }
        }
    }
    inversions
}

/// Even inversion parity admits a solution on a 3x3 board.
///
/// This is the simplified odd-width rule: it ignores the empty cell's
/// row and is only valid together with the permutation invariant and a
/// shuffle that draws full random permutations. It is not the general
/// NxN solvability theorem.
pub fn is_solvable(board: &Board) -> bool {
    count_inversions(board) % 2 == 0
}

/// Sliding puzzle engine owning the board, move count, and status.
///
/// Presentation layers drive it with one move request per gesture; each
/// request yields exactly one [`SlideOutcome`].
#[derive(Debug, Clone)]
pub struct Puzzle {
    state: PuzzleState,
}

impl Puzzle {
    /// Creates a fresh puzzle: solved board, zero moves, accepting slides.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: PuzzleState::new(),
        }
    }

    /// Returns the current puzzle state.
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Snapshot for the presentation boundary.
    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot {
            tiles: self.state.board().as_ids(),
            move_count: self.state.move_count(),
            solved: self.state.status() == PuzzleStatus::Solved,
        }
    }

    /// Cells whose tile can slide into the empty cell right now.
    ///
    /// Empty once the puzzle is solved, since no request will be accepted.
    pub fn movable_positions(&self) -> Vec<Position> {
        if self.state.status() == PuzzleStatus::Solved {
            return Vec::new();
        }
        self.state.board().empty_position().neighbors()
    }

    /// Handles one move request.
    ///
    /// Illegal requests (target not adjacent to the empty cell, or puzzle
    /// already solved) are rejected without state change; rejection is a
    /// normal event, not an error.
    #[instrument(skip(self), fields(target = %target))]
    pub fn try_slide(&mut self, target: Position) -> SlideOutcome {
        if self.state.status() == PuzzleStatus::Solved {
            debug!("puzzle already solved; request ignored");
            return SlideOutcome::Rejected;
        }
        let empty = self.state.board().empty_position();
        if !empty.neighbors().contains(&target) {
            debug!(empty = %empty, "target not adjacent to empty cell");
            return SlideOutcome::Rejected;
        }

        self.state.apply_slide(empty, target);
        contracts::assert_invariants(self.state.board());

        if is_solved(self.state.board()) {
            self.state.set_status(PuzzleStatus::Solved);
            debug!(moves = self.state.move_count(), "puzzle solved");
            SlideOutcome::Solved
        } else {
            SlideOutcome::Moved
        }
    }

    /// Move request by raw index, for callers outside the typed position
    /// space.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidPosition`] for indices outside 0-8.
    #[instrument(skip(self))]
    pub fn try_slide_at(&mut self, index: usize) -> Result<SlideOutcome, PuzzleError> {
        let target = Position::from_index(index).ok_or(PuzzleError::InvalidPosition(index))?;
        Ok(self.try_slide(target))
    }

    /// Replaces the board with a fresh solvable scramble.
    #[instrument(skip_all)]
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.state.replace_board(shuffle::solvable_board(rng));
        debug!("board shuffled");
    }

    /// Returns the board to the solved arrangement.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state.replace_board(Board::solved());
        debug!("board reset");
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(ids: [u8; 9]) -> Board {
        Board::from_ids(ids).expect("test identifiers form a permutation")
    }

    #[test]
    fn solved_board_is_solved() {
        assert!(is_solved(&Board::solved()));
        assert!(!is_solved(&board([1, 0, 2, 3, 4, 5, 6, 7, 8])));
    }

    #[test]
    fn inversions_exclude_the_empty_tile() {
        // Moving the empty slot does not reorder the pieces.
        assert_eq!(count_inversions(&Board::solved()), 0);
        assert_eq!(count_inversions(&board([1, 0, 2, 3, 4, 5, 6, 7, 8])), 0);
        assert_eq!(count_inversions(&board([1, 2, 3, 4, 0, 5, 6, 7, 8])), 0);
    }

    #[test]
    fn inversions_count_out_of_order_pairs() {
        assert_eq!(count_inversions(&board([0, 2, 1, 3, 4, 5, 6, 7, 8])), 1);
        // Full reversal of the 8 pieces: 8 * 7 / 2 pairs.
        assert_eq!(count_inversions(&board([0, 8, 7, 6, 5, 4, 3, 2, 1])), 28);
    }

    #[test]
    fn solvability_follows_inversion_parity() {
        assert!(is_solvable(&Board::solved()));
        assert!(is_solvable(&board([0, 8, 7, 6, 5, 4, 3, 2, 1])));
        assert!(!is_solvable(&board([2, 1, 0, 3, 4, 5, 6, 7, 8])));
    }
}
