//! Kani proof harnesses for the board's structural properties.

use super::{EmptyTileInvariant, Invariant, PermutationInvariant};
use crate::position::{Position, TILE_COUNT};
use crate::rules::Puzzle;

#[kani::proof]
fn index_round_trips_for_all_cells() {
    let index: usize = kani::any();
    kani::assume(index < TILE_COUNT);
    let position = Position::from_index(index);
    assert!(position.is_some_and(|p| p.index() == index));
}

#[kani::proof]
fn neighbors_are_orthogonally_adjacent() {
    let index: usize = kani::any();
    kani::assume(index < TILE_COUNT);
    if let Some(position) = Position::from_index(index) {
        for neighbor in position.neighbors() {
            let row_delta = position.row().abs_diff(neighbor.row());
            let col_delta = position.col().abs_diff(neighbor.col());
            assert!(row_delta + col_delta == 1);
        }
    }
}

#[kani::proof]
fn any_slide_preserves_the_permutation() {
    let index: usize = kani::any();
    kani::assume(index < TILE_COUNT);
    if let Some(target) = Position::from_index(index) {
        let mut puzzle = Puzzle::new();
        let _ = puzzle.try_slide(target);
        assert!(PermutationInvariant::holds(puzzle.state().board()));
        assert!(EmptyTileInvariant::holds(puzzle.state().board()));
    }
}
