//! Tests for the mutable puzzle engine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use slide_puzzle::{Position, Puzzle, PuzzleError, PuzzleStatus, SlideOutcome, is_solved};

/// Solves a fresh puzzle in two moves: slide the top-center tile left,
/// then slide it back.
fn solve_in_two_moves(puzzle: &mut Puzzle) {
    assert_eq!(puzzle.try_slide(Position::TopCenter), SlideOutcome::Moved);
    assert_eq!(puzzle.try_slide(Position::TopLeft), SlideOutcome::Solved);
}

#[test]
fn test_first_slide_on_fresh_board() {
    // A fresh board is the solved arrangement, but it accepts moves.
    let mut puzzle = Puzzle::new();
    assert_eq!(puzzle.try_slide(Position::TopCenter), SlideOutcome::Moved);

    let snapshot = puzzle.snapshot();
    assert_eq!(snapshot.tiles, [1, 0, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(snapshot.move_count, 1);
    assert!(!snapshot.solved);
}

#[test]
fn test_sliding_back_solves() {
    let mut puzzle = Puzzle::new();
    solve_in_two_moves(&mut puzzle);

    let snapshot = puzzle.snapshot();
    assert_eq!(snapshot.tiles, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(snapshot.move_count, 2);
    assert!(snapshot.solved);
    assert_eq!(puzzle.state().status(), PuzzleStatus::Solved);
}

#[test]
fn test_non_adjacent_target_rejected_without_change() {
    let mut puzzle = Puzzle::new();
    let before = puzzle.snapshot();

    assert_eq!(puzzle.try_slide(Position::Center), SlideOutcome::Rejected);
    assert_eq!(
        puzzle.try_slide(Position::BottomRight),
        SlideOutcome::Rejected
    );
    assert_eq!(puzzle.snapshot(), before);
}

#[test]
fn test_repeat_target_fails_after_empty_moves_away() {
    let mut puzzle = Puzzle::new();
    assert_eq!(puzzle.try_slide(Position::TopCenter), SlideOutcome::Moved);
    // The empty slot now sits at top-center itself.
    assert_eq!(
        puzzle.try_slide(Position::TopCenter),
        SlideOutcome::Rejected
    );
    assert_eq!(puzzle.snapshot().move_count, 1);
}

#[test]
fn test_out_of_range_index_is_an_error() {
    let mut puzzle = Puzzle::new();
    assert_eq!(
        puzzle.try_slide_at(9),
        Err(PuzzleError::InvalidPosition(9))
    );
    assert_eq!(puzzle.try_slide_at(1), Ok(SlideOutcome::Moved));
}

#[test]
fn test_solved_puzzle_ignores_moves_until_reset() {
    let mut puzzle = Puzzle::new();
    solve_in_two_moves(&mut puzzle);

    // Top-center is adjacent to the empty slot, but the puzzle is solved.
    assert_eq!(
        puzzle.try_slide(Position::TopCenter),
        SlideOutcome::Rejected
    );
    assert_eq!(puzzle.snapshot().move_count, 2);

    puzzle.reset();
    assert_eq!(puzzle.state().status(), PuzzleStatus::Active);
    assert_eq!(puzzle.snapshot().move_count, 0);
    assert_eq!(puzzle.try_slide(Position::MiddleLeft), SlideOutcome::Moved);
}

#[test]
fn test_shuffle_reactivates_solved_puzzle() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut puzzle = Puzzle::new();
    solve_in_two_moves(&mut puzzle);

    puzzle.shuffle(&mut rng);
    assert_eq!(puzzle.state().status(), PuzzleStatus::Active);
    assert_eq!(puzzle.snapshot().move_count, 0);
    assert!(!is_solved(puzzle.state().board()));

    let target = puzzle.movable_positions()[0];
    assert!(puzzle.try_slide(target).accepted());
}

#[test]
fn test_movable_positions_on_fresh_board() {
    let puzzle = Puzzle::new();
    let mut movable = puzzle.movable_positions();
    movable.sort_by_key(|p| p.index());
    assert_eq!(movable, vec![Position::TopCenter, Position::MiddleLeft]);
}

#[test]
fn test_movable_positions_empty_once_solved() {
    let mut puzzle = Puzzle::new();
    solve_in_two_moves(&mut puzzle);
    assert!(puzzle.movable_positions().is_empty());
}

#[test]
fn test_snapshot_serializes_boundary_fields() {
    let puzzle = Puzzle::new();
    let value = serde_json::to_value(puzzle.snapshot()).expect("snapshot serializes");
    assert_eq!(value["tiles"][0], 0);
    assert_eq!(value["move_count"], 0);
    assert_eq!(value["solved"], false);
}
