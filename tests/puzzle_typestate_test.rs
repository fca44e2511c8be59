//! Tests for the typestate puzzle architecture.

use rand::SeedableRng;
use rand::rngs::StdRng;
use slide_puzzle::{Position, PuzzleActive, PuzzleSolved, SlideError, SlideResult, is_solved};

/// Runs the two-move solve on a fresh puzzle and returns the solved
/// phase.
fn solve_fresh_puzzle() -> PuzzleSolved {
    let puzzle = PuzzleActive::new();
    let puzzle = match puzzle.slide(Position::TopCenter) {
        Ok(SlideResult::Active(p)) => p,
        other => panic!("expected active puzzle, got {other:?}"),
    };
    match puzzle.slide(Position::TopLeft) {
        Ok(SlideResult::Solved(p)) => p,
        other => panic!("expected solved puzzle, got {other:?}"),
    }
}

#[test]
fn test_typestate_lifecycle() {
    let puzzle = PuzzleActive::new();
    assert_eq!(puzzle.move_count(), 0);

    let result = puzzle.slide(Position::TopCenter).expect("legal slide");
    let puzzle = match result {
        SlideResult::Active(p) => p,
        SlideResult::Solved(_) => panic!("one slide off solved cannot solve"),
    };
    assert_eq!(puzzle.move_count(), 1);
    assert!(!is_solved(puzzle.board()));
}

#[test]
fn test_solving_transition() {
    let solved = solve_fresh_puzzle();
    assert_eq!(solved.move_count(), 2);
    assert!(is_solved(solved.board()));
    assert!(solved.snapshot().solved);
}

#[test]
fn test_illegal_slide_is_an_error() {
    let puzzle = PuzzleActive::new();
    let result = puzzle.slide(Position::BottomRight);
    assert!(matches!(
        result,
        Err(SlideError::NotAdjacent(Position::BottomRight))
    ));
}

#[test]
fn test_clone_before_slide_keeps_the_puzzle() {
    let puzzle = PuzzleActive::new();
    // The slide consumes its receiver, so speculative moves go through
    // a clone.
    assert!(puzzle.clone().slide(Position::Center).is_err());
    assert_eq!(puzzle.move_count(), 0);
}

#[test]
fn test_reset_returns_to_active() {
    let active = solve_fresh_puzzle().reset();
    assert_eq!(active.move_count(), 0);
    assert!(is_solved(active.board()));
    assert!(!active.snapshot().solved);
}

#[test]
fn test_reshuffle_scrambles() {
    let mut rng = StdRng::seed_from_u64(5);
    let active = solve_fresh_puzzle().reshuffle(&mut rng);
    assert_eq!(active.move_count(), 0);
    assert!(!is_solved(active.board()));
}

#[test]
fn test_movable_positions_track_the_empty_slot() {
    let puzzle = PuzzleActive::new();
    let mut movable = puzzle.movable_positions();
    movable.sort_by_key(|p| p.index());
    assert_eq!(movable, vec![Position::TopCenter, Position::MiddleLeft]);
}
