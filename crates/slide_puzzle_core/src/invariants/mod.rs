//! First-class invariants for the puzzle board.
//!
//! Invariants are logical properties that must hold throughout play.
//! They are testable independently and serve as documentation of the
//! engine's guarantees.

#[cfg(kani)]
mod verification;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod empty_tile;
pub mod permutation;
pub mod solvable;

pub use empty_tile::EmptyTileInvariant;
pub use permutation::PermutationInvariant;
pub use solvable::SolvableInvariant;

/// All board invariants as a composable set.
pub type PuzzleInvariants = (PermutationInvariant, EmptyTileInvariant, SolvableInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::rules::Puzzle;
    use crate::types::{Board, Tile};

    #[test]
    fn test_invariant_set_holds_for_fresh_board() {
        assert!(PuzzleInvariants::check_all(&Board::solved()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut puzzle = Puzzle::new();
        puzzle.try_slide(Position::TopCenter);
        puzzle.try_slide(Position::Center);
        assert!(PuzzleInvariants::check_all(puzzle.state().board()).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut board = Board::solved();
        // Duplicate a piece, clobbering the empty slot.
        board.set(Position::TopLeft, Tile::Piece(Position::BottomRight));

        let result = PuzzleInvariants::check_all(&board);
        assert!(result.is_err());

        let violations = result.unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (PermutationInvariant, EmptyTileInvariant);
        assert!(TwoInvariants::check_all(&Board::solved()).is_ok());
    }
}
