//! Contract-based validation for slides.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Slide, SlideError};
use crate::invariants::{InvariantSet, PuzzleInvariants};
use crate::types::Board;
use crate::typestate::PuzzleActive;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state
/// transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SlideError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SlideError>;
}

/// Precondition: the targeted cell must touch the empty cell.
pub struct TargetAdjacent;

impl TargetAdjacent {
    /// Checks the adjacency requirement.
    #[instrument(skip(puzzle))]
    pub fn check(slide: &Slide, puzzle: &PuzzleActive) -> Result<(), SlideError> {
        let empty = puzzle.board().empty_position();
        if empty.neighbors().contains(&slide.target()) {
            Ok(())
        } else {
            Err(SlideError::NotAdjacent(slide.target()))
        }
    }
}

/// Composite precondition: a slide is legal if its target touches the
/// empty cell. Adjacency is the only runtime requirement; the phase type
/// already rules out slides on a solved puzzle.
pub struct LegalSlide;

impl LegalSlide {
    /// Validates all preconditions for a slide.
    #[instrument(skip(puzzle))]
    pub fn check(slide: &Slide, puzzle: &PuzzleActive) -> Result<(), SlideError> {
        TargetAdjacent::check(slide, puzzle)?;
        Ok(())
    }
}

/// Contract for slide actions.
///
/// Preconditions:
/// - Target must be adjacent to the empty cell
///
/// Postconditions:
/// - Board remains a permutation with one empty slot
/// - Inversion parity stays even
pub struct SlideContract;

impl Contract<PuzzleActive, Slide> for SlideContract {
    fn pre(puzzle: &PuzzleActive, action: &Slide) -> Result<(), SlideError> {
        LegalSlide::check(action, puzzle)
    }

    fn post(_before: &PuzzleActive, after: &PuzzleActive) -> Result<(), SlideError> {
        PuzzleInvariants::check_all(after.board()).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SlideError::InvariantViolation(descriptions)
        })
    }
}

/// Panics in debug builds if a board invariant has been violated.
pub fn assert_invariants(board: &Board) {
    if cfg!(debug_assertions)
        && let Err(violations) = PuzzleInvariants::check_all(board)
    {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("puzzle invariant violated: {}", descriptions);
    }
}
