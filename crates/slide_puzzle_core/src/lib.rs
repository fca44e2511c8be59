//! Pure game logic for a 3x3 sliding tile puzzle.
//!
//! The crate owns the puzzle state machine: board representation, move
//! legality, shuffle generation with a solvability guarantee, and win
//! detection. Rendering and input belong to presentation layers, which
//! drive the engine with one move request per gesture and read back
//! snapshots.
//!
//! Two engine flavors are provided:
//! - [`Puzzle`] - an owned mutable engine with explicit methods, the
//!   shape presentation layers call into synchronously.
//! - [`PuzzleActive`]/[`PuzzleSolved`] - the same state machine with the
//!   phase encoded in the type, so a solved puzzle cannot be slid at all.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod action;
pub mod contracts;
pub mod invariants;
pub mod position;
pub mod rules;
pub mod shuffle;
pub mod types;
pub mod typestate;

pub use action::{PuzzleError, Slide, SlideError, SlideOutcome};
pub use position::{BOARD_SIZE, Position, TILE_COUNT};
pub use rules::{Puzzle, count_inversions, is_solvable, is_solved};
pub use types::{Board, PuzzleSnapshot, PuzzleState, PuzzleStatus, Tile};
pub use typestate::{PuzzleActive, PuzzleSolved, SlideResult};
