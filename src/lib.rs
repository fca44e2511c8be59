//! Slide Puzzle - a 3x3 sliding tile puzzle for the terminal.
//!
//! The puzzle engine lives in `slide_puzzle_core`; this crate adds the
//! command line, configuration, and the ratatui presentation layer. The
//! presentation owns the event loop and calls into the engine
//! synchronously, one gesture at a time.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app_config;
pub mod cli;
pub mod tui;

// Crate-level exports - Configuration
pub use app_config::{AppConfig, ConfigError};

// Crate-level exports - Engine types
pub use slide_puzzle_core::{
    BOARD_SIZE, Board, Position, Puzzle, PuzzleActive, PuzzleError, PuzzleSnapshot, PuzzleSolved,
    PuzzleState, PuzzleStatus, Slide, SlideError, SlideOutcome, SlideResult, TILE_COUNT, Tile,
    count_inversions, is_solvable, is_solved, shuffle,
};
