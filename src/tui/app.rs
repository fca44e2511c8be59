//! Application state and gesture handling.

use crate::app_config::AppConfig;
use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slide_puzzle_core::{Position, Puzzle, PuzzleSnapshot, SlideOutcome};
use tracing::debug;

use super::input;

/// Main application state.
pub struct App {
    puzzle: Puzzle,
    rng: StdRng,
    cursor: Position,
    status_message: String,
    show_labels: bool,
}

impl App {
    /// Creates the app from configuration, starting solved or shuffled.
    pub fn new(config: &AppConfig) -> Self {
        let mut rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::seed_from_u64(rand::rng().random()),
        };

        let mut puzzle = Puzzle::new();
        let status_message = if *config.shuffle_on_start() {
            puzzle.shuffle(&mut rng);
            "Shuffled. Slide tiles into the gap.".to_string()
        } else {
            "Press S to shuffle.".to_string()
        };

        Self {
            puzzle,
            rng,
            cursor: Position::Center,
            status_message,
            show_labels: *config.show_labels(),
        }
    }

    /// Gets the puzzle engine.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Snapshot of the board for rendering.
    pub fn snapshot(&self) -> PuzzleSnapshot {
        self.puzzle.snapshot()
    }

    /// Gets the keyboard cursor cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether tiles carry numeric captions.
    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    /// Requests a slide at the given cell and narrates the outcome.
    pub fn slide_at(&mut self, target: Position) {
        match self.puzzle.try_slide(target) {
            SlideOutcome::Moved => {
                self.status_message.clear();
            }
            SlideOutcome::Solved => {
                self.status_message = "Solved! Great job!".to_string();
            }
            SlideOutcome::Rejected => {
                // Normal event: the tile simply cannot move right now.
                debug!(target = %target, "Slide rejected");
            }
        }
    }

    /// Slides the tile under the keyboard cursor.
    pub fn slide_at_cursor(&mut self) {
        self.slide_at(self.cursor);
    }

    /// Slides by cell number 1-9.
    pub fn slide_numbered(&mut self, digit: char) {
        if let Some(value) = digit.to_digit(10)
            && (1..=9).contains(&value)
            && let Some(position) = Position::from_index(value as usize - 1)
        {
            self.slide_at(position);
        }
    }

    /// Moves the keyboard cursor one cell in the arrow direction.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Scrambles the board; the result is always solvable and never
    /// already solved.
    pub fn shuffle(&mut self) {
        self.puzzle.shuffle(&mut self.rng);
        self.status_message = "Shuffled. Slide tiles into the gap.".to_string();
    }

    /// Restores the solved picture and zeroes the move counter.
    pub fn reset(&mut self) {
        self.puzzle.reset();
        self.status_message = "Board reset.".to_string();
    }
}
