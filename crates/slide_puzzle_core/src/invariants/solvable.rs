//! Solvability invariant: the board stays reachable from the solved
//! arrangement.

use super::Invariant;
use crate::rules::is_solvable;
use crate::types::Board;

/// Invariant: the inversion parity is even.
///
/// A horizontal slide leaves the piece order untouched; a vertical slide
/// carries a piece past exactly two others, changing the inversion count
/// by an even amount. Shuffles only admit even permutations, so every
/// board the engine produces satisfies this.
pub struct SolvableInvariant;

impl Invariant<Board> for SolvableInvariant {
    fn holds(board: &Board) -> bool {
        is_solvable(board)
    }

    fn description() -> &'static str {
        "inversion parity is even (board is solvable)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::rules::Puzzle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_solved_board_holds() {
        assert!(SolvableInvariant::holds(&Board::solved()));
    }

    #[test]
    fn test_slides_preserve_parity() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut puzzle = Puzzle::new();
        puzzle.shuffle(&mut rng);
        for _ in 0..32 {
            let Some(&target) = puzzle.movable_positions().first() else {
                break;
            };
            puzzle.try_slide(target);
            assert!(SolvableInvariant::holds(puzzle.state().board()));
        }
    }

    #[test]
    fn test_swapped_pieces_violate() {
        let mut board = Board::solved();
        // Swapping two pieces (not the empty slot) flips the parity.
        board.swap(Position::TopCenter, Position::TopRight);
        assert!(!SolvableInvariant::holds(&board));
    }
}
