//! Scramble generation with the solvability guarantee.

use crate::position::TILE_COUNT;
use crate::rules::{is_solvable, is_solved};
use crate::types::Board;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{instrument, trace};

/// Uniform random permutation of the nine tiles (Fisher-Yates).
pub fn random_board(rng: &mut impl Rng) -> Board {
    let mut ids: [u8; TILE_COUNT] = core::array::from_fn(|index| index as u8);
    ids.shuffle(rng);
    Board::from_ids(ids).expect("shuffled identifiers form a permutation")
}

/// Draws permutations until one is solvable and not already solved.
///
/// About half of all permutations are solvable and only one is solved,
/// so the retry loop is expected O(1). Retries are unbounded.
#[instrument(skip_all)]
pub fn solvable_board(rng: &mut impl Rng) -> Board {
    loop {
        let board = random_board(rng);
        if is_solvable(&board) && !is_solved(&board) {
            return board;
        }
        trace!("rejected unsolvable or already-solved permutation");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_board_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = random_board(&mut rng);
        let mut ids = board.as_ids();
        ids.sort_unstable();
        assert_eq!(ids, [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn solvable_board_rejects_solved_and_unsolvable_draws() {
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = solvable_board(&mut rng);
            assert!(is_solvable(&board), "seed {seed} produced an unsolvable board");
            assert!(!is_solved(&board), "seed {seed} produced a solved board");
        }
    }
}
