//! Seeded random-walk instance generation
//!
//! Walks legal slides from a starting board without immediately undoing the
//! previous step. Slides are reversible, so every board the walk reaches is
//! exactly as solvable as the board it started from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::search::movegen::successors;
use crate::spatial::Board;

/// Walk `steps` random legal slides from `board`
///
/// Deterministic for a given seed. Stops early if a step has no successor
/// other than the immediate undo.
pub fn scramble(board: &Board, steps: usize, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut current = board.clone();
    let mut previous: Option<u64> = None;

    for _ in 0..steps {
        let mut options = successors(&current);
        options.retain(|candidate| Some(candidate.canonical_id()) != previous);
        if options.is_empty() {
            break;
        }
        let choice = rng.random_range(0..options.len());
        previous = Some(current.canonical_id());
        current = options.swap_remove(choice);
    }

    current
}
