//! Random pairing of players for each round
//!
//! Two distinct pool indices drawn uniformly without replacement. The order
//! is random too: the first index plays as player 1.

use crate::random::SeededRng;

/// Sample two distinct indices from `[0, pool_size)`
///
/// Returns `None` when the pool has fewer than 2 players.
pub fn sample_pair(pool_size: usize, rng: &mut SeededRng) -> Option<(usize, usize)> {
    if pool_size < 2 {
        return None;
    }
    let first = rng.next_index(pool_size);
    // draw from the remaining n-1 slots and skip over `first`
    let mut second = rng.next_index(pool_size - 1);
    if second >= first {
        second += 1;
    }
    Some((first, second))
}
