use rand::Rng;

use crate::board::{Board, TileId};
use crate::engine::apply;

/// Random-walk length the session uses for every scramble.
pub const SHUFFLE_ITERATIONS: usize = 100;

/// Scramble by performing `iterations` uniformly random legal moves.
///
/// Walking from the current layout keeps every produced board reachable
/// from solved (the session always scrambles a freshly solved board), so
/// solvability holds by construction and needs no parity analysis.
/// Returns the tile slid at each step; replaying the reverse restores the
/// starting layout.
pub fn scramble<R: Rng + ?Sized>(
    board: &mut Board,
    iterations: usize,
    rng: &mut R,
) -> Vec<TileId> {
    let mut trace = Vec::with_capacity(iterations);
    for _ in 0..iterations {
        let movable = board.movable_tiles();
        if movable.is_empty() {
            // Malformed board: nothing adjacent to the empty slot.
            continue;
        }
        let tile = movable[rng.gen_range(0..movable.len())];
        if apply::slide(board, tile).is_some() {
            trace.push(tile);
        }
    }
    trace
}
