use crate::board::{Board, TileId};

/// First tile, scanning identities ascending and skipping the empty, that
/// is not on its home coordinate. `None` when the board is solved.
///
/// This is a cheap "something is out of place" marker, not a move search.
#[inline]
pub fn first_misplaced(board: &Board) -> Option<TileId> {
    let empty = board.empty_id();
    (0..empty).find(|&t| !board.is_home(t))
}
