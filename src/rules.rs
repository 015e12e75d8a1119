use crate::board::{Board, TileId};
use crate::types::Coord;

/// True iff the two positions are exactly one tile step apart on a single
/// axis: strict 4-directional adjacency, no diagonals, no wraparound.
/// A position is never adjacent to itself.
#[inline]
pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    a.manhattan(b) == 1
}

/// A tile may slide iff it is a real tile (not the empty marker) sitting
/// next to the empty slot.
#[inline]
pub fn can_slide(board: &Board, tile: TileId) -> bool {
    usize::from(tile) < board.slot_count()
        && tile != board.empty_id()
        && is_adjacent(board.position_of(tile), board.empty_slot())
}
