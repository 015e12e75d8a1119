use crate::board::{Board, TileId};
use crate::rules;
use crate::types::Coord;

/// Record of one applied slide: where the tile came from and the empty
/// slot it moved into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub tile: TileId,
    pub from: Coord,
    pub to: Coord,
}

/// Slide `tile` into the empty slot if it is adjacent; `None` otherwise.
/// The board is untouched on rejection.
pub fn slide(board: &mut Board, tile: TileId) -> Option<Slide> {
    if !rules::can_slide(board, tile) {
        return None;
    }
    let from = board.position_of(tile);
    let to = board.empty_slot();
    let empty = board.empty_id();
    board.swap(tile, empty);
    Some(Slide { tile, from, to })
}
