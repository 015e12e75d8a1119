use std::fmt;

use crate::types::{coord_to_idx, idx_to_coord, Coord, Dir};

/// Tile identity. The solved layout assigns identity = slot index; the
/// highest identity is reserved for the empty slot.
pub type TileId = u8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    // slots[slot_idx] = tile identity currently occupying that slot
    slots: Vec<TileId>,
    // tile_pos[tile_id] = slot index currently holding that tile
    tile_pos: Vec<u8>,
}

impl Board {
    /// Build the solved layout: identity = slot index, last slot empty.
    /// `size` is caller-validated to be at least 2.
    pub fn solved(size: u8) -> Self {
        debug_assert!(size >= 2);
        let n = usize::from(size) * usize::from(size);
        let slots: Vec<TileId> = (0..n).map(|i| i as TileId).collect();
        let tile_pos = slots.clone();
        Self {
            size,
            slots,
            tile_pos,
        }
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Identity reserved for the empty slot.
    #[inline]
    pub fn empty_id(&self) -> TileId {
        (self.slots.len() - 1) as TileId
    }

    #[inline]
    pub fn tile_at(&self, idx: u8) -> TileId {
        self.slots[usize::from(idx)]
    }

    #[inline]
    pub fn tile_at_coord(&self, c: Coord) -> Option<TileId> {
        coord_to_idx(c, self.size).map(|i| self.tile_at(i))
    }

    #[inline]
    pub fn position_of(&self, tile: TileId) -> Coord {
        idx_to_coord(self.tile_pos[usize::from(tile)], self.size)
    }

    /// Tracked explicitly; O(1), never a scan.
    #[inline]
    pub fn empty_slot(&self) -> Coord {
        self.position_of(self.empty_id())
    }

    /// The coordinate `tile` occupies in the solved layout.
    #[inline]
    pub fn home_of(&self, tile: TileId) -> Coord {
        idx_to_coord(tile, self.size)
    }

    #[inline]
    pub fn is_home(&self, tile: TileId) -> bool {
        self.tile_pos[usize::from(tile)] == tile
    }

    /// Exchange two tiles' current positions. No legality check here:
    /// callers validate adjacency first (see `rules::can_slide`).
    pub fn swap(&mut self, a: TileId, b: TileId) {
        let pa = self.tile_pos[usize::from(a)];
        let pb = self.tile_pos[usize::from(b)];
        self.slots.swap(usize::from(pa), usize::from(pb));
        self.tile_pos[usize::from(a)] = pb;
        self.tile_pos[usize::from(b)] = pa;
    }

    /// Tiles currently adjacent to the empty slot, in deterministic
    /// [Up, Right, Down, Left] order. 1 to 4 entries depending on whether
    /// the empty slot sits on an edge or corner.
    pub fn movable_tiles(&self) -> Vec<TileId> {
        let empty = self.empty_slot();
        let mut out = Vec::with_capacity(4);
        for dir in Dir::all() {
            if let Some(c) = dir.step(empty, self.size) {
                if let Some(t) = self.tile_at_coord(c) {
                    out.push(t);
                }
            }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let tile = self.tile_at(row * self.size + col);
                if tile == self.empty_id() {
                    write!(f, " . ")?;
                } else {
                    // 1-based display numbering, classic 15-puzzle style
                    write!(f, "{:>2} ", tile + 1)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
