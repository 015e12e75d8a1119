#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod rules;
pub mod catalog;
pub mod board;
pub mod rng;
pub mod shuffle;
pub mod session;

pub mod engine {
    pub mod apply;
    pub mod hint;
    pub mod win;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{Board, TileId};
pub use crate::catalog::{load_catalog_from_json, Catalog, PuzzleDef};
pub use crate::engine::apply::{slide, Slide};
pub use crate::engine::hint::first_misplaced;
pub use crate::engine::win::is_solved;
pub use crate::rng::rng_for_shuffle;
pub use crate::rules::{can_slide, is_adjacent};
pub use crate::session::{
    format_elapsed, Event, Input, Phase, Session, SessionConfig, Snapshot, SolveSummary, TilePos,
    HINT_TTL, MAX_GRID, MIN_GRID, REVEAL_DELAY,
};
pub use crate::shuffle::{scramble, SHUFFLE_ITERATIONS};
pub use crate::types::{Coord, Dir};
