use serde::{Deserialize, Serialize};

use crate::board::{Board, TileId};
use crate::catalog::{Catalog, PuzzleDef};
use crate::engine::{apply, hint, win};
use crate::rng::rng_for_shuffle;
use crate::shuffle::{scramble, SHUFFLE_ITERATIONS};
use crate::types::{Coord, Dir};

/// Time units a requested hint stays marked before auto-expiring.
pub const HINT_TTL: u64 = 3;
/// Time units between solving and the solved-presentation reveal.
pub const REVEAL_DELAY: u64 = 1;
/// Supported grid edge lengths, inclusive.
pub const MIN_GRID: u8 = 2;
pub const MAX_GRID: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    NotStarted,
    Active,
    Solved,
}

/// Discrete inputs the presentation layer feeds into the controller.
/// Every time-dependent behavior takes `now` through `Session::handle`
/// rather than reading a clock itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Scramble and begin play (also the restart button).
    Start,
    /// Attempt to slide a tile by identity.
    Slide(TileId),
    /// Keyboard semantics: `Up` slides the tile below the empty slot up.
    Nudge(Dir),
    Hint,
    /// Periodic time signal; drives hint expiry and the solved reveal.
    Tick,
    ChangeDifficulty(u8),
    /// Replay after a solve: next catalog entry, reshuffle, begin.
    NextLevel,
}

/// What happened in response to an input, for presentation to react to
/// (sound, animation, screen transitions). Returned values, not callbacks:
/// an absent listener never blocks a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Started { level: u32, grid_size: u8 },
    MoveApplied { tile: TileId, from: Coord, to: Coord },
    MoveRejected { tile: TileId },
    HintShown { tile: TileId },
    HintCleared,
    Solved { summary: SolveSummary },
    SolvedRevealed,
}

/// Frozen results of a solved level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveSummary {
    pub level: u32,
    pub moves: u32,
    pub elapsed: u64,
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HintMarker {
    tile: TileId,
    shown_at: u64,
}

/// Construction-time knobs; all gameplay state lives in `Session`.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub grid_size: u8,
    pub seed: u64,
    pub shuffle_iterations: usize,
    pub catalog: Catalog,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: 3,
            seed: 0x00C0_FFEE,
            shuffle_iterations: SHUFFLE_ITERATIONS,
            catalog: Catalog::builtin(),
        }
    }
}

/// One tile's current position, for presentation snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePos {
    pub tile: TileId,
    pub col: u8,
    pub row: u8,
}

/// Complete read-only view of the session for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid_size: u8,
    pub level: u32,
    pub moves: u32,
    pub elapsed: u64,
    pub phase: Phase,
    /// Identity -> coordinate for every real tile; the empty slot is
    /// reported separately.
    pub tiles: Vec<TilePos>,
    pub empty: Coord,
    pub hinted: Option<TileId>,
    pub image: String,
    pub term: String,
    pub definition: String,
}

/// The session controller: owns the board and all mutable play state,
/// and advances through not-started -> active -> solved on inputs.
#[derive(Debug, Clone)]
pub struct Session {
    grid_size: u8,
    seed: u64,
    shuffle_iterations: usize,
    catalog: Catalog,
    level: u32,
    board: Board,
    phase: Phase,
    moves: u32,
    started_at: Option<u64>,
    solved_at: Option<u64>,
    revealed: bool,
    hint: Option<HintMarker>,
    summary: Option<SolveSummary>,
    // Scrambles performed so far; varies the derived RNG stream so a
    // restart of the same level reshuffles differently.
    rounds: u32,
}

impl Session {
    /// Build a session at level 1 with a solved (not yet scrambled) board.
    /// The board exists from construction on, so no query can observe an
    /// uninitialized state.
    pub fn new(config: SessionConfig) -> Result<Self, String> {
        if !(MIN_GRID..=MAX_GRID).contains(&config.grid_size) {
            return Err(format!(
                "Unsupported grid size {} (expected {MIN_GRID}..={MAX_GRID})",
                config.grid_size
            ));
        }
        Ok(Self {
            grid_size: config.grid_size,
            seed: config.seed,
            shuffle_iterations: config.shuffle_iterations,
            catalog: config.catalog,
            level: 1,
            board: Board::solved(config.grid_size),
            phase: Phase::NotStarted,
            moves: 0,
            started_at: None,
            solved_at: None,
            revealed: false,
            hint: None,
            summary: None,
            rounds: 0,
        })
    }

    /// Single transition function: dispatch one input at time `now`.
    /// Inputs that are invalid in the current phase are guarded no-ops.
    pub fn handle(&mut self, now: u64, input: Input) -> Vec<Event> {
        match input {
            Input::Start => self.start(now),
            Input::Slide(tile) => self.slide(now, tile),
            Input::Nudge(dir) => self.nudge(now, dir),
            Input::Hint => self.request_hint(now),
            Input::Tick => self.tick(now),
            Input::ChangeDifficulty(size) => self.change_difficulty(now, size),
            Input::NextLevel => self.next_level(now),
        }
    }

    /// Rebuild the solved board for the current level and reset per-game
    /// fields. Resetting `started_at`/`solved_at`/`hint` here also retires
    /// any stale tick or hint-expiry driven behavior from a previous game.
    fn init_level(&mut self) {
        self.board = Board::solved(self.grid_size);
        self.phase = Phase::NotStarted;
        self.moves = 0;
        self.started_at = None;
        self.solved_at = None;
        self.revealed = false;
        self.hint = None;
        self.summary = None;
    }

    fn start(&mut self, now: u64) -> Vec<Event> {
        self.init_level();
        self.rounds += 1;
        let mut rng = rng_for_shuffle(self.seed, self.level, self.rounds);
        scramble(&mut self.board, self.shuffle_iterations, &mut rng);
        self.phase = Phase::Active;
        self.started_at = Some(now);
        vec![Event::Started {
            level: self.level,
            grid_size: self.grid_size,
        }]
    }

    fn slide(&mut self, now: u64, tile: TileId) -> Vec<Event> {
        if self.phase != Phase::Active {
            return Vec::new();
        }
        let Some(record) = apply::slide(&mut self.board, tile) else {
            return vec![Event::MoveRejected { tile }];
        };
        self.moves += 1;
        let mut events = Vec::with_capacity(3);
        events.push(Event::MoveApplied {
            tile: record.tile,
            from: record.from,
            to: record.to,
        });
        if self.hint.take().is_some() {
            events.push(Event::HintCleared);
        }
        if win::is_solved(&self.board) {
            let entry = self.catalog.entry_for_level(self.level);
            let summary = SolveSummary {
                level: self.level,
                moves: self.moves,
                elapsed: self.elapsed(now),
                term: entry.term.clone(),
                definition: entry.definition.clone(),
            };
            self.phase = Phase::Solved;
            self.solved_at = Some(now);
            self.summary = Some(summary.clone());
            events.push(Event::Solved { summary });
        }
        events
    }

    fn nudge(&mut self, now: u64, dir: Dir) -> Vec<Event> {
        if self.phase != Phase::Active {
            return Vec::new();
        }
        // `Up` moves the tile below the empty slot upward, so the tile to
        // slide sits one step opposite the nudge direction.
        let empty = self.board.empty_slot();
        let Some(coord) = dir.opposite().step(empty, self.grid_size) else {
            return Vec::new();
        };
        match self.board.tile_at_coord(coord) {
            Some(tile) => self.slide(now, tile),
            None => Vec::new(),
        }
    }

    fn request_hint(&mut self, now: u64) -> Vec<Event> {
        if self.phase != Phase::Active {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if self.hint.take().is_some() {
            events.push(Event::HintCleared);
        }
        if let Some(tile) = hint::first_misplaced(&self.board) {
            self.hint = Some(HintMarker {
                tile,
                shown_at: now,
            });
            events.push(Event::HintShown { tile });
        }
        events
    }

    fn tick(&mut self, now: u64) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(marker) = self.hint {
            if now.saturating_sub(marker.shown_at) >= HINT_TTL {
                self.hint = None;
                events.push(Event::HintCleared);
            }
        }
        if self.phase == Phase::Solved && !self.revealed {
            if let Some(done) = self.solved_at {
                if now.saturating_sub(done) >= REVEAL_DELAY {
                    self.revealed = true;
                    events.push(Event::SolvedRevealed);
                }
            }
        }
        events
    }

    fn change_difficulty(&mut self, now: u64, size: u8) -> Vec<Event> {
        if !(MIN_GRID..=MAX_GRID).contains(&size) {
            return Vec::new();
        }
        let was_active = self.phase == Phase::Active;
        self.grid_size = size;
        self.init_level();
        // Play continues across a difficulty change: re-scramble at the
        // new size without waiting for another start press.
        if was_active {
            self.start(now)
        } else {
            Vec::new()
        }
    }

    fn next_level(&mut self, now: u64) -> Vec<Event> {
        if self.phase != Phase::Solved {
            return Vec::new();
        }
        self.level += 1;
        self.init_level();
        self.start(now)
    }

    /// Elapsed play time in whole time units: 0 before start, `now -
    /// started_at` while active (a pure function, resilient to missed
    /// ticks), frozen at the recorded solve time afterwards.
    pub fn elapsed(&self, now: u64) -> u64 {
        match (self.started_at, self.solved_at) {
            (Some(start), Some(done)) => done.saturating_sub(start),
            (Some(start), None) => now.saturating_sub(start),
            (None, _) => 0,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[inline]
    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn hinted_tile(&self) -> Option<TileId> {
        self.hint.map(|h| h.tile)
    }

    #[inline]
    pub fn summary(&self) -> Option<&SolveSummary> {
        self.summary.as_ref()
    }

    #[inline]
    pub fn current_entry(&self) -> &PuzzleDef {
        self.catalog.entry_for_level(self.level)
    }

    /// Complete read-only view for a presentation layer.
    pub fn snapshot(&self, now: u64) -> Snapshot {
        let entry = self.current_entry();
        let empty = self.board.empty_id();
        let tiles = (0..empty)
            .map(|t| {
                let pos = self.board.position_of(t);
                TilePos {
                    tile: t,
                    col: pos.col,
                    row: pos.row,
                }
            })
            .collect();
        Snapshot {
            grid_size: self.grid_size,
            level: self.level,
            moves: self.moves,
            elapsed: self.elapsed(now),
            phase: self.phase,
            tiles,
            empty: self.board.empty_slot(),
            hinted: self.hinted_tile(),
            image: entry.image.clone(),
            term: entry.term.clone(),
            definition: entry.definition.clone(),
        }
    }
}

/// MM:SS, zero-padded, for the timer display.
pub fn format_elapsed(elapsed: u64) -> String {
    format!("{:02}:{:02}", elapsed / 60, elapsed % 60)
}
