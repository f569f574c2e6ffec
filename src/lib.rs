//! # bingo-engine
//!
//! Bingo board engine: card generation, called-number matching, cell
//! selection and win detection, plus a small game room that drives boards
//! through a game.
//!
//! ## Design Principles
//!
//! 1. **Boards are values**: a `Board` is `Copy` and owned by exactly one
//!    `BoardEngine`. There is no shared or global board registry.
//!
//! 2. **Re-derive, don't accumulate**: `called` flags are recomputed from the
//!    full called sequence on every update. Selection is player-owned state
//!    and is never touched by re-derivation.
//!
//! 3. **Rejections are no-ops**: every refused request returns an error and
//!    leaves state untouched. Nothing in the engine panics on bad input.
//!
//! 4. **Deterministic from a seed**: boards and the pouch come from a
//!    ChaCha8 stream, so a room is reproducible from its seed.
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, configuration
//! - `board`: Columns, cells, the 5x5 grid, win lines
//! - `engine`: Per-player selection state machine and win signal
//! - `caller`: Called-number history and the pouch
//! - `session`: Game room lifecycle (waiting, playing, finished)

pub mod core;
pub mod board;
pub mod engine;
pub mod caller;
pub mod session;

// Re-export commonly used types
pub use crate::core::{BoardConfig, BoardRng, GenerationMode, PlayerId, PlayerMap, RoomConfig};

pub use crate::board::{
    call_label, Board, BoardError, Cell, Column, Coord, SelectError, WinLine,
    BAND_WIDTH, GRID_SIZE, MAX_NUMBER,
};

pub use crate::engine::{BoardEngine, SelectOutcome};

pub use crate::caller::{CalledNumbers, Pouch};

pub use crate::session::{GameRoom, GameStatus, RoomError, Seat};
