//! The per-player board engine.

pub mod board_engine;

pub use board_engine::{BoardEngine, SelectOutcome};
