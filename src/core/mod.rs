//! Core types shared by every part of the engine: player ids, RNG,
//! configuration.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerId, PlayerMap};
pub use rng::BoardRng;
pub use config::{BoardConfig, GenerationMode, RoomConfig};
