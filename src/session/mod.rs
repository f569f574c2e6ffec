//! Game rooms: seating, lifecycle and number calling around the boards.

pub mod error;
pub mod room;

pub use error::RoomError;
pub use room::{GameRoom, GameStatus, Seat};
