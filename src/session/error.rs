use crate::board::SelectError;
use crate::core::PlayerId;

/// Why a game-room request was refused. Rejections never change state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomError {
    /// Every seat is taken.
    RoomFull,
    /// All 256 seat ids have been handed out in this room.
    SeatsExhausted,
    /// No such player in this room.
    UnknownPlayer(PlayerId),
    /// Only allowed before the game starts.
    NotWaiting,
    /// Only allowed while the game is in progress.
    NotPlaying,
    /// Not enough players, or someone is not ready.
    CannotStart,
    /// The player's board refused the selection.
    Select(SelectError),
}

impl std::fmt::Display for RoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoomError::RoomFull => write!(f, "room is full"),
            RoomError::SeatsExhausted => write!(f, "no seat ids left in this room"),
            RoomError::UnknownPlayer(player) => write!(f, "{} is not in this room", player),
            RoomError::NotWaiting => write!(f, "game has already started"),
            RoomError::NotPlaying => write!(f, "game is not in progress"),
            RoomError::CannotStart => write!(f, "waiting for all players to be ready"),
            RoomError::Select(e) => write!(f, "selection rejected: {}", e),
        }
    }
}

impl std::error::Error for RoomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RoomError::Select(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SelectError> for RoomError {
    fn from(e: SelectError) -> Self {
        RoomError::Select(e)
    }
}
