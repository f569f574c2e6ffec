//! Engine and room configuration.
//!
//! - `GenerationMode`: how a column's numbers are drawn
//! - `BoardConfig`: per-board engine behaviour
//! - `RoomConfig`: seating rules for a game room
//!
//! All configs are plain serde structs with `Default` and `with_*` builders,
//! so hosts can load them from whatever format they already use.

use serde::{Deserialize, Serialize};

/// How numbers are drawn for a column when a board is generated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationMode {
    /// Every cell draws independently from its column band.
    /// Two cells in one column may share a number.
    #[default]
    Loose,
    /// Numbers within a column are sampled without replacement.
    Distinct,
}

/// Behaviour of a single `BoardEngine`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number drawing strategy.
    pub generation: GenerationMode,

    /// Once a winning line is completed, reject every further toggle.
    ///
    /// With this off, the board stays editable after a win and the win
    /// signal fires again only after the board leaves and re-enters a
    /// winning state.
    pub freeze_on_win: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            generation: GenerationMode::Loose,
            freeze_on_win: true,
        }
    }
}

impl BoardConfig {
    #[must_use]
    pub fn with_generation(mut self, mode: GenerationMode) -> Self {
        self.generation = mode;
        self
    }

    #[must_use]
    pub fn with_freeze_on_win(mut self, freeze: bool) -> Self {
        self.freeze_on_win = freeze;
        self
    }
}

/// Seating rules and board settings for a `GameRoom`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Seats available. Joins beyond this fail.
    pub max_players: usize,

    /// Players that must be seated (and ready) before the host can start.
    pub min_players: usize,

    /// Config applied to every player's board.
    pub board: BoardConfig,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            max_players: 2,
            min_players: 2,
            board: BoardConfig::default(),
        }
    }
}

impl RoomConfig {
    /// Set seat limits. `min` is clamped to at least 1 and at most `max`.
    #[must_use]
    pub fn with_players(mut self, min: usize, max: usize) -> Self {
        self.max_players = max.max(1);
        self.min_players = min.clamp(1, self.max_players);
        self
    }

    #[must_use]
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.generation, GenerationMode::Loose);
        assert!(config.freeze_on_win);

        let room = RoomConfig::default();
        assert_eq!(room.max_players, 2);
        assert_eq!(room.min_players, 2);
    }

    #[test]
    fn test_builders() {
        let config = BoardConfig::default()
            .with_generation(GenerationMode::Distinct)
            .with_freeze_on_win(false);
        assert_eq!(config.generation, GenerationMode::Distinct);
        assert!(!config.freeze_on_win);

        let room = RoomConfig::default().with_players(6, 4).with_board(config.clone());
        assert_eq!(room.max_players, 4);
        assert_eq!(room.min_players, 4);
        assert_eq!(room.board, config);
    }

    #[test]
    fn test_with_players_zero() {
        let room = RoomConfig::default().with_players(0, 0);
        assert_eq!(room.max_players, 1);
        assert_eq!(room.min_players, 1);
    }

    #[test]
    fn test_config_serde() {
        let room = RoomConfig::default().with_board(BoardConfig::default().with_generation(GenerationMode::Distinct));
        let json = serde_json::to_string(&room).unwrap();
        let deserialized: RoomConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(room, deserialized);
    }
}
