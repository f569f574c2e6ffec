//! A game room: seats, lifecycle and number calling around the boards.
//!
//! ## Lifecycle
//!
//! ```text
//! Waiting --start()--> Playing --first win--> Finished
//! ```
//!
//! Boards accept selections only while the room is `Playing`. The first
//! board to complete a line ends the game for everyone.

use serde::{Deserialize, Serialize};

use super::error::RoomError;
use crate::board::{call_label, Board};
use crate::caller::{CalledNumbers, Pouch};
use crate::core::{BoardRng, PlayerId, PlayerMap, RoomConfig};
use crate::engine::{BoardEngine, SelectOutcome};

/// Where a room is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Waiting,
    Playing,
    Finished,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GameStatus::Waiting => "Waiting",
            GameStatus::Playing => "In Progress",
            GameStatus::Finished => "Finished",
        };
        write!(f, "{}", label)
    }
}

/// A seated player and their board.
#[derive(Clone, Debug)]
pub struct Seat {
    name: String,
    ready: bool,
    winner: bool,
    engine: BoardEngine,
}

impl Seat {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.winner
    }

    #[must_use]
    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }
}

/// One game of bingo between the seated players.
#[derive(Clone, Debug)]
pub struct GameRoom {
    id: String,
    config: RoomConfig,
    status: GameStatus,
    seats: PlayerMap<Seat>,
    next_seat: u16,
    board_rng: BoardRng,
    pouch: Pouch,
    called: CalledNumbers,
    winner: Option<PlayerId>,
}

impl GameRoom {
    /// Open a room. Boards and the pouch are derived from `seed`.
    pub fn new(id: impl Into<String>, config: RoomConfig, seed: u64) -> Self {
        let rng = BoardRng::new(seed);
        let pouch = Pouch::new(&mut rng.for_context("pouch"));
        Self {
            id: id.into(),
            config,
            status: GameStatus::Waiting,
            seats: PlayerMap::new(),
            next_seat: 0,
            board_rng: rng.for_context("boards"),
            pouch,
            called: CalledNumbers::new(),
            winner: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player who won, kept as a record even after they leave.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn called(&self) -> &CalledNumbers {
        &self.called
    }

    /// Numbers still in the pouch.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pouch.remaining()
    }

    /// The first seated player still in the room.
    #[must_use]
    pub fn host(&self) -> Option<PlayerId> {
        self.seats.first()
    }

    /// Seats in join order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Seat)> {
        self.seats.iter()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn seat(&self, player: PlayerId) -> Option<&Seat> {
        self.seats.get(player)
    }

    #[must_use]
    pub fn board(&self, player: PlayerId) -> Option<&Board> {
        self.seat(player).map(|seat| seat.engine.board())
    }

    /// Seat a new player with a freshly generated board.
    pub fn join(&mut self, name: impl Into<String>) -> Result<PlayerId, RoomError> {
        if self.status != GameStatus::Waiting {
            return Err(RoomError::NotWaiting);
        }
        if self.seats.len() >= self.config.max_players {
            return Err(RoomError::RoomFull);
        }

        let raw = u8::try_from(self.next_seat).map_err(|_| RoomError::SeatsExhausted)?;
        let player = PlayerId::new(raw);
        self.next_seat += 1;

        let mut engine = BoardEngine::generate(&mut self.board_rng.fork(), self.config.board.clone());
        engine.set_disabled(true);

        let name = name.into();
        tracing::info!(room = %self.id, %player, name = %name, "player joined");
        self.seats.insert(
            player,
            Seat {
                name,
                ready: false,
                winner: false,
                engine,
            },
        );
        Ok(player)
    }

    /// Remove a player and their board.
    ///
    /// A game in progress finishes without a winner once the last player leaves.
    pub fn leave(&mut self, player: PlayerId) -> Result<(), RoomError> {
        self.seats.remove(player).ok_or(RoomError::UnknownPlayer(player))?;
        tracing::info!(room = %self.id, %player, "player left");

        if self.status == GameStatus::Playing && self.seats.is_empty() {
            self.set_status(GameStatus::Finished);
            tracing::info!(room = %self.id, "game abandoned");
        }
        Ok(())
    }

    pub fn set_ready(&mut self, player: PlayerId, ready: bool) -> Result<(), RoomError> {
        if self.status != GameStatus::Waiting {
            return Err(RoomError::NotWaiting);
        }
        let seat = self.seats.get_mut(player).ok_or(RoomError::UnknownPlayer(player))?;
        seat.ready = ready;
        Ok(())
    }

    /// Enough players are seated and all of them are ready.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.status == GameStatus::Waiting
            && self.seats.len() >= self.config.min_players
            && self.seats.iter().all(|(_, seat)| seat.ready)
    }

    /// Begin play. Boards become selectable.
    pub fn start(&mut self) -> Result<(), RoomError> {
        if self.status != GameStatus::Waiting {
            return Err(RoomError::NotWaiting);
        }
        if !self.can_start() {
            return Err(RoomError::CannotStart);
        }
        self.set_status(GameStatus::Playing);
        tracing::info!(room = %self.id, players = self.seats.len(), "game started");
        Ok(())
    }

    /// Draw the next number and re-derive every board.
    ///
    /// Returns `Ok(None)` once the pouch is empty.
    pub fn call_next(&mut self) -> Result<Option<u8>, RoomError> {
        if self.status != GameStatus::Playing {
            return Err(RoomError::NotPlaying);
        }
        let Some(number) = self.pouch.draw() else {
            return Ok(None);
        };

        self.called.push(number);
        for (_, seat) in self.seats.iter_mut() {
            seat.engine.sync_called(&self.called);
        }
        let label = call_label(number).unwrap_or_default();
        tracing::debug!(room = %self.id, call = %label, count = self.called.len(), "number called");
        Ok(Some(number))
    }

    /// Forward a selection to the player's board.
    ///
    /// A winning selection finishes the game with that player as winner.
    pub fn select(&mut self, player: PlayerId, row: usize, col: usize) -> Result<SelectOutcome, RoomError> {
        let seat = self.seats.get_mut(player).ok_or(RoomError::UnknownPlayer(player))?;
        let outcome = seat.engine.toggle_select(row, col)?;

        if let Some(line) = outcome.win {
            seat.winner = true;
            self.winner = Some(player);
            self.set_status(GameStatus::Finished);
            tracing::info!(room = %self.id, %player, %line, "game won");
        }
        Ok(outcome)
    }

    fn set_status(&mut self, status: GameStatus) {
        self.status = status;
        let disabled = status != GameStatus::Playing;
        for (_, seat) in self.seats.iter_mut() {
            seat.engine.set_disabled(disabled);
        }
    }
}
