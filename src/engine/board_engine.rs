//! Per-player board state machine.
//!
//! `BoardEngine` wraps a `Board` with the rules that depend on the game
//! around it:
//!
//! - a `disabled` gate (the game is not in progress)
//! - a one-shot win signal, raised only on the transition into a win
//! - an optional terminal "won" state that freezes the board
//!
//! ```
//! use bingo_engine::{Board, BoardConfig, BoardEngine};
//!
//! let board = Board::from_rows([
//!     [1, 16, 31, 46, 61],
//!     [2, 17, 32, 47, 62],
//!     [3, 18, 0, 48, 63],
//!     [4, 19, 34, 49, 64],
//!     [5, 20, 35, 50, 65],
//! ]).unwrap();
//! let mut engine = BoardEngine::with_board(board, BoardConfig::default());
//!
//! engine.update_called(&[3, 18, 48, 63]);
//! for col in [0, 1, 3] {
//!     assert!(engine.toggle_select(2, col).unwrap().win.is_none());
//! }
//! let outcome = engine.toggle_select(2, 4).unwrap();
//! assert!(outcome.win.is_some());
//! ```

use serde::Serialize;

use crate::board::{Board, Coord, SelectError, WinLine};
use crate::caller::CalledNumbers;
use crate::core::{BoardConfig, BoardRng};

/// Result of an accepted selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SelectOutcome {
    /// The cell that flipped.
    pub coord: Coord,
    /// Its selection state after the flip.
    pub selected: bool,
    /// Set only when this toggle moved the board into a winning state.
    pub win: Option<WinLine>,
}

/// A single player's board plus its gating and win state.
#[derive(Clone, Debug)]
pub struct BoardEngine {
    board: Board,
    config: BoardConfig,
    disabled: bool,
    /// First complete line after the last accepted toggle.
    winning: Option<WinLine>,
    frozen: bool,
}

impl BoardEngine {
    /// Generate a fresh board from `rng`.
    pub fn generate(rng: &mut BoardRng, config: BoardConfig) -> Self {
        let board = Board::generate(rng, config.generation);
        Self::with_board(board, config)
    }

    /// Wrap an existing board. Starts enabled.
    #[must_use]
    pub fn with_board(board: Board, config: BoardConfig) -> Self {
        let winning = board.winning_line();
        let frozen = winning.is_some() && config.freeze_on_win;
        Self {
            board,
            config,
            disabled: false,
            winning,
            frozen,
        }
    }

    /// Current board snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// True once a win has frozen the board.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Re-derive `called` from the full called sequence.
    pub fn update_called(&mut self, called: &[u8]) {
        self.board.derive_called(called);
    }

    /// Re-derive `called` from a `CalledNumbers` history.
    pub fn sync_called(&mut self, called: &CalledNumbers) {
        self.board.derive_called_by(|n| called.contains(n));
    }

    /// Handle a selection request at `(row, col)`.
    ///
    /// On rejection nothing changes. On success exactly one cell flips and
    /// `SelectOutcome::win` reports a newly completed line, if any.
    pub fn toggle_select(&mut self, row: usize, col: usize) -> Result<SelectOutcome, SelectError> {
        let coord = Coord::new(row, col).ok_or(SelectError::InvalidCoordinate { row, col })?;
        self.toggle_at(coord).map_err(|e| {
            tracing::debug!(%coord, error = %e, "selection rejected");
            e
        })
    }

    /// Re-derive `called` and handle a selection in one step, so the
    /// selection is always checked against the latest calls.
    pub fn select_with_called(
        &mut self,
        called: &[u8],
        row: usize,
        col: usize,
    ) -> Result<SelectOutcome, SelectError> {
        self.update_called(called);
        self.toggle_select(row, col)
    }

    fn toggle_at(&mut self, coord: Coord) -> Result<SelectOutcome, SelectError> {
        if self.disabled {
            return Err(SelectError::EngineDisabled);
        }
        if self.frozen {
            return Err(SelectError::AlreadyWon);
        }

        let selected = self.board.toggle(coord)?;

        let line = self.board.winning_line();
        let win = match (self.winning, line) {
            (None, Some(line)) => Some(line),
            _ => None,
        };
        self.winning = line;

        if let Some(line) = win {
            tracing::info!(%line, "bingo");
            if self.config.freeze_on_win {
                self.frozen = true;
            }
        }

        Ok(SelectOutcome { coord, selected, win })
    }

    /// True if any line is complete.
    #[must_use]
    pub fn check_win(&self) -> bool {
        self.board.check_win()
    }

    /// First complete line in evaluation order.
    #[must_use]
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning
    }
}
