//! Normalized read-only view over an engine.
//!
//! Agents and play loops consume the game exclusively through this
//! adapter: every query is phrased as "mine" and "the opponent's", so
//! a caller never needs to know which raw seat it occupies. Because
//! grids are stored per-player, the second seat's view is obtained by
//! swapping references — no coordinate flipping.

use serde::{Deserialize, Serialize};

use crate::board::{AvailableMoves, PlayerGrid, COLUMN_HEIGHT, GRID_COLUMNS};
use crate::engine::{GameEngine, GameResult};

/// How the game ended, from the viewing player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// The viewing player won.
    Win,
    /// The opponent won.
    Loss,
    /// Equal scores.
    Draw,
    /// The game is still in progress.
    Undetermined,
}

/// A serializable snapshot of what the current player can see: both
/// grids (self first) and the pending die. This is the state encoding
/// that value-table agents key on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The viewing player's cells, `[column][slot]`, slots sorted.
    pub my_cells: [[u8; COLUMN_HEIGHT]; GRID_COLUMNS],
    /// The opponent's cells, same layout.
    pub opponent_cells: [[u8; COLUMN_HEIGHT]; GRID_COLUMNS],
    /// Pending die value, 0 when no roll is in flight.
    pub dice_value: u8,
}

/// Read-only view of an engine from the current player's side.
#[derive(Clone, Copy, Debug)]
pub struct Perspective<'a> {
    engine: &'a GameEngine,
}

impl<'a> Perspective<'a> {
    /// Create a view over `engine` for its current player.
    #[must_use]
    pub fn new(engine: &'a GameEngine) -> Self {
        Self { engine }
    }

    /// The viewing player's grid.
    #[must_use]
    pub fn my_grid(&self) -> &'a PlayerGrid {
        self.engine.board().grid(self.engine.current_player())
    }

    /// The opponent's grid.
    #[must_use]
    pub fn opponent_grid(&self) -> &'a PlayerGrid {
        self.engine
            .board()
            .grid(self.engine.current_player().opponent())
    }

    /// The viewing player's score.
    #[must_use]
    pub fn my_score(&self) -> u32 {
        self.my_grid().score()
    }

    /// The opponent's score.
    #[must_use]
    pub fn opponent_score(&self) -> u32 {
        self.opponent_grid().score()
    }

    /// Both scores, self first.
    #[must_use]
    pub fn scores(&self) -> (u32, u32) {
        (self.my_score(), self.opponent_score())
    }

    /// The pending die value, if the turn has been started.
    #[must_use]
    pub fn dice_value(&self) -> Option<u8> {
        self.engine.dice_value()
    }

    /// Columns the viewing player can place into.
    #[must_use]
    pub fn available_moves(&self) -> AvailableMoves {
        self.engine.available_moves()
    }

    /// Did the viewing player win? [`MatchOutcome::Undetermined`]
    /// until the game is over.
    #[must_use]
    pub fn outcome(&self) -> MatchOutcome {
        match self.engine.result() {
            None => MatchOutcome::Undetermined,
            Some(GameResult::Draw) => MatchOutcome::Draw,
            Some(result) => {
                if result.is_winner(self.engine.current_player()) {
                    MatchOutcome::Win
                } else {
                    MatchOutcome::Loss
                }
            }
        }
    }

    /// Snapshot of the visible state for learning agents.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            my_cells: self.my_grid().cells(),
            opponent_cells: self.opponent_grid().cells(),
            dice_value: self.engine.dice_value().unwrap_or(0),
        }
    }
}
