//! Structured error types for the engine surface.
//!
//! Three failure classes, surfaced synchronously and never retried
//! internally:
//!
//! - [`GameError::InvalidMove`] — recoverable; the caller may pick
//!   another column or forfeit the turn.
//! - [`GameError::GameOver`] — fatal to the session; the caller must
//!   start a new engine.
//! - [`GameError::TurnSequence`] — always a caller bug (a protocol call
//!   issued in the wrong phase). Surfaced loudly rather than swallowed,
//!   since a silently tolerated double-move or missed player switch
//!   corrupts every episode derived from the game.

use crate::core::player::PlayerId;

/// Errors returned by the board and the turn state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Placement targeted a full or out-of-range column in strict mode.
    #[error("invalid move: column {column} is full or out of range for {player}")]
    InvalidMove {
        /// Player that attempted the placement.
        player: PlayerId,
        /// Column index that was targeted.
        column: usize,
    },

    /// A turn-protocol call was issued after the game ended.
    #[error("the game is already over")]
    GameOver,

    /// A turn-protocol call was issued out of the required order.
    #[error("turn protocol violation: {call} called while {phase}")]
    TurnSequence {
        /// The call that was attempted.
        call: &'static str,
        /// Human-readable description of the phase the engine was in.
        phase: &'static str,
    },
}
