//! The capability interface external agents implement.
//!
//! Q-table agents, deep networks, and scripted baselines all look the
//! same to a play loop: something that selects a column from a
//! [`Perspective`] and optionally learns from transitions. Agents
//! consume only the perspective — never raw board or engine fields —
//! so they cannot depend on which seat they occupy.

pub mod random;

use crate::perspective::{GameSnapshot, MatchOutcome, Perspective};

pub use random::RandomAgent;

/// One learning step: the visible state before and after an action,
/// with the reward the harness attributed to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Visible state when the move was chosen.
    pub state: GameSnapshot,
    /// Column that was played.
    pub action: usize,
    /// Reward attributed to the move by the training harness.
    pub reward: f64,
    /// Visible state after the move (and any opponent reply).
    pub next_state: GameSnapshot,
    /// Whether `next_state` is terminal.
    pub terminal: bool,
    /// Outcome from the agent's side, `Undetermined` if not terminal.
    pub outcome: MatchOutcome,
}

/// A move-selecting player.
pub trait Agent {
    /// Choose a column to place the pending die into.
    ///
    /// The perspective is guaranteed to offer at least one available
    /// move when this is called.
    fn select_move(&mut self, view: &Perspective<'_>) -> usize;

    /// Consume one transition. Baselines and humans ignore this;
    /// learning agents update their value estimates.
    fn learn(&mut self, transition: &Transition) {
        let _ = transition;
    }
}
