//! Core engine types: players, RNG, errors.
//!
//! This module contains the fundamental building blocks shared by the
//! board and the turn state machine.

pub mod error;
pub mod player;
pub mod rng;

pub use error::GameError;
pub use player::{PlayerId, PlayerPair, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
