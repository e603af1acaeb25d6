//! # knucklebones
//!
//! A Knucklebones dice-placement game engine built for RL training.
//!
//! Two players own separate 3×3 grids. Each turn a player rolls a die
//! and places it into one of their three columns; placing a value that
//! matches opponent dice in the same column index destroys those dice.
//! The game ends when either grid is full, and columns score on die
//! multiplicities (doubles square, triples cube).
//!
//! ## Design Principles
//!
//! 1. **Strict turn protocol**: `start_turn` → `do_move` → `end_turn`,
//!    enforced by a state machine. Out-of-order calls fail loudly
//!    instead of silently corrupting training episodes.
//!
//! 2. **Perspective symmetry**: grids are stored per-player, so both
//!    seats see the same normalized view through the perspective
//!    adapter — no coordinate flipping, no seat awareness in agents.
//!
//! 3. **Deterministic by seed**: all randomness flows through a
//!    seeded, forkable RNG; any episode can be replayed exactly.
//!
//! ## Modules
//!
//! - `core`: players, RNG, errors
//! - `board`: column model, scoring, the two-grid aggregate
//! - `engine`: turn state machine
//! - `perspective`: normalized read-only view for consumers
//! - `agent`: the capability interface agents implement, plus a
//!   random baseline

pub mod agent;
pub mod board;
pub mod core;
pub mod engine;
pub mod perspective;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, GameRngState, PlayerId, PlayerPair, PLAYER_COUNT};

pub use crate::board::{
    score_column, AvailableMoves, Board, Column, PlayerGrid, COLUMN_HEIGHT, DEFAULT_DIE_FACES,
    GRID_CAPACITY, GRID_COLUMNS,
};

pub use crate::engine::{EngineBuilder, GameEngine, GameResult};

pub use crate::perspective::{GameSnapshot, MatchOutcome, Perspective};

pub use crate::agent::{Agent, RandomAgent, Transition};
