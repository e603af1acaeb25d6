//! Turn state machine wrapping the board.

pub mod game;

pub use game::{EngineBuilder, GameEngine, GameResult};
