//! Uniform-random baseline agent.

use super::Agent;
use crate::core::GameRng;
use crate::perspective::Perspective;

/// Picks uniformly among available columns. The baseline opponent for
/// training runs and a sanity check that games always terminate.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create a random agent with its own seeded stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a random agent from an existing RNG, typically a fork of
    /// the harness's master stream.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, view: &Perspective<'_>) -> usize {
        let moves = view.available_moves();
        *self
            .rng
            .choose(&moves)
            .expect("select_move requires at least one available move")
    }
}
