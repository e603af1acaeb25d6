//! Turn state machine.
//!
//! The engine wraps a [`Board`] with strict turn sequencing:
//!
//! ```text
//! AwaitingRoll --start_turn--> AwaitingMove --do_move--> Placed
//!      ^                            |                      |
//!      +-------- end_turn ----------+-------- end_turn ----+
//!                                   (or Over, once a grid is full)
//! ```
//!
//! Out-of-order calls fail with [`GameError::TurnSequence`] instead of
//! silently corrupting the board. This class of bug (forgetting to
//! switch players, or switching twice) is exactly what the protocol
//! exists to catch: a corrupted game poisons every episode derived
//! from it.
//!
//! `do_move` deliberately does not advance the turn. Callers inspect
//! post-move scores first (e.g. to attribute a training reward to the
//! move just made) and then call `end_turn` explicitly.

use serde::{Deserialize, Serialize};

use crate::board::{AvailableMoves, Board, DEFAULT_DIE_FACES};
use crate::core::{GameError, GameRng, PlayerId};
use crate::perspective::Perspective;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Where the engine is within the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TurnPhase {
    /// Waiting for `start_turn` to roll the die.
    AwaitingRoll,
    /// Die rolled, waiting for `do_move`.
    AwaitingMove(u8),
    /// Die placed this turn, waiting for `end_turn`.
    Placed,
    /// Game finished; only read accessors are legal.
    Over,
}

impl TurnPhase {
    const fn describe(self) -> &'static str {
        match self {
            TurnPhase::AwaitingRoll => "awaiting a roll",
            TurnPhase::AwaitingMove(_) => "awaiting a placement",
            TurnPhase::Placed => "a die was already placed this turn",
            TurnPhase::Over => "the game is over",
        }
    }
}

/// Builder for a [`GameEngine`].
///
/// ```
/// use knucklebones::engine::EngineBuilder;
///
/// let engine = EngineBuilder::new()
///     .die_faces(6)
///     .remove_on_match(true)
///     .build(42);
/// assert!(!engine.is_over());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EngineBuilder {
    die_faces: u8,
    remove_on_match: bool,
    strict: bool,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            die_faces: DEFAULT_DIE_FACES,
            remove_on_match: true,
            strict: true,
        }
    }
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum die value (default 6).
    pub fn die_faces(mut self, faces: u8) -> Self {
        assert!(faces >= 1, "die must have at least one face");
        self.die_faces = faces;
        self
    }

    /// Enable or disable the opponent-removal rule (default enabled).
    pub fn remove_on_match(mut self, enabled: bool) -> Self {
        self.remove_on_match = enabled;
        self
    }

    /// Opt out of placement validation. Only for callers that
    /// pre-filter to legal moves; strict stays the default.
    pub fn tolerant(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Build an engine seeded with `seed`. The first player is drawn
    /// pseudo-randomly from that seed.
    #[must_use]
    pub fn build(self, seed: u64) -> GameEngine {
        self.build_with_rng(GameRng::new(seed))
    }

    /// Build an engine driven by an existing RNG, typically a fork of
    /// a training harness's master stream.
    #[must_use]
    pub fn build_with_rng(self, mut rng: GameRng) -> GameEngine {
        let first = if rng.gen_range_usize(0..2) == 0 {
            PlayerId::new(0)
        } else {
            PlayerId::new(1)
        };
        GameEngine {
            board: Board::new(self.die_faces, self.remove_on_match, self.strict),
            rng,
            current_player: first,
            phase: TurnPhase::AwaitingRoll,
            turn_index: 0,
            result: None,
        }
    }
}

/// The game engine: one board plus turn-sequencing state.
///
/// Each game is an independently owned instance with no shared state,
/// so any number of games can run in parallel as long as each instance
/// is driven by a single logical thread of control.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: Board,
    rng: GameRng,
    current_player: PlayerId,
    phase: TurnPhase,
    turn_index: u32,
    result: Option<GameResult>,
}

impl GameEngine {
    /// Create an engine with default rules from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        EngineBuilder::new().build(seed)
    }

    /// Begin the current player's turn by rolling the die.
    ///
    /// Only legal in the awaiting-roll phase. Returns the rolled value.
    pub fn start_turn(&mut self) -> Result<u8, GameError> {
        match self.phase {
            TurnPhase::Over => Err(GameError::GameOver),
            TurnPhase::AwaitingRoll => {
                let value = self.board.roll_die(&mut self.rng);
                self.phase = TurnPhase::AwaitingMove(value);
                Ok(value)
            }
            phase => Err(GameError::TurnSequence {
                call: "start_turn",
                phase: phase.describe(),
            }),
        }
    }

    /// Place the pending die in `column` for the current player.
    ///
    /// Only legal after `start_turn` and before `end_turn`, at most
    /// once per turn. A strict-mode [`GameError::InvalidMove`] leaves
    /// the turn open so the caller can pick another column.
    pub fn do_move(&mut self, column: usize) -> Result<(), GameError> {
        match self.phase {
            TurnPhase::Over => Err(GameError::GameOver),
            TurnPhase::AwaitingMove(value) => {
                self.board.place_die(self.current_player, column, value)?;
                self.phase = TurnPhase::Placed;
                Ok(())
            }
            phase => Err(GameError::TurnSequence {
                call: "do_move",
                phase: phase.describe(),
            }),
        }
    }

    /// End the current player's turn.
    ///
    /// Legal after `start_turn`, with or without a placement (a caller
    /// may forfeit the roll as an invalid-move policy). If either grid
    /// is now full the game ends and the result is returned; otherwise
    /// the pending die is cleared and play passes to the other seat.
    pub fn end_turn(&mut self) -> Result<Option<GameResult>, GameError> {
        match self.phase {
            TurnPhase::Over => Err(GameError::GameOver),
            TurnPhase::AwaitingRoll => Err(GameError::TurnSequence {
                call: "end_turn",
                phase: TurnPhase::AwaitingRoll.describe(),
            }),
            TurnPhase::AwaitingMove(_) | TurnPhase::Placed => {
                if self.board.check_full() {
                    let (s0, s1) = self.board.scores();
                    let result = match s0.cmp(&s1) {
                        std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::new(0)),
                        std::cmp::Ordering::Less => GameResult::Winner(PlayerId::new(1)),
                        std::cmp::Ordering::Equal => GameResult::Draw,
                    };
                    self.phase = TurnPhase::Over;
                    self.result = Some(result);
                    Ok(Some(result))
                } else {
                    self.phase = TurnPhase::AwaitingRoll;
                    self.current_player = self.current_player.opponent();
                    self.turn_index += 1;
                    Ok(None)
                }
            }
        }
    }

    /// The player whose turn it is. Once the game is over, the player
    /// who made the final placement.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The pending die value, if a roll is in flight.
    #[must_use]
    pub fn dice_value(&self) -> Option<u8> {
        match self.phase {
            TurnPhase::AwaitingMove(value) => Some(value),
            _ => None,
        }
    }

    /// Number of completed turns.
    #[must_use]
    pub fn turn_index(&self) -> u32 {
        self.turn_index
    }

    /// True once the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// The game result, once over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// The underlying board (read-only).
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Available columns for the current player.
    #[must_use]
    pub fn available_moves(&self) -> AvailableMoves {
        self.board.available_moves(self.current_player)
    }

    /// A normalized read-only view for the current player.
    #[must_use]
    pub fn perspective(&self) -> Perspective<'_> {
        Perspective::new(self)
    }

    /// Fork an independent RNG stream off this engine's, e.g. for a
    /// random baseline agent playing in this game.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Single-faced die makes every roll a 1, so protocol tests are
    /// deterministic without mocking the RNG.
    fn fixed_die_engine(seed: u64) -> GameEngine {
        EngineBuilder::new().die_faces(1).build(seed)
    }

    #[test]
    fn test_initial_state() {
        let engine = GameEngine::new(42);
        assert!(!engine.is_over());
        assert_eq!(engine.result(), None);
        assert_eq!(engine.dice_value(), None);
        assert_eq!(engine.turn_index(), 0);
        assert_eq!(engine.available_moves().as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_first_player_varies_with_seed() {
        let seats: std::collections::HashSet<_> = (0..32u64)
            .map(|seed| GameEngine::new(seed).current_player())
            .collect();
        assert_eq!(seats.len(), 2, "both seats should start some games");
    }

    #[test]
    fn test_start_turn_sets_dice_value() {
        let mut engine = GameEngine::new(42);
        let rolled = engine.start_turn().unwrap();
        assert!((1..=6).contains(&rolled));
        assert_eq!(engine.dice_value(), Some(rolled));
    }

    #[test]
    fn test_full_turn_switches_player_once() {
        let mut engine = fixed_die_engine(42);
        let first = engine.current_player();

        engine.start_turn().unwrap();
        engine.do_move(0).unwrap();
        // Turn state does not advance until end_turn.
        assert_eq!(engine.current_player(), first);

        engine.end_turn().unwrap();
        assert_eq!(engine.current_player(), first.opponent());
        assert_eq!(engine.turn_index(), 1);
        assert_eq!(engine.dice_value(), None);
    }

    #[test]
    fn test_do_move_before_start_turn() {
        let mut engine = GameEngine::new(42);
        let err = engine.do_move(0).unwrap_err();
        assert!(matches!(err, GameError::TurnSequence { call: "do_move", .. }));
    }

    #[test]
    fn test_double_move_rejected() {
        let mut engine = fixed_die_engine(42);
        engine.start_turn().unwrap();
        engine.do_move(0).unwrap();

        let err = engine.do_move(1).unwrap_err();
        assert!(matches!(err, GameError::TurnSequence { call: "do_move", .. }));
    }

    #[test]
    fn test_double_start_turn_rejected() {
        let mut engine = GameEngine::new(42);
        engine.start_turn().unwrap();
        let err = engine.start_turn().unwrap_err();
        assert!(matches!(
            err,
            GameError::TurnSequence { call: "start_turn", .. }
        ));
    }

    #[test]
    fn test_end_turn_twice_rejected() {
        let mut engine = fixed_die_engine(42);
        engine.start_turn().unwrap();
        engine.do_move(0).unwrap();
        engine.end_turn().unwrap();

        let err = engine.end_turn().unwrap_err();
        assert!(matches!(err, GameError::TurnSequence { call: "end_turn", .. }));
    }

    #[test]
    fn test_end_turn_without_move_forfeits_roll() {
        let mut engine = fixed_die_engine(42);
        let first = engine.current_player();

        engine.start_turn().unwrap();
        engine.end_turn().unwrap();

        assert_eq!(engine.current_player(), first.opponent());
        assert_eq!(engine.board().grid(first).placed(), 0);
    }

    #[test]
    fn test_invalid_move_leaves_turn_open() {
        let mut engine = fixed_die_engine(42);

        // Fill the current player's column 0 across turns.
        for _ in 0..3 {
            while engine.current_player() != PlayerId::new(0) {
                engine.start_turn().unwrap();
                engine.end_turn().unwrap();
            }
            engine.start_turn().unwrap();
            engine.do_move(0).unwrap();
            engine.end_turn().unwrap();
        }

        while engine.current_player() != PlayerId::new(0) {
            engine.start_turn().unwrap();
            engine.end_turn().unwrap();
        }
        engine.start_turn().unwrap();
        let err = engine.do_move(0).unwrap_err();
        assert!(matches!(err, GameError::InvalidMove { .. }));

        // Same turn, different column: fine.
        engine.do_move(1).unwrap();
        engine.end_turn().unwrap();
    }

    #[test]
    fn test_game_runs_to_completion() {
        // Removal disabled so the game is exactly 18 placements.
        let mut engine = EngineBuilder::new()
            .remove_on_match(false)
            .build(7);
        let mut placements = 0;

        while !engine.is_over() {
            engine.start_turn().unwrap();
            let moves = engine.available_moves();
            assert!(!moves.is_empty(), "non-over game must have moves");
            engine.do_move(moves[0]).unwrap();
            placements += 1;
            engine.end_turn().unwrap();
        }

        // The starting player fills their ninth slot on the 17th
        // placement overall (9 own turns, 8 opponent turns).
        assert_eq!(placements, 17);
        assert!(engine.result().is_some());
        assert!(engine.start_turn().is_err());
    }

    #[test]
    fn test_calls_after_game_over_fail_with_game_over() {
        let mut engine = EngineBuilder::new().remove_on_match(false).build(7);
        while !engine.is_over() {
            engine.start_turn().unwrap();
            let moves = engine.available_moves();
            engine.do_move(moves[0]).unwrap();
            engine.end_turn().unwrap();
        }

        assert_eq!(engine.start_turn().unwrap_err(), GameError::GameOver);
        assert_eq!(engine.do_move(0).unwrap_err(), GameError::GameOver);
        assert_eq!(engine.end_turn().unwrap_err(), GameError::GameOver);
    }

    #[test]
    fn test_tie_is_draw() {
        // Ones only, no removal: both grids fill with nine 1s, and
        // each column scores 1. Equal totals must be a draw, never
        // either seat.
        let mut engine = EngineBuilder::new()
            .die_faces(1)
            .remove_on_match(false)
            .build(3);

        let mut last = None;
        while !engine.is_over() {
            engine.start_turn().unwrap();
            let moves = engine.available_moves();
            engine.do_move(moves[0]).unwrap();
            last = engine.end_turn().unwrap().or(last);
        }

        assert_eq!(last, Some(GameResult::Draw));
        assert_eq!(engine.result(), Some(GameResult::Draw));
        assert_eq!(engine.board().scores(), (3, 3));
    }

    #[test]
    fn test_winner_has_strictly_higher_score() {
        let mut engine = EngineBuilder::new().remove_on_match(false).build(99);
        while !engine.is_over() {
            engine.start_turn().unwrap();
            let moves = engine.available_moves();
            engine.do_move(moves[0]).unwrap();
            engine.end_turn().unwrap();
        }

        let (s0, s1) = engine.board().scores();
        match engine.result().unwrap() {
            GameResult::Winner(p) if p == PlayerId::new(0) => assert!(s0 > s1),
            GameResult::Winner(_) => assert!(s1 > s0),
            GameResult::Draw => assert_eq!(s0, s1),
        }
    }

    #[test]
    fn test_deterministic_replay() {
        let run = |seed: u64| {
            let mut engine = GameEngine::new(seed);
            let mut rolls = Vec::new();
            while !engine.is_over() {
                rolls.push(engine.start_turn().unwrap());
                let moves = engine.available_moves();
                engine.do_move(moves[0]).unwrap();
                engine.end_turn().unwrap();
            }
            (rolls, engine.board().scores(), engine.result())
        };

        assert_eq!(run(12345), run(12345));
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::new(0)));
        assert!(!draw.is_winner(PlayerId::new(1)));
    }
}
