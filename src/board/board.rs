//! Board aggregate: two per-player grids plus the placement rules.
//!
//! Grids are stored per-player and column-major, so both seats see a
//! symmetric layout and no coordinate flipping is ever needed for the
//! second player. Placed-dice counts and scores are maintained
//! incrementally: counts make the fullness check O(1), and scores are
//! recomputed after every mutation so a caller can never observe a
//! stale value.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::column::{Column, COLUMN_HEIGHT};
use super::scoring::score_column;
use crate::core::{GameError, GameRng, PlayerId, PlayerPair};

/// Number of columns per grid.
pub const GRID_COLUMNS: usize = 3;

/// Total die capacity of one grid.
pub const GRID_CAPACITY: u8 = (GRID_COLUMNS * COLUMN_HEIGHT) as u8;

/// Default number of die faces.
pub const DEFAULT_DIE_FACES: u8 = 6;

/// Columns a player can legally place into, ascending, no duplicates.
/// At most 3 entries, so this never heap-allocates.
pub type AvailableMoves = SmallVec<[usize; GRID_COLUMNS]>;

/// One player's 3×3 grid with maintained dice count and cached score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGrid {
    columns: [Column; GRID_COLUMNS],
    placed: u8,
    score: u32,
}

impl PlayerGrid {
    /// The grid's columns.
    #[must_use]
    pub const fn columns(&self) -> &[Column; GRID_COLUMNS] {
        &self.columns
    }

    /// Number of dice currently on the grid (0..=9).
    #[must_use]
    pub const fn placed(&self) -> u8 {
        self.placed
    }

    /// Cached score, current as of the last mutation.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// True iff all nine slots hold dice.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.placed == GRID_CAPACITY
    }

    /// Grid cells in `[column][slot]` order, for state encoding.
    #[must_use]
    pub fn cells(&self) -> [[u8; COLUMN_HEIGHT]; GRID_COLUMNS] {
        [
            *self.columns[0].cells(),
            *self.columns[1].cells(),
            *self.columns[2].cells(),
        ]
    }

    fn rescore(&mut self) {
        self.score = self.columns.iter().map(score_column).sum();
    }
}

/// The full board: both grids plus rule configuration.
///
/// `strict` controls whether an illegal placement surfaces as
/// [`GameError::InvalidMove`] or is the caller's problem. Tolerant mode
/// exists only for training loops that pre-filter to legal moves and
/// never attempt an illegal one; it must never be the default for
/// human-facing or test paths.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    grids: PlayerPair<PlayerGrid>,
    die_faces: u8,
    remove_on_match: bool,
    strict: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_DIE_FACES, true, true)
    }
}

impl Board {
    /// Create an empty board.
    ///
    /// - `die_faces`: maximum die value (default 6)
    /// - `remove_on_match`: whether placing a die destroys matching
    ///   opponent dice in the same column index
    /// - `strict`: whether illegal placements surface as errors
    #[must_use]
    pub fn new(die_faces: u8, remove_on_match: bool, strict: bool) -> Self {
        assert!(die_faces >= 1, "die must have at least one face");
        Self {
            grids: PlayerPair::default(),
            die_faces,
            remove_on_match,
            strict,
        }
    }

    /// A player's grid.
    #[must_use]
    pub fn grid(&self, player: PlayerId) -> &PlayerGrid {
        &self.grids[player]
    }

    /// Maximum die value for this board.
    #[must_use]
    pub const fn die_faces(&self) -> u8 {
        self.die_faces
    }

    /// Whether the opponent-removal rule is enabled.
    #[must_use]
    pub const fn remove_on_match(&self) -> bool {
        self.remove_on_match
    }

    /// Whether illegal placements are validated.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Roll a die: uniform in `[1, die_faces]`. Not bound to a player.
    pub fn roll_die(&self, rng: &mut GameRng) -> u8 {
        rng.roll_die(self.die_faces)
    }

    /// True iff `column` is in range and has at least one empty slot
    /// for `player`. No side effects.
    #[must_use]
    pub fn is_valid_move(&self, player: PlayerId, column: usize) -> bool {
        column < GRID_COLUMNS && self.grids[player].columns[column].has_space()
    }

    /// Place a die for `player` in `column`.
    ///
    /// On success: writes the first empty slot, re-sorts the column,
    /// bumps the player's dice count; with `remove_on_match`, zeroes
    /// every matching cell in the opponent's same-index column and
    /// decrements the opponent's count accordingly; then recomputes
    /// both scores. The post-state is authoritative.
    ///
    /// In strict mode an illegal placement returns
    /// [`GameError::InvalidMove`]. In tolerant mode validation is
    /// skipped and an illegal call is undefined by design (the caller
    /// has pre-filtered); it is debug-asserted and otherwise left as a
    /// no-op rather than silently "fixed", so the asymmetry stays
    /// visible.
    pub fn place_die(
        &mut self,
        player: PlayerId,
        column: usize,
        value: u8,
    ) -> Result<(), GameError> {
        if self.strict && !self.is_valid_move(player, column) {
            return Err(GameError::InvalidMove { player, column });
        }
        debug_assert!(
            self.is_valid_move(player, column),
            "illegal placement reached a tolerant board"
        );
        debug_assert!(
            (1..=self.die_faces).contains(&value),
            "die value out of range"
        );

        let (mine, theirs) = self.grids.get_pair_mut(player);

        if !mine.columns[column].place(value) {
            // Tolerant mode with an unfiltered caller; strict mode
            // already rejected this above.
            return Ok(());
        }
        mine.placed += 1;

        if self.remove_on_match {
            let cleared = theirs.columns[column].remove_matching(value);
            theirs.placed -= cleared;
        }

        mine.rescore();
        theirs.rescore();
        Ok(())
    }

    /// True iff either grid is full. O(1) via the maintained counts.
    #[must_use]
    pub fn check_full(&self) -> bool {
        self.grids.iter().any(|(_, grid)| grid.is_full())
    }

    /// Both players' cached scores, seat 0 first.
    #[must_use]
    pub fn scores(&self) -> (u32, u32) {
        (
            self.grids[PlayerId::new(0)].score(),
            self.grids[PlayerId::new(1)].score(),
        )
    }

    /// Columns `player` can place into: ascending, no duplicates. The
    /// move space is "which column" — the slot within it is implied.
    #[must_use]
    pub fn available_moves(&self, player: PlayerId) -> AvailableMoves {
        self.grids[player]
            .columns
            .iter()
            .enumerate()
            .filter(|(_, col)| col.has_space())
            .map(|(i, _)| i)
            .collect()
    }

    /// Textual board dump: three row-major lines per grid, blank for
    /// empty cells, with a separator row between the two grids. A
    /// debug convenience, not a stable protocol.
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(COLUMN_HEIGHT * 2 + 1);
        for (player, grid) in self.grids.iter() {
            for row in 0..COLUMN_HEIGHT {
                let cells: Vec<String> = grid
                    .columns
                    .iter()
                    .map(|col| {
                        let v = col.cells()[row];
                        if v == 0 {
                            " ".to_string()
                        } else {
                            v.to_string()
                        }
                    })
                    .collect();
                lines.push(format!("| {} |", cells.join(" | ")));
            }
            if player.index() == 0 {
                lines.push("|---|---|---|".to_string());
            }
        }
        lines
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.display_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
