//! Column cell model.
//!
//! A column holds three die faces, `0` meaning empty. After any mutation
//! the cells are kept sorted ascending, so empty slots lead and
//! `cells[0] == 0` is an O(1) "has space" check. Slot order never
//! affects scoring, which only looks at multiplicities.

use serde::{Deserialize, Serialize};

/// Number of die slots per column.
pub const COLUMN_HEIGHT: usize = 3;

/// One column of a player's grid: three cells, sorted ascending.
///
/// Cell values are `0` (empty) or `1..=max_die_value`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    cells: [u8; COLUMN_HEIGHT],
}

impl Column {
    /// An empty column.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [0; COLUMN_HEIGHT],
        }
    }

    /// Build a column from raw cells, normalizing to sorted order.
    /// Intended for tests and state restoration.
    #[must_use]
    pub fn from_cells(mut cells: [u8; COLUMN_HEIGHT]) -> Self {
        cells.sort_unstable();
        Self { cells }
    }

    /// The cells, sorted ascending with empties first.
    #[must_use]
    pub const fn cells(&self) -> &[u8; COLUMN_HEIGHT] {
        &self.cells
    }

    /// True iff the column has at least one empty slot.
    ///
    /// Cells are sorted, so an empty slot is always at index 0.
    #[must_use]
    pub const fn has_space(&self) -> bool {
        self.cells[0] == 0
    }

    /// Number of placed (non-zero) dice in this column.
    #[must_use]
    pub fn filled(&self) -> u8 {
        self.cells.iter().filter(|&&c| c != 0).count() as u8
    }

    /// Place a die into the first empty slot and re-sort.
    ///
    /// Returns `false` without mutating if the column is full. The
    /// caller decides whether that is an error (strict mode) or a
    /// pre-filtered impossibility (tolerant mode).
    pub fn place(&mut self, value: u8) -> bool {
        if !self.has_space() {
            return false;
        }
        self.cells[0] = value;
        self.cells.sort_unstable();
        true
    }

    /// Zero every cell equal to `value`, re-sort, and return the number
    /// of cells cleared (0..=3).
    pub fn remove_matching(&mut self, value: u8) -> u8 {
        debug_assert!(value != 0, "cannot remove empty cells");
        let mut removed = 0;
        for cell in &mut self.cells {
            if *cell == value {
                *cell = 0;
                removed += 1;
            }
        }
        if removed > 0 {
            self.cells.sort_unstable();
        }
        removed
    }
}
