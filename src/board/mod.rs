//! Board data model: columns, scoring, and the two-grid aggregate.

pub mod board;
pub mod column;
pub mod scoring;

pub use board::{
    AvailableMoves, Board, PlayerGrid, DEFAULT_DIE_FACES, GRID_CAPACITY, GRID_COLUMNS,
};
pub use column::{Column, COLUMN_HEIGHT};
pub use scoring::score_column;
