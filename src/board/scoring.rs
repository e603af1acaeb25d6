//! Column scoring.
//!
//! Knucklebones scores each column from die multiplicities:
//!
//! - all three equal (non-zero): `value³`
//! - exactly two equal (non-zero): `value² + third cell`
//! - all distinct: sum of the cells
//!
//! Zeros (empty slots) contribute nothing and never form a pair. The
//! all-three-equal case must be checked before the pair case, since a
//! triple would otherwise be double-counted as a pair.

use super::column::Column;

/// Score a single column.
///
/// Pure function, reusable standalone for analysis and tests.
///
/// ```
/// use knucklebones::board::{score_column, Column};
///
/// assert_eq!(score_column(&Column::from_cells([2, 2, 2])), 8);
/// assert_eq!(score_column(&Column::from_cells([3, 3, 5])), 14);
/// assert_eq!(score_column(&Column::from_cells([1, 2, 3])), 6);
/// ```
#[must_use]
pub fn score_column(column: &Column) -> u32 {
    let [a, b, c] = *column.cells();
    let (a, b, c) = (a as u32, b as u32, c as u32);

    // Triple first: it is a special case of the pair rule.
    if a == b && b == c && a != 0 {
        return a * a * a;
    }

    // Cells are sorted, so equal values are adjacent. The odd cell out
    // may be zero and then contributes nothing.
    if b == c && b != 0 {
        return b * b + a;
    }
    if a == b && a != 0 {
        return a * a + c;
    }

    a + b + c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(cells: [u8; 3]) -> u32 {
        score_column(&Column::from_cells(cells))
    }

    #[test]
    fn test_triple_cubes() {
        assert_eq!(score([2, 2, 2]), 8);
        assert_eq!(score([6, 6, 6]), 216);
        assert_eq!(score([1, 1, 1]), 1);
    }

    #[test]
    fn test_pair_squares_plus_remainder() {
        assert_eq!(score([2, 2, 0]), 4);
        assert_eq!(score([3, 3, 5]), 14);
        assert_eq!(score([5, 3, 3]), 14);
        assert_eq!(score([6, 6, 1]), 37);
    }

    #[test]
    fn test_distinct_sums() {
        assert_eq!(score([1, 2, 3]), 6);
        assert_eq!(score([0, 4, 6]), 10);
        assert_eq!(score([0, 0, 5]), 5);
    }

    #[test]
    fn test_empty_column_scores_zero() {
        assert_eq!(score([0, 0, 0]), 0);
    }

    #[test]
    fn test_zeros_never_pair() {
        // Two empties plus a die is just the die, not 0² + die.
        assert_eq!(score([0, 0, 3]), 3);
    }

    #[test]
    fn test_exhaustive_triples_beat_pairs() {
        // A triple must never be scored by the pair rule.
        for v in 1..=6u8 {
            let triple = score([v, v, v]);
            let v32 = v as u32;
            assert_eq!(triple, v32 * v32 * v32);
            assert_ne!(triple, v32 * v32 + v32);
        }
    }
}
