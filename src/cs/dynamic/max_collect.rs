use crate::error::{Error, Result};

/// Finds the maximum value collectable in one pass through `grid` from the
/// top-left to the bottom-right corner, moving only right or down.
///
/// `dp[r][c]` is the best collect for a path ending at `(r, c)`; each cell
/// takes the better of its upper and left neighbour and adds its own value.
/// O(m·n) time and space for an m×n grid.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the grid has no rows, no columns, or
/// rows of unequal length. Validation happens before any computation.
///
/// # Examples
///
/// ```
/// use algo_classics::cs::dynamic::max_collect::max_collect;
///
/// let grid = vec![
///     vec![1, 3, 1],
///     vec![1, 5, 1],
///     vec![4, 2, 1],
/// ];
/// // best path: 1 -> 3 -> 5 -> 2 -> 1
/// assert_eq!(max_collect(&grid), Ok(12));
/// ```
pub fn max_collect(grid: &[Vec<i64>]) -> Result<i64> {
    if grid.is_empty() || grid[0].is_empty() {
        return Err(Error::InvalidInput(
            "grid must contain at least one element".to_string(),
        ));
    }
    let rows = grid.len();
    let cols = grid[0].len();
    if grid.iter().any(|row| row.len() != cols) {
        return Err(Error::InvalidInput(
            "grid rows must all have the same length".to_string(),
        ));
    }

    // subproblem solutions, filled top left -> bottom right
    let mut dp = vec![vec![0_i64; cols]; rows];
    for r in 0..rows {
        for c in 0..cols {
            let from_up = if r > 0 { dp[r - 1][c] } else { 0 };
            let from_left = if c > 0 { dp[r][c - 1] } else { 0 };

            // best way to get here, plus this position's value
            dp[r][c] = from_up.max(from_left) + grid[r][c];
        }
    }

    Ok(dp[rows - 1][cols - 1])
}
