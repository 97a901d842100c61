//! Directional moves built from the single row primitive
//!
//! Left slides every row, Right mirrors each row around the same slide, and
//! the vertical moves run their horizontal counterpart on the transposed grid.

use crate::engine::direction::Direction;
use crate::engine::grid::Grid;
use crate::engine::row::{RowSlide, slide_row_left, slide_row_right};

/// Summary of one directional move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// Whether any cell differs from the grid before the move
    pub changed: bool,
    /// Points earned by merges in rows that changed
    pub points_gained: u64,
    /// Whether a changed row contained a merge
    pub merged: bool,
}

/// Apply a move and return the resulting grid alongside its summary
///
/// When nothing can slide or merge the returned grid equals the input and
/// the result reports `changed = false` with no points.
pub fn apply_move(grid: &Grid, direction: Direction) -> (Grid, MoveResult) {
    match direction {
        Direction::Left => slide_rows(grid, slide_row_left),
        Direction::Right => slide_rows(grid, slide_row_right),
        Direction::Up => {
            let (moved, result) = slide_rows(&grid.transpose(), slide_row_left);
            (moved.transpose(), result)
        }
        Direction::Down => {
            let (moved, result) = slide_rows(&grid.transpose(), slide_row_right);
            (moved.transpose(), result)
        }
    }
}

/// Whether `direction` would change the grid
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    apply_move(grid, direction).1.changed
}

/// Directions that would change the grid, in [`Direction::ALL`] order
pub fn legal_moves(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| can_move(grid, direction))
        .collect()
}

fn slide_rows(grid: &Grid, slide: fn(&[u32]) -> RowSlide) -> (Grid, MoveResult) {
    let mut result = MoveResult::default();

    let rows: Vec<Vec<u32>> = grid
        .rows()
        .into_iter()
        .map(|row| {
            let slid = slide(&row);
            // Unchanged rows contribute nothing, mirroring the per-row comparison
            if slid.row != row {
                result.changed = true;
                result.points_gained += slid.points;
                result.merged |= slid.merged;
            }
            slid.row
        })
        .collect();

    if result.changed {
        (Grid::from_row_slices(&rows), result)
    } else {
        (grid.clone(), result)
    }
}
