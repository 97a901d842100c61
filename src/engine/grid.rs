//! Square tile grid backed by an `ndarray` matrix
//!
//! Cells hold `0` for empty or a power of two of at least 2. Moves never
//! mutate a grid in place; they build a new one, which keeps the previous
//! board available for comparison and makes every move a pure function.

use std::fmt;

use ndarray::{Array2, Axis};

use crate::engine::row::can_merge;
use crate::io::error::{Result, invalid_grid};

/// Square board of tile values (0 = empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Array2<u32>,
}

impl Grid {
    /// Create an empty `size` x `size` grid
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::zeros((size, size)),
        }
    }

    /// Build a grid from explicit rows
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer than two rows are given
    /// - Any row length differs from the number of rows
    /// - Any non-zero value is not a power of two of at least 2
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
        let size = rows.len();
        if size < 2 {
            return Err(invalid_grid(&format!(
                "grid must have at least 2 rows, got {size}"
            )));
        }

        let mut flat = Vec::with_capacity(size * size);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(invalid_grid(&format!(
                    "row {index} has {} cells, expected {size}",
                    row.len()
                )));
            }
            if let Some(&bad) = row.iter().find(|&&value| !is_tile_value(value)) {
                return Err(invalid_grid(&format!(
                    "row {index} holds {bad}, which is not a tile value"
                )));
            }
            flat.extend_from_slice(row);
        }

        Array2::from_shape_vec((size, size), flat)
            .map(|cells| Self { cells })
            .map_err(|e| invalid_grid(&e))
    }

    // Rows are assembled by the move engine from same-length slides
    pub(crate) fn from_row_slices(rows: &[Vec<u32>]) -> Self {
        let size = rows.len();
        let mut cells = Array2::zeros((size, size));
        for (mut target, source) in cells.rows_mut().into_iter().zip(rows) {
            for (cell, &value) in target.iter_mut().zip(source) {
                *cell = value;
            }
        }
        Self { cells }
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Value at `[row, col]`, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get([row, col]).copied()
    }

    /// Overwrite the value at `[row, col]`
    ///
    /// Returns `false` without touching the grid when the position is outside
    /// the grid or the value is not a tile value.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> bool {
        if !is_tile_value(value) {
            return false;
        }
        self.cells.get_mut([row, col]).is_some_and(|cell| {
            *cell = value;
            true
        })
    }

    /// Copy of every row, top to bottom
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.cells.axis_iter(Axis(0)).map(|row| row.to_vec()).collect()
    }

    /// Matrix transpose; applying it twice yields the original grid
    pub fn transpose(&self) -> Self {
        Self {
            cells: self.cells.t().as_standard_layout().into_owned(),
        }
    }

    /// Coordinates `[row, col]` of every empty cell in row-major order
    pub fn empty_cells(&self) -> Vec<[usize; 2]> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &value)| value == 0)
            .map(|((row, col), _)| [row, col])
            .collect()
    }

    /// Whether every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Whether any move can still change the grid
    ///
    /// True when a cell is empty or two horizontally or vertically adjacent
    /// cells hold the same mergeable value.
    pub fn has_moves(&self) -> bool {
        if !self.is_full() {
            return true;
        }

        let horizontal = self.cells.rows().into_iter().any(|row| {
            row.iter()
                .zip(row.iter().skip(1))
                .any(|(&left, &right)| can_merge(left, right))
        });

        let vertical = self.cells.columns().into_iter().any(|col| {
            col.iter()
                .zip(col.iter().skip(1))
                .any(|(&upper, &lower)| can_merge(upper, lower))
        });

        horizontal || vertical
    }

    /// Whether any cell equals `value`
    pub fn contains_tile(&self, value: u32) -> bool {
        self.cells.iter().any(|&cell| cell == value)
    }

    /// Largest tile on the grid (0 for an empty grid)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().to_string().len().max(1);
        for row in self.cells.rows() {
            let line = row
                .iter()
                .map(|&value| {
                    if value == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{value:>width$}")
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Whether `value` may appear in a cell (zero or a power of two >= 2)
pub const fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}
