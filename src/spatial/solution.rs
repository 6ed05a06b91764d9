//! Solved tile assignment

use crate::catalog::compatibility::CompatibilityTable;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{CellGrid, Direction};
use ndarray::Array2;

/// Adjacent cells holding an incompatible pair of values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Violation {
    /// Cell whose right or lower neighbour conflicts, as `(x, y)`
    pub cell: (usize, usize),
    /// Which neighbour conflicts
    pub direction: Direction,
    /// Values as `[own, neighbour]`
    pub values: [usize; 2],
}

/// Concrete value per cell, indexed `[row, column]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    tiles: Array2<usize>,
}

impl Solution {
    /// Arrange solver values (in variable order) onto the grid
    ///
    /// # Errors
    ///
    /// Returns an error if a grid variable has no value
    pub fn from_values(grid: &CellGrid, values: &[usize]) -> Result<Self> {
        let mut tiles = Array2::zeros((grid.height(), grid.width()));
        for ((row, col), slot) in tiles.indexed_iter_mut() {
            let value = grid
                .var_at(col, row)
                .and_then(|var| values.get(var.index()))
                .ok_or_else(|| {
                    invalid_parameter(
                        "values",
                        &values.len(),
                        &format!("no value for cell ({col}, {row})"),
                    )
                })?;
            *slot = *value;
        }
        Ok(Self { tiles })
    }

    /// Wrap an existing `[row, column]` array
    pub const fn from_array(tiles: Array2<usize>) -> Self {
        Self { tiles }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Value at `(x, y)`
    pub fn value_at(&self, x: usize, y: usize) -> Option<usize> {
        self.tiles.get([y, x]).copied()
    }

    /// Underlying `[row, column]` array
    pub const fn tiles(&self) -> &Array2<usize> {
        &self.tiles
    }

    /// Cells in row-major order as `(x, y, value)`
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|((row, col), &value)| (col, row, value))
    }

    /// Number of cells holding `value`
    pub fn count_of(&self, value: usize) -> usize {
        self.tiles.iter().filter(|&&tile| tile == value).count()
    }

    /// Every adjacent pair the table rejects
    pub fn violations(&self, table: &CompatibilityTable) -> Vec<Violation> {
        let mut found = Vec::new();
        for (x, y, value) in self.cells() {
            let neighbours = [
                (Direction::Horizontal, self.value_at(x + 1, y)),
                (Direction::Vertical, self.value_at(x, y + 1)),
            ];
            for (direction, neighbour) in neighbours {
                let Some(other) = neighbour else {
                    continue;
                };
                if !table.allows(direction, value, other) {
                    found.push(Violation {
                        cell: (x, y),
                        direction,
                        values: [value, other],
                    });
                }
            }
        }
        found
    }
}
