//! Decision variable grid
//!
//! One integer variable per map cell, stored row-major so that the cell at
//! `(x, y)` owns variable `y * width + x`.

use crate::solver::model::{CpModel, IntVar};

/// Direction in which two cells touch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(x, y)` is left of `(x + 1, y)`
    Horizontal,
    /// `(x, y)` is above `(x, y + 1)`
    Vertical,
}

/// Width x height arrangement of decision variables
#[derive(Clone, Debug)]
pub struct CellGrid {
    width: usize,
    height: usize,
    vars: Vec<IntVar>,
}

impl CellGrid {
    /// Allocate one variable with domain `[0, domain_size - 1]` per cell
    pub fn build(model: &mut CpModel, width: usize, height: usize, domain_size: usize) -> Self {
        let mut vars = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                vars.push(model.new_int_var(domain_size, format!("[{x},{y}]")));
            }
        }

        Self {
            width,
            height,
            vars,
        }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total cell count
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Whether the grid has no cells
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Variables in row-major order
    pub fn vars(&self) -> &[IntVar] {
        &self.vars
    }

    /// Variable owned by the cell at `(x, y)`
    pub fn var_at(&self, x: usize, y: usize) -> Option<IntVar> {
        if x < self.width && y < self.height {
            self.vars.get(y * self.width + x).copied()
        } else {
            None
        }
    }

    /// Every horizontally adjacent `(left, right)` pair, once
    pub fn horizontal_pairs(&self) -> impl Iterator<Item = [IntVar; 2]> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width.saturating_sub(1))
                .filter_map(move |x| Some([self.var_at(x, y)?, self.var_at(x + 1, y)?]))
        })
    }

    /// Every vertically adjacent `(upper, lower)` pair, once
    pub fn vertical_pairs(&self) -> impl Iterator<Item = [IntVar; 2]> + '_ {
        (0..self.width).flat_map(move |x| {
            (0..self.height.saturating_sub(1))
                .filter_map(move |y| Some([self.var_at(x, y)?, self.var_at(x, y + 1)?]))
        })
    }

    /// Adjacent pairs in `direction`
    pub fn pairs(&self, direction: Direction) -> Box<dyn Iterator<Item = [IntVar; 2]> + '_> {
        match direction {
            Direction::Horizontal => Box::new(self.horizontal_pairs()),
            Direction::Vertical => Box::new(self.vertical_pairs()),
        }
    }
}
