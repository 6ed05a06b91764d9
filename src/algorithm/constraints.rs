//! Adjacency and target-ratio constraints over the cell grid

use crate::catalog::compatibility::CompatibilityTable;
use crate::catalog::tileset::TileCatalog;
use crate::io::configuration::{TARGET_LOWER_DIVISOR, TARGET_UPPER_DIVISOR};
use crate::io::error::{Result, invalid_parameter};
use crate::solver::model::{CpModel, PairList, TupleKind};
use crate::spatial::grid::{CellGrid, Direction};

/// Inclusive bounds on the number of cells holding the target value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatioBounds {
    /// Fewest target cells allowed
    pub lower: usize,
    /// Most target cells allowed
    pub upper: usize,
}

impl RatioBounds {
    /// Validated bounds for a grid of `total` cells
    ///
    /// # Errors
    ///
    /// Returns an error unless `lower <= upper <= total`
    pub fn new(lower: usize, upper: usize, total: usize) -> Result<Self> {
        if lower > upper {
            return Err(invalid_parameter(
                "lower",
                &lower,
                &format!("exceeds upper bound {upper}"),
            ));
        }
        if upper > total {
            return Err(invalid_parameter(
                "upper",
                &upper,
                &format!("exceeds the {total} cells of the grid"),
            ));
        }
        Ok(Self { lower, upper })
    }

    /// Between a quarter and a half of `total`, both rounded down
    pub const fn quarter_to_half(total: usize) -> Self {
        Self {
            lower: total / TARGET_LOWER_DIVISOR,
            upper: total / TARGET_UPPER_DIVISOR,
        }
    }

    /// Whether `count` lies within the bounds
    pub const fn contains(&self, count: usize) -> bool {
        self.lower <= count && count <= self.upper
    }
}

/// Restrict every pair of adjacent cells to compatible values
///
/// Each direction's listed pairs are registered with the table's own
/// polarity, so a forbidden list becomes forbidden assignments and an allowed
/// list becomes allowed assignments. Returns the number of constraints added.
pub fn encode_adjacency(model: &mut CpModel, grid: &CellGrid, table: &CompatibilityTable) -> usize {
    let mut added = 0;
    for direction in [Direction::Horizontal, Direction::Vertical] {
        let pairs = table.table(direction);
        let listed: PairList = pairs.listed_pairs().into();

        for vars in grid.pairs(direction) {
            match pairs.kind() {
                TupleKind::Allowed => model.add_allowed_assignments(vars, listed.clone()),
                TupleKind::Forbidden => model.add_forbidden_assignments(vars, listed.clone()),
            }
            added += 1;
        }
    }
    added
}

/// Bound how many cells take `target`
///
/// # Errors
///
/// Returns an error if the bounds are inconsistent with the grid size
pub fn encode_target_ratio(
    model: &mut CpModel,
    grid: &CellGrid,
    target: usize,
    bounds: RatioBounds,
) -> Result<()> {
    let indicators = grid
        .vars()
        .iter()
        .map(|&var| model.new_indicator(var, target))
        .collect();
    model.add_linear_bounds(indicators, bounds.lower, bounds.upper)
}

/// Adjacency rules plus the quarter-to-half target ratio for `catalog`
///
/// # Errors
///
/// Returns an error if the ratio bounds cannot be registered
pub fn encode_catalog(
    model: &mut CpModel,
    grid: &CellGrid,
    catalog: &TileCatalog,
) -> Result<RatioBounds> {
    let adjacency = encode_adjacency(model, grid, catalog.compatibility());
    let bounds = RatioBounds::quarter_to_half(grid.len());
    encode_target_ratio(model, grid, catalog.target(), bounds)?;

    tracing::debug!(
        adjacency,
        lower = bounds.lower,
        upper = bounds.upper,
        target = catalog.target(),
        "encoded constraints"
    );
    Ok(bounds)
}
