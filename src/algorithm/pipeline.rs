//! Linear generation pipeline: variables, constraints, hints, solve

use crate::algorithm::constraints::{RatioBounds, encode_catalog};
use crate::algorithm::hints::{hint_rng, seed_hints};
use crate::catalog::tileset::TileCatalog;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::solver::backend::Backend;
use crate::solver::model::CpModel;
use crate::spatial::grid::CellGrid;
use crate::spatial::solution::Solution;

/// Map dimensions and hint seed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Cells along X
    pub width: usize,
    /// Cells along Y
    pub height: usize,
    /// Hint seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Check both dimensions lie in `1..=MAX_GRID_DIMENSION`
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending dimension
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        Ok(())
    }
}

/// Fully built model ready to hand to a backend
#[derive(Clone, Debug)]
pub struct PreparedModel {
    /// Variables, constraints and hints
    pub model: CpModel,
    /// Cell to variable mapping
    pub grid: CellGrid,
    /// Bounds placed on the target count
    pub bounds: RatioBounds,
    /// Hinted value per cell, row-major
    pub hints: Vec<usize>,
}

/// Build variables, constraints and hints for `catalog`
///
/// # Errors
///
/// Returns an error if the configuration is invalid
pub fn build_model(catalog: &TileCatalog, config: &GeneratorConfig) -> Result<PreparedModel> {
    config.validate()?;

    let mut model = CpModel::new();
    let grid = CellGrid::build(&mut model, config.width, config.height, catalog.len());
    let bounds = encode_catalog(&mut model, &grid, catalog)?;

    let mut rng = hint_rng(config.seed);
    let hints = seed_hints(&mut model, &grid, catalog.len(), &mut rng);

    tracing::info!(
        catalog = catalog.name(),
        width = config.width,
        height = config.height,
        tiles = catalog.len(),
        constraints = model.tuple_constraints().len(),
        "built constraint model"
    );

    Ok(PreparedModel {
        model,
        grid,
        bounds,
        hints,
    })
}

/// Solve a prepared model and read back the assignment
///
/// # Errors
///
/// Returns [`Unsolvable`](crate::GenerationError::Unsolvable) unless the
/// backend reports a satisfying status
pub fn solve_model<B: Backend + ?Sized>(
    prepared: &PreparedModel,
    backend: &mut B,
) -> Result<Solution> {
    let outcome = backend.solve(&prepared.model);
    tracing::info!(status = %outcome.status(), "solver finished");

    let values = outcome.into_values()?;
    Solution::from_values(&prepared.grid, &values)
}

/// Build and solve in one step
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the model is unsolvable
pub fn generate<B: Backend + ?Sized>(
    catalog: &TileCatalog,
    config: &GeneratorConfig,
    backend: &mut B,
) -> Result<Solution> {
    let prepared = build_model(catalog, config)?;
    let solution = solve_model(&prepared, backend)?;
    audit(&solution, catalog, prepared.bounds);
    Ok(solution)
}

/// Check a solution against the catalog rules, logging any breach
///
/// Returns true when every adjacency holds and the target count is in bounds.
pub fn audit(solution: &Solution, catalog: &TileCatalog, bounds: RatioBounds) -> bool {
    let violations = solution.violations(catalog.compatibility());
    if !violations.is_empty() {
        tracing::warn!(count = violations.len(), "solution breaks adjacency rules");
    }

    let target_count = solution.count_of(catalog.target());
    let in_bounds = bounds.contains(target_count);
    if !in_bounds {
        tracing::warn!(
            target_count,
            lower = bounds.lower,
            upper = bounds.upper,
            "solution breaks target ratio"
        );
    }

    violations.is_empty() && in_bounds
}
