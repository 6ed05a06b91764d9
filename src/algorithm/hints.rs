//! Random starting assignment used to bias the search
//!
//! Without hints the solver tends to settle on near-uniform maps. A random
//! value per cell gives it a varied place to start; hints are never enforced
//! and need not satisfy any constraint.

use crate::solver::model::CpModel;
use crate::spatial::grid::CellGrid;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded generator, or one drawn from OS entropy when no seed is given
pub fn hint_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// One uniform value in `[0, domain_size - 1]` per cell, row-major
///
/// An empty domain yields no hints.
pub fn random_hints<R: Rng + ?Sized>(
    grid: &CellGrid,
    domain_size: usize,
    rng: &mut R,
) -> Vec<usize> {
    if domain_size == 0 {
        return Vec::new();
    }
    (0..grid.len())
        .map(|_| rng.random_range(0..domain_size))
        .collect()
}

/// Register a random hint for every cell and return the hinted values
pub fn seed_hints<R: Rng + ?Sized>(
    model: &mut CpModel,
    grid: &CellGrid,
    domain_size: usize,
    rng: &mut R,
) -> Vec<usize> {
    let hints = random_hints(grid, domain_size, rng);
    for (&var, &value) in grid.vars().iter().zip(&hints) {
        model.add_hint(var, value);
    }
    hints
}
