//! Spatial data structures
//!
//! This module contains:
//! - The decision variable grid and its adjacency enumeration
//! - The solved assignment read back from the solver

/// Decision variable grid and adjacency enumeration
pub mod grid;
/// Solved tile assignment
pub mod solution;

pub use grid::{CellGrid, Direction};
pub use solution::Solution;
