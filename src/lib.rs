//! Constraint-based tile map generation
//!
//! A grid of integer cell variables is constrained so that neighbouring tiles
//! are compatible and a target tile covers between a quarter and a half of the
//! map. Random hints steer the solver toward varied layouts, and the solved
//! grid is painted from a sprite sheet into a PNG.

#![forbid(unsafe_code)]

/// Model building: adjacency and ratio constraints, hint seeding, the pipeline
pub mod algorithm;
/// Tile catalogs, edge descriptors and compatibility tables
pub mod catalog;
/// Input/output operations, logging and error handling
pub mod io;
/// Backend-neutral constraint model and its SAT lowering
pub mod solver;
/// Cell grids and solved maps
pub mod spatial;

pub use io::error::{GenerationError, Result};
