//! Tile catalogs and their adjacency rules
//!
//! A catalog fixes the value domain of every cell, which sprite each value is
//! drawn with, which value the ratio constraint counts, and which values may
//! sit next to each other.

/// Pairwise compatibility tables
pub mod compatibility;
/// Edge descriptors and the edge-matched transition catalog
pub mod edges;
/// TOML catalog files
pub mod file;
/// Terrain alphabet and the three-terrain catalog
pub mod terrain;
/// Catalog container and tile entries
pub mod tileset;

pub use compatibility::{CompatibilityTable, PairTable};
pub use edges::{EdgeDescriptor, EdgeLabel, edge_catalog};
pub use terrain::{Terrain, terrain_catalog};
pub use tileset::{SpriteCoord, TileCatalog, TileSpec};
