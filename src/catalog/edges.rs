//! Edge descriptors and the edge-matched transition catalog
//!
//! Every tile edge is labelled corner, middle, corner with one terrain symbol
//! each, read left to right for horizontal edges and top to bottom for
//! vertical ones. A corner tile with rock along its top and left and grass
//! elsewhere looks like this:
//!
//! ```text
//!   r   r   r
//!  +---------+
//! r|rrrrrrrrr|r
//!  |rgggggggg|
//! r|rgggggggg|g
//!  |rgggggggg|
//! r|rgggggggg|g
//!  +---------+
//!   r   g   g
//! ```
//!
//! giving `up = rrr`, `down = rgg`, `left = rrr`, `right = rgg`. Two tiles may
//! touch when the shared edge carries the same label on both sides.

use crate::catalog::compatibility::CompatibilityTable;
use crate::catalog::terrain::Terrain;
use crate::catalog::tileset::{SpriteCoord, TileCatalog, TileSpec};
use crate::io::error::{GenerationError, Result, invalid_catalog};
use std::fmt;
use std::str::FromStr;

/// Corner, middle, corner composition of one tile edge
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeLabel(pub [Terrain; 3]);

impl FromStr for EdgeLabel {
    type Err = GenerationError;

    fn from_str(label: &str) -> Result<Self> {
        let symbols: Vec<Terrain> = label
            .chars()
            .map(|symbol| {
                Terrain::from_symbol(symbol).ok_or_else(|| {
                    invalid_catalog(&format!("unknown terrain symbol '{symbol}' in '{label}'"))
                })
            })
            .collect::<Result<_>>()?;

        let parts: [Terrain; 3] = symbols.try_into().map_err(|rejected: Vec<Terrain>| {
            invalid_catalog(&format!(
                "edge label '{label}' has {} symbols, expected 3",
                rejected.len()
            ))
        })?;
        Ok(Self(parts))
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for terrain in self.0 {
            write!(f, "{}", terrain.symbol())?;
        }
        Ok(())
    }
}

impl EdgeLabel {
    /// Whether all three symbols are `terrain`
    pub fn is_uniform(&self, terrain: Terrain) -> bool {
        self.0.iter().all(|&symbol| symbol == terrain)
    }
}

/// Labels of the four borders of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeDescriptor {
    /// Top border
    pub up: EdgeLabel,
    /// Bottom border
    pub down: EdgeLabel,
    /// Left border
    pub left: EdgeLabel,
    /// Right border
    pub right: EdgeLabel,
}

impl EdgeDescriptor {
    /// Parse four labels given as up, down, left, right
    ///
    /// # Errors
    ///
    /// Returns an error if any label is not three known terrain symbols
    pub fn parse(up: &str, down: &str, left: &str, right: &str) -> Result<Self> {
        Ok(Self {
            up: up.parse()?,
            down: down.parse()?,
            left: left.parse()?,
            right: right.parse()?,
        })
    }

    /// Whether every border is entirely `terrain`
    pub fn is_solid(&self, terrain: Terrain) -> bool {
        [self.up, self.down, self.left, self.right]
            .iter()
            .all(|label| label.is_uniform(terrain))
    }
}

// Sprite column, sprite row, then up, down, left, right
const EDGE_TILES: [(u32, u32, [&str; 4]); 41] = [
    (1, 1, ["ggg", "ggg", "ggg", "ggg"]),
    // grass field with rock border
    (0, 0, ["rrr", "rgg", "rrr", "rgg"]),
    (1, 0, ["rrr", "ggg", "rgg", "rgg"]),
    (2, 0, ["rrr", "ggr", "rgg", "rrr"]),
    (0, 1, ["rgg", "rgg", "rrr", "ggg"]),
    (2, 1, ["ggr", "ggr", "ggg", "rrr"]),
    (0, 2, ["rgg", "rrr", "rrr", "ggr"]),
    (1, 2, ["ggg", "rrr", "ggr", "ggr"]),
    (2, 2, ["ggr", "rrr", "ggr", "rrr"]),
    (3, 0, ["ggg", "ggr", "ggg", "ggr"]),
    (4, 0, ["ggg", "rgg", "ggr", "ggg"]),
    (3, 1, ["ggr", "ggg", "ggg", "rgg"]),
    (4, 1, ["rgg", "ggg", "rgg", "ggg"]),
    (3, 2, ["ggg", "ggg", "ggg", "ggg"]),
    (4, 2, ["ggg", "ggg", "ggg", "ggg"]),
    // rock plateau with grass border
    (5, 0, ["ggg", "grr", "ggg", "grr"]),
    (6, 0, ["ggg", "rrr", "grr", "grr"]),
    (7, 0, ["ggg", "rrg", "grr", "ggg"]),
    (5, 1, ["grr", "grr", "ggg", "rrr"]),
    (6, 1, ["rrr", "rrr", "rrr", "rrr"]),
    (7, 1, ["rrg", "rrg", "rrr", "ggg"]),
    (5, 2, ["grr", "ggg", "ggg", "rrg"]),
    (6, 2, ["rrr", "ggg", "rrg", "rrg"]),
    (7, 2, ["rrg", "ggg", "rrg", "ggg"]),
    (8, 0, ["rrr", "rrg", "rrr", "rrg"]),
    (9, 0, ["rrr", "grr", "rrg", "rrr"]),
    (8, 1, ["rrg", "rrr", "rrr", "grr"]),
    (9, 1, ["grr", "rrr", "grr", "rrr"]),
    // lake with grass shore
    (10, 0, ["ggg", "gww", "ggg", "gww"]),
    (11, 0, ["ggg", "www", "gww", "gww"]),
    (12, 0, ["ggg", "wwg", "gww", "ggg"]),
    (10, 1, ["gww", "gww", "ggg", "www"]),
    (11, 1, ["www", "www", "www", "www"]),
    (12, 1, ["wwg", "wwg", "www", "ggg"]),
    (10, 2, ["gww", "ggg", "ggg", "wwg"]),
    (11, 2, ["www", "ggg", "wwg", "wwg"]),
    (12, 2, ["wwg", "ggg", "wwg", "ggg"]),
    (13, 0, ["www", "wwg", "www", "wwg"]),
    (14, 0, ["www", "gww", "wwg", "www"]),
    (13, 1, ["wwg", "www", "www", "gww"]),
    (14, 1, ["gww", "www", "gww", "www"]),
];

/// Name given to an edge tile: the terrain name for solid tiles, else its sprite
fn edge_tile_name(sprite: SpriteCoord, edges: &EdgeDescriptor, taken: &[TileSpec]) -> String {
    Terrain::ALL
        .iter()
        .find(|&&terrain| {
            edges.is_solid(terrain) && !taken.iter().any(|tile| tile.name == terrain.name())
        })
        .map_or_else(
            || format!("tile-{}-{}", sprite.column, sprite.row),
            |terrain| terrain.name().to_string(),
        )
}

/// Tiles from any edge descriptors, with compatibility derived by label equality
///
/// # Errors
///
/// Returns an error if the catalog fails validation
pub fn edge_matched_catalog(
    name: impl Into<String>,
    tiles: Vec<TileSpec>,
    target: usize,
) -> Result<TileCatalog> {
    let edges: Vec<EdgeDescriptor> = tiles
        .iter()
        .map(|tile| {
            tile.edges
                .ok_or_else(|| invalid_catalog(&format!("tile '{}' has no edges", tile.name)))
        })
        .collect::<Result<_>>()?;

    let compatibility = CompatibilityTable::from_edges(&edges);
    TileCatalog::new(name, tiles, target, compatibility)
}

/// The 41 bundled transition tiles between grass, rock and water
///
/// The target value is the all-water tile.
///
/// # Errors
///
/// Returns an error if the bundled table is malformed
pub fn edge_catalog() -> Result<TileCatalog> {
    let mut tiles: Vec<TileSpec> = Vec::with_capacity(EDGE_TILES.len());
    for (column, row, [up, down, left, right]) in EDGE_TILES {
        let sprite = SpriteCoord::new(column, row);
        let edges = EdgeDescriptor::parse(up, down, left, right)?;
        let name = edge_tile_name(sprite, &edges, &tiles);
        tiles.push(TileSpec::new(name, sprite).with_edges(edges));
    }

    let target = tiles
        .iter()
        .position(|tile| tile.name == Terrain::Water.name())
        .ok_or_else(|| invalid_catalog(&"no solid water tile"))?;

    edge_matched_catalog("edges", tiles, target)
}
