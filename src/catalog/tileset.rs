//! Tile catalog: the value domain of every cell

use crate::catalog::compatibility::CompatibilityTable;
use crate::catalog::edges::EdgeDescriptor;
use crate::io::error::{Result, invalid_catalog};

/// Sprite position in the sheet, in whole tiles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteCoord {
    /// Column counted from the left
    pub column: u32,
    /// Row counted from the top
    pub row: u32,
}

impl SpriteCoord {
    /// Sprite at `(column, row)`
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

/// One catalog entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSpec {
    /// Unique tile name
    pub name: String,
    /// Where the tile is drawn from
    pub sprite: SpriteCoord,
    /// Border description, present for edge-matched catalogs
    pub edges: Option<EdgeDescriptor>,
}

impl TileSpec {
    /// Entry without edge information
    pub fn new(name: impl Into<String>, sprite: SpriteCoord) -> Self {
        Self {
            name: name.into(),
            sprite,
            edges: None,
        }
    }

    /// Attach an edge descriptor
    #[must_use]
    pub fn with_edges(mut self, edges: EdgeDescriptor) -> Self {
        self.edges = Some(edges);
        self
    }
}

/// Tiles, their compatibility and the value counted by the ratio constraint
#[derive(Clone, Debug)]
pub struct TileCatalog {
    name: String,
    tiles: Vec<TileSpec>,
    target: usize,
    compatibility: CompatibilityTable,
}

impl TileCatalog {
    /// Assemble and validate a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The catalog has no tiles
    /// - Two tiles share a name
    /// - `target` is not a tile index
    /// - The compatibility table covers a different number of tiles
    pub fn new(
        name: impl Into<String>,
        tiles: Vec<TileSpec>,
        target: usize,
        compatibility: CompatibilityTable,
    ) -> Result<Self> {
        if tiles.is_empty() {
            return Err(invalid_catalog(&"catalog has no tiles"));
        }
        for (index, tile) in tiles.iter().enumerate() {
            if tiles.iter().skip(index + 1).any(|other| other.name == tile.name) {
                return Err(invalid_catalog(&format!(
                    "tile name '{}' appears more than once",
                    tile.name
                )));
            }
        }
        if target >= tiles.len() {
            return Err(invalid_catalog(&format!(
                "target index {target} exceeds {} tiles",
                tiles.len()
            )));
        }
        if compatibility.tile_count() != tiles.len() {
            return Err(invalid_catalog(&format!(
                "compatibility covers {} tiles but catalog has {}",
                compatibility.tile_count(),
                tiles.len()
            )));
        }

        Ok(Self {
            name: name.into(),
            tiles,
            target,
            compatibility,
        })
    }

    /// Catalog name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of tiles, i.e. the domain size of each cell
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a validated catalog
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All entries in value order
    pub fn tiles(&self) -> &[TileSpec] {
        &self.tiles
    }

    /// Entry for `value`
    pub fn tile(&self, value: usize) -> Option<&TileSpec> {
        self.tiles.get(value)
    }

    /// Value of the tile called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.name == name)
    }

    /// Value counted by the ratio constraint
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Adjacency rules
    pub const fn compatibility(&self) -> &CompatibilityTable {
        &self.compatibility
    }
}
