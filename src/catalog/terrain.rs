//! Terrain alphabet and the three-terrain catalog

use crate::catalog::compatibility::CompatibilityTable;
use crate::catalog::tileset::{SpriteCoord, TileCatalog, TileSpec};
use crate::io::error::Result;
use std::fmt;

/// Ground type appearing on tiles and tile edges
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// Impassable rock, symbol `r`
    Rock,
    /// Open water, symbol `w`
    Water,
    /// Grass, symbol `g`
    Grass,
}

impl Terrain {
    /// All terrains in catalog order
    pub const ALL: [Self; 3] = [Self::Rock, Self::Water, Self::Grass];

    /// Parse an edge label symbol
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'r' => Some(Self::Rock),
            'w' => Some(Self::Water),
            'g' => Some(Self::Grass),
            _ => None,
        }
    }

    /// Edge label symbol
    pub const fn symbol(self) -> char {
        match self {
            Self::Rock => 'r',
            Self::Water => 'w',
            Self::Grass => 'g',
        }
    }

    /// Lowercase name used as a tile name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Water => "water",
            Self::Grass => "grass",
        }
    }

    // Plain, transition-free tiles in the bundled sprite sheet
    const fn sprite(self) -> SpriteCoord {
        match self {
            Self::Grass => SpriteCoord::new(1, 1),
            Self::Rock => SpriteCoord::new(6, 1),
            Self::Water => SpriteCoord::new(11, 1),
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rock, water and grass, where rock may never touch water
///
/// Values follow [`Terrain::ALL`]; water is the target terrain.
///
/// # Errors
///
/// Never fails for the built-in table; the `Result` comes from catalog validation
pub fn terrain_catalog() -> Result<TileCatalog> {
    let tiles: Vec<TileSpec> = Terrain::ALL
        .iter()
        .map(|terrain| TileSpec::new(terrain.name(), terrain.sprite()))
        .collect();

    let rock = Terrain::Rock as usize;
    let water = Terrain::Water as usize;
    let compatibility = CompatibilityTable::from_forbidden_pairs(tiles.len(), &[[rock, water]]);

    TileCatalog::new("terrain", tiles, water, compatibility)
}
