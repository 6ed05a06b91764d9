//! Tile catalogs described in TOML
//!
//! ```toml
//! name = "coast"
//! target = "water"
//! rule = "forbidden"
//!
//! [[tiles]]
//! name = "rock"
//! sprite = [6, 1]
//!
//! [[tiles]]
//! name = "water"
//! sprite = [11, 1]
//!
//! [[forbidden]]
//! pair = ["rock", "water"]
//! ```
//!
//! With `rule = "edges"` every tile instead carries
//! `edges = { up = "ggg", down = "gww", left = "ggg", right = "gww" }`.

use crate::catalog::compatibility::CompatibilityTable;
use crate::catalog::edges::{EdgeDescriptor, edge_matched_catalog};
use crate::catalog::tileset::{SpriteCoord, TileCatalog, TileSpec};
use crate::io::error::{GenerationError, Result, invalid_catalog};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RuleKind {
    Edges,
    Forbidden,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EdgeEntry {
    up: String,
    down: String,
    left: String,
    right: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TileEntry {
    name: String,
    sprite: [u32; 2],
    edges: Option<EdgeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ForbiddenEntry {
    pair: [String; 2],
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    name: Option<String>,
    target: String,
    rule: RuleKind,
    tiles: Vec<TileEntry>,
    #[serde(default)]
    forbidden: Vec<ForbiddenEntry>,
}

/// Parse a catalog from TOML text
///
/// # Errors
///
/// Returns an error if:
/// - The text is not valid catalog TOML
/// - `[[forbidden]]` entries appear under `rule = "edges"`, or tile edges
///   under `rule = "forbidden"`
/// - An edge label is malformed, or missing under `rule = "edges"`
/// - The target or a forbidden pair names an unknown tile
/// - The resulting catalog fails validation
pub fn parse_catalog(text: &str) -> Result<TileCatalog> {
    let file: CatalogFile = toml::from_str(text).map_err(|error| invalid_catalog(&error))?;
    check_rule_matches(&file)?;
    let name = file.name.unwrap_or_else(|| "custom".to_string());

    let mut tiles = Vec::with_capacity(file.tiles.len());
    for entry in file.tiles {
        let [column, row] = entry.sprite;
        let mut tile = TileSpec::new(entry.name, SpriteCoord::new(column, row));
        if let Some(edges) = entry.edges {
            tile = tile.with_edges(EdgeDescriptor::parse(
                &edges.up,
                &edges.down,
                &edges.left,
                &edges.right,
            )?);
        }
        tiles.push(tile);
    }

    let lookup = |tile_name: &str| {
        tiles
            .iter()
            .position(|tile| tile.name == tile_name)
            .ok_or_else(|| invalid_catalog(&format!("unknown tile '{tile_name}'")))
    };
    let target = lookup(&file.target)?;

    match file.rule {
        RuleKind::Edges => edge_matched_catalog(name, tiles, target),
        RuleKind::Forbidden => {
            let pairs = file
                .forbidden
                .iter()
                .map(|entry| {
                    let [first, second] = &entry.pair;
                    Ok([lookup(first)?, lookup(second)?])
                })
                .collect::<Result<Vec<_>>>()?;
            let compatibility = CompatibilityTable::from_forbidden_pairs(tiles.len(), &pairs);
            TileCatalog::new(name, tiles, target, compatibility)
        }
    }
}

// Content written for the other rule would be dropped without a trace
fn check_rule_matches(file: &CatalogFile) -> Result<()> {
    match file.rule {
        RuleKind::Edges if !file.forbidden.is_empty() => Err(invalid_catalog(
            &"[[forbidden]] entries require rule = \"forbidden\"",
        )),
        RuleKind::Forbidden => file
            .tiles
            .iter()
            .find(|entry| entry.edges.is_some())
            .map_or(Ok(()), |entry| {
                Err(invalid_catalog(&format!(
                    "tile '{}' has edges, which require rule = \"edges\"",
                    entry.name
                )))
            }),
        RuleKind::Edges => Ok(()),
    }
}

/// Read and parse a catalog file
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails [`parse_catalog`]
pub fn load_catalog(path: &Path) -> Result<TileCatalog> {
    let text = std::fs::read_to_string(path).map_err(|source| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "read catalog",
        source,
    })?;
    parse_catalog(&text)
}
