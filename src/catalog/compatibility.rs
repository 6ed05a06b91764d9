//! Pairwise tile compatibility as plain data
//!
//! Each direction keeps a square bit matrix of listed `(a, b)` pairs plus a
//! flag saying whether the listed pairs are the permitted ones or the
//! prohibited ones. The constraint encoder hands the listed pairs to the
//! model unchanged, so swapping catalogs never touches the encoder.

use crate::catalog::edges::EdgeDescriptor;
use crate::io::error::{Result, invalid_catalog};
use crate::solver::model::TupleKind;
use crate::spatial::grid::Direction;
use bitvec::prelude::*;

/// Listed value pairs for one direction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairTable {
    kind: TupleKind,
    tile_count: usize,
    listed: BitVec,
}

impl PairTable {
    /// Table permitting only `pairs`
    pub fn allowed(tile_count: usize, pairs: impl IntoIterator<Item = [usize; 2]>) -> Self {
        Self::with_pairs(TupleKind::Allowed, tile_count, pairs)
    }

    /// Table prohibiting `pairs` and permitting everything else
    pub fn forbidden(tile_count: usize, pairs: impl IntoIterator<Item = [usize; 2]>) -> Self {
        Self::with_pairs(TupleKind::Forbidden, tile_count, pairs)
    }

    // Pairs naming tiles outside the catalog are dropped
    fn with_pairs(
        kind: TupleKind,
        tile_count: usize,
        pairs: impl IntoIterator<Item = [usize; 2]>,
    ) -> Self {
        let mut listed = bitvec![0; tile_count * tile_count];
        for [a, b] in pairs {
            if a < tile_count && b < tile_count {
                listed.set(a * tile_count + b, true);
            }
        }
        Self {
            kind,
            tile_count,
            listed,
        }
    }

    /// Whether the listed pairs are permitted or prohibited
    pub const fn kind(&self) -> TupleKind {
        self.kind
    }

    /// Number of tiles the table covers
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Whether `(a, b)` appears in the list
    pub fn is_listed(&self, a: usize, b: usize) -> bool {
        a < self.tile_count
            && b < self.tile_count
            && self
                .listed
                .get(a * self.tile_count + b)
                .is_some_and(|bit| *bit)
    }

    /// Whether `a` followed by `b` is a legal placement
    pub fn allows(&self, a: usize, b: usize) -> bool {
        if a >= self.tile_count || b >= self.tile_count {
            return false;
        }
        match self.kind {
            TupleKind::Allowed => self.is_listed(a, b),
            TupleKind::Forbidden => !self.is_listed(a, b),
        }
    }

    /// Listed pairs in row-major order
    pub fn listed_pairs(&self) -> Vec<[usize; 2]> {
        if self.tile_count == 0 {
            return Vec::new();
        }
        self.listed
            .iter_ones()
            .map(|index| [index / self.tile_count, index % self.tile_count])
            .collect()
    }

    /// Number of legal `(a, b)` placements
    pub fn permitted_count(&self) -> usize {
        let listed = self.listed.count_ones();
        match self.kind {
            TupleKind::Allowed => listed,
            TupleKind::Forbidden => self.tile_count * self.tile_count - listed,
        }
    }
}

/// Compatibility of horizontally and vertically adjacent tiles
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompatibilityTable {
    horizontal: PairTable,
    vertical: PairTable,
}

impl CompatibilityTable {
    /// Combine per-direction tables
    ///
    /// # Errors
    ///
    /// Returns an error if the tables cover different tile counts
    pub fn new(horizontal: PairTable, vertical: PairTable) -> Result<Self> {
        if horizontal.tile_count() != vertical.tile_count() {
            return Err(invalid_catalog(&format!(
                "horizontal table covers {} tiles but vertical covers {}",
                horizontal.tile_count(),
                vertical.tile_count()
            )));
        }
        Ok(Self {
            horizontal,
            vertical,
        })
    }

    /// Prohibit each pair in both orders and in both directions
    pub fn from_forbidden_pairs(tile_count: usize, pairs: &[[usize; 2]]) -> Self {
        let symmetric: Vec<[usize; 2]> = pairs
            .iter()
            .flat_map(|&[a, b]| [[a, b], [b, a]])
            .collect();
        Self {
            horizontal: PairTable::forbidden(tile_count, symmetric.iter().copied()),
            vertical: PairTable::forbidden(tile_count, symmetric),
        }
    }

    /// Permit exactly the placements whose touching edges carry equal labels
    ///
    /// Horizontally `a` may sit left of `b` when `a.right == b.left`;
    /// vertically `a` may sit above `b` when `a.down == b.up`.
    pub fn from_edges(edges: &[EdgeDescriptor]) -> Self {
        let tile_count = edges.len();
        let matching = |fits: fn(&EdgeDescriptor, &EdgeDescriptor) -> bool| {
            edges
                .iter()
                .enumerate()
                .flat_map(move |(a, first)| {
                    edges
                        .iter()
                        .enumerate()
                        .filter(move |(_, second)| fits(first, second))
                        .map(move |(b, _)| [a, b])
                })
                .collect::<Vec<_>>()
        };

        Self {
            horizontal: PairTable::allowed(
                tile_count,
                matching(|left, right| left.right == right.left),
            ),
            vertical: PairTable::allowed(tile_count, matching(|upper, lower| upper.down == lower.up)),
        }
    }

    /// Number of tiles covered
    pub const fn tile_count(&self) -> usize {
        self.horizontal.tile_count()
    }

    /// Table for `direction`
    pub const fn table(&self, direction: Direction) -> &PairTable {
        match direction {
            Direction::Horizontal => &self.horizontal,
            Direction::Vertical => &self.vertical,
        }
    }

    /// Whether `b` may follow `a` in `direction`
    pub fn allows(&self, direction: Direction, a: usize, b: usize) -> bool {
        self.table(direction).allows(a, b)
    }
}
