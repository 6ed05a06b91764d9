//! Tests for the terrain alphabet and the three-terrain catalog

#[cfg(test)]
mod tests {
    use terrasolve::catalog::terrain::{Terrain, terrain_catalog};
    use terrasolve::solver::model::TupleKind;
    use terrasolve::spatial::grid::Direction;

    // Tests every terrain symbol parses back to itself
    // Verified by mapping 'w' to grass
    #[test]
    fn test_symbol_round_trip() {
        for terrain in Terrain::ALL {
            assert_eq!(Terrain::from_symbol(terrain.symbol()), Some(terrain));
        }
        assert_eq!(Terrain::from_symbol('x'), None);
        assert_eq!(Terrain::Water.to_string(), "water");
    }

    // Tests the catalog order and target
    // Verified by targeting grass instead of water
    #[test]
    fn test_terrain_catalog_layout() -> terrasolve::Result<()> {
        let catalog = terrain_catalog()?;

        assert_eq!(catalog.name(), "terrain");
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.index_of("rock"), Some(0));
        assert_eq!(catalog.index_of("water"), Some(1));
        assert_eq!(catalog.index_of("grass"), Some(2));
        assert_eq!(catalog.target(), 1);
        Ok(())
    }

    // Tests rock and water never touch while grass fits everywhere
    // Verified by forbidding only rock left of water
    #[test]
    fn test_terrain_catalog_rules() -> terrasolve::Result<()> {
        let catalog = terrain_catalog()?;
        let rules = catalog.compatibility();

        for direction in [Direction::Horizontal, Direction::Vertical] {
            assert_eq!(rules.table(direction).kind(), TupleKind::Forbidden);
            assert!(!rules.allows(direction, 0, 1));
            assert!(!rules.allows(direction, 1, 0));
            for other in 0..3 {
                assert!(rules.allows(direction, 2, other));
                assert!(rules.allows(direction, other, 2));
                assert!(rules.allows(direction, other, other));
            }
        }
        Ok(())
    }

    // Tests the plain sprites point at distinct sheet cells
    // Verified by giving rock the grass sprite
    #[test]
    fn test_terrain_sprites_distinct() -> terrasolve::Result<()> {
        let catalog = terrain_catalog()?;
        let sprites: Vec<_> = catalog.tiles().iter().map(|tile| tile.sprite).collect();

        assert_eq!(sprites.len(), 3);
        for (i, first) in sprites.iter().enumerate() {
            assert!(sprites.iter().skip(i + 1).all(|second| second != first));
        }
        assert!(catalog.tiles().iter().all(|tile| tile.edges.is_none()));
        Ok(())
    }
}
