//! Tests for adjacency and target-ratio constraint encoding

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use terrasolve::algorithm::constraints::{
        RatioBounds, encode_adjacency, encode_catalog, encode_target_ratio,
    };
    use terrasolve::catalog::edges::edge_catalog;
    use terrasolve::catalog::terrain::terrain_catalog;
    use terrasolve::solver::model::{CpModel, TupleKind};
    use terrasolve::spatial::grid::CellGrid;

    // Tests the default bounds are a quarter and a half, rounded down
    // Verified by rounding the lower bound up
    #[test]
    fn test_quarter_to_half() {
        assert_eq!(
            RatioBounds::quarter_to_half(400),
            RatioBounds {
                lower: 100,
                upper: 200
            }
        );
        assert_eq!(
            RatioBounds::quarter_to_half(10),
            RatioBounds { lower: 2, upper: 5 }
        );
        assert_eq!(
            RatioBounds::quarter_to_half(1),
            RatioBounds { lower: 0, upper: 0 }
        );
    }

    // Tests bounds validation and membership
    // Verified by making the upper bound exclusive
    #[test]
    fn test_ratio_bounds() {
        assert!(RatioBounds::new(3, 2, 10).is_err());
        assert!(RatioBounds::new(2, 11, 10).is_err());

        let bounds = RatioBounds::new(2, 5, 10);
        assert!(bounds.is_ok_and(|bounds| bounds.contains(2)
            && bounds.contains(5)
            && !bounds.contains(1)
            && !bounds.contains(6)));
    }

    // Tests one constraint per adjacent pair, sharing one pair list per direction
    // Verified by building a fresh pair list for every constraint
    #[test]
    fn test_encode_adjacency_counts() -> terrasolve::Result<()> {
        let catalog = edge_catalog()?;
        let mut model = CpModel::new();
        let grid = CellGrid::build(&mut model, 4, 3, catalog.len());

        let added = encode_adjacency(&mut model, &grid, catalog.compatibility());
        assert_eq!(added, 3 * 3 + 4 * 2);
        assert_eq!(model.tuple_constraints().len(), added);

        let constraints = model.tuple_constraints();
        assert!(
            constraints
                .iter()
                .all(|constraint| constraint.kind == TupleKind::Allowed)
        );
        if let (Some(first), Some(second)) = (constraints.first(), constraints.get(1)) {
            assert!(Rc::ptr_eq(&first.pairs, &second.pairs));
        }
        Ok(())
    }

    // Tests forbidden tables are passed through with forbidden polarity
    // Verified by always adding allowed assignments
    #[test]
    fn test_encode_adjacency_forbidden() -> terrasolve::Result<()> {
        let catalog = terrain_catalog()?;
        let mut model = CpModel::new();
        let grid = CellGrid::build(&mut model, 2, 2, catalog.len());

        encode_adjacency(&mut model, &grid, catalog.compatibility());

        for constraint in model.tuple_constraints() {
            assert_eq!(constraint.kind, TupleKind::Forbidden);
            assert_eq!(&*constraint.pairs, &[[0, 1], [1, 0]]);
        }
        Ok(())
    }

    // Tests the ratio constraint sums one indicator per cell for the target
    // Verified by summing indicators for value 0
    #[test]
    fn test_encode_target_ratio() -> terrasolve::Result<()> {
        let mut model = CpModel::new();
        let grid = CellGrid::build(&mut model, 3, 3, 4);
        let bounds = RatioBounds::quarter_to_half(grid.len());

        encode_target_ratio(&mut model, &grid, 2, bounds)?;

        let linear = model.linear_constraints();
        assert_eq!(linear.len(), 1);
        if let Some(sum) = linear.first() {
            assert_eq!(sum.terms.len(), 9);
            assert!(sum.terms.iter().all(|term| term.value() == 2));
            assert_eq!((sum.lower, sum.upper), (2, 4));
        }
        Ok(())
    }

    // Tests the catalog encoder wires adjacency and ratio together
    // Verified by skipping the ratio constraint
    #[test]
    fn test_encode_catalog() -> terrasolve::Result<()> {
        let catalog = terrain_catalog()?;
        let mut model = CpModel::new();
        let grid = CellGrid::build(&mut model, 20, 20, catalog.len());

        let bounds = encode_catalog(&mut model, &grid, &catalog)?;

        assert_eq!(bounds, RatioBounds::quarter_to_half(400));
        assert_eq!(model.tuple_constraints().len(), 2 * 19 * 20);
        assert!(
            model
                .linear_constraints()
                .first()
                .is_some_and(|sum| sum.terms.iter().all(|term| term.value() == 1))
        );
        Ok(())
    }
}
