//! Tests for CNF cardinality building blocks, checked against every assignment

#[cfg(test)]
mod tests {
    use terrasolve::solver::encoding::{
        at_least_one, at_most_one, constant_true, contradiction, count_between, exactly_one,
        sorting_network,
    };
    use varisat::{CnfFormula, ExtendFormula, Lit, Solver};

    fn fresh_lits(formula: &mut CnfFormula, count: usize) -> Vec<Lit> {
        (0..count).map(|_| formula.new_var().positive()).collect()
    }

    fn satisfiable_under(formula: &CnfFormula, assumptions: &[Lit]) -> bool {
        let mut solver = Solver::new();
        solver.add_formula(formula);
        solver.assume(assumptions);
        solver.solve().unwrap_or(false)
    }

    // Fix each literal true or false according to the bits of `mask`
    fn assignment(lits: &[Lit], mask: u32) -> Vec<Lit> {
        lits.iter()
            .enumerate()
            .map(|(i, &lit)| if (mask >> i) & 1 == 1 { lit } else { !lit })
            .collect()
    }

    fn assert_cardinality(formula: &CnfFormula, lits: &[Lit], accepts: impl Fn(u32) -> bool) {
        for mask in 0..(1u32 << lits.len()) {
            let count = mask.count_ones();
            assert_eq!(
                satisfiable_under(formula, &assignment(lits, mask)),
                accepts(count),
                "mask {mask:b} with {count} true literals"
            );
        }
    }

    // Tests a contradiction makes the formula unsatisfiable
    // Verified by dropping the negated unit clause
    #[test]
    fn test_contradiction_is_unsat() {
        let mut formula = CnfFormula::new();
        contradiction(&mut formula);
        assert!(!satisfiable_under(&formula, &[]));
    }

    // Tests the constant literal cannot be assumed false
    // Verified by returning the negated literal
    #[test]
    fn test_constant_true_holds() {
        let mut formula = CnfFormula::new();
        let lit = constant_true(&mut formula);
        assert!(satisfiable_under(&formula, &[lit]));
        assert!(!satisfiable_under(&formula, &[!lit]));
    }

    // Tests an empty at-least-one is unsatisfiable instead of vacuous
    // Verified by adding an empty clause list
    #[test]
    fn test_at_least_one_empty() {
        let mut formula = CnfFormula::new();
        at_least_one(&mut formula, &[]);
        assert!(!satisfiable_under(&formula, &[]));
    }

    // Tests pairwise at-most-one over every assignment of four literals
    // Verified by skipping the last pair
    #[test]
    fn test_at_most_one_pairwise() {
        let mut formula = CnfFormula::new();
        let lits = fresh_lits(&mut formula, 4);
        at_most_one(&mut formula, &lits, 8);
        assert_cardinality(&formula, &lits, |count| count <= 1);
    }

    // Tests the ladder at-most-one over every assignment of six literals
    // Verified by removing the (!previous, !lit) clause
    #[test]
    fn test_at_most_one_ladder() {
        let mut formula = CnfFormula::new();
        let lits = fresh_lits(&mut formula, 6);
        at_most_one(&mut formula, &lits, 0);
        assert_cardinality(&formula, &lits, |count| count <= 1);
    }

    // Tests exactly-one with both encodings
    // Verified by omitting the at-least-one clause
    #[test]
    fn test_exactly_one() {
        for limit in [0, 8] {
            let mut formula = CnfFormula::new();
            let lits = fresh_lits(&mut formula, 5);
            exactly_one(&mut formula, &lits, limit);
            assert_cardinality(&formula, &lits, |count| count == 1);
        }
    }

    // Tests the counter enforces both bounds over every assignment
    // Verified by dropping the lower bound unit clause
    #[test]
    fn test_count_between_bounds() {
        for (lower, upper) in [(0, 0), (1, 2), (2, 4), (3, 3), (0, 5), (5, 6)] {
            let mut formula = CnfFormula::new();
            let lits = fresh_lits(&mut formula, 6);
            count_between(&mut formula, &lits, lower, upper);
            assert_cardinality(&formula, &lits, |count| {
                (lower as u32) <= count && count <= (upper as u32)
            });
        }
    }

    // Tests impossible bounds become a contradiction
    // Verified by returning early without clauses
    #[test]
    fn test_count_between_impossible() {
        let mut formula = CnfFormula::new();
        let lits = fresh_lits(&mut formula, 3);
        count_between(&mut formula, &lits, 4, 5);
        assert!(!satisfiable_under(&formula, &[]));

        let mut inverted = CnfFormula::new();
        let lits = fresh_lits(&mut inverted, 3);
        count_between(&mut inverted, &lits, 2, 1);
        assert!(!satisfiable_under(&inverted, &[]));
    }

    // Tests vacuous bounds add nothing
    // Verified by building the counter regardless
    #[test]
    fn test_count_between_vacuous() {
        let mut formula = CnfFormula::new();
        let lits = fresh_lits(&mut formula, 3);
        count_between(&mut formula, &lits, 0, 3);
        assert_eq!(formula.len(), 0);
        assert_eq!(formula.var_count(), 3);
    }

    // Tests the counter on a width that is not a power of two
    // Verified by keeping comparators that reach past the last wire
    #[test]
    fn test_count_between_odd_width() {
        for (lower, upper) in [(2, 3), (1, 6), (0, 3), (4, 7)] {
            let mut formula = CnfFormula::new();
            let lits = fresh_lits(&mut formula, 7);
            count_between(&mut formula, &lits, lower, upper);
            assert_cardinality(&formula, &lits, |count| {
                (lower as u32) <= count && count <= (upper as u32)
            });
        }
    }

    // Tests the comparators sort every boolean input, true values first
    // Verified by starting the merge at p = 2
    #[test]
    fn test_sorting_network_sorts() {
        for n in 1..=10 {
            let comparators = sorting_network(n);
            for mask in 0..(1u32 << n) {
                let mut wires: Vec<bool> = (0..n).map(|i| (mask >> i) & 1 == 1).collect();
                for &(i, j) in &comparators {
                    assert!(i < j && j < n);
                    if wires.get(i) < wires.get(j) {
                        wires.swap(i, j);
                    }
                }
                let trues = mask.count_ones() as usize;
                assert!(wires.iter().take(trues).all(|&wire| wire), "n {n} mask {mask:b}");
                assert!(wires.iter().skip(trues).all(|&wire| !wire), "n {n} mask {mask:b}");
            }
        }
    }

    // Tests a half-grid bound over many literals costs O(n log² n), not O(n²)
    // Verified by restoring one counter per position and count
    #[test]
    fn test_count_between_size_is_subquadratic() {
        let n = 1024;
        let mut formula = CnfFormula::new();
        let lits = fresh_lits(&mut formula, n);
        count_between(&mut formula, &lits, n / 4, n / 2);

        let comparators = sorting_network(n).len();
        assert_eq!(formula.var_count(), n + 2 * comparators);
        assert_eq!(formula.len(), 6 * comparators + 2);
        assert!(formula.var_count() < 64 * n);
    }
}
