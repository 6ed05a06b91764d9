//! CNF building blocks for cardinality constraints

use itertools::Itertools;
use varisat::{CnfFormula, ExtendFormula, Lit};

/// Fresh literal that is true in every model
pub fn constant_true(formula: &mut CnfFormula) -> Lit {
    let lit = formula.new_var().positive();
    formula.add_clause(&[lit]);
    lit
}

/// Make the formula unsatisfiable
pub fn contradiction(formula: &mut CnfFormula) {
    let lit = constant_true(formula);
    formula.add_clause(&[!lit]);
}

/// At least one literal holds; an empty slice is a contradiction
pub fn at_least_one(formula: &mut CnfFormula, lits: &[Lit]) {
    if lits.is_empty() {
        contradiction(formula);
    } else {
        formula.add_clause(lits);
    }
}

/// At most one literal holds
///
/// Slices up to `pairwise_limit` long use one binary clause per pair; longer
/// ones use a sequential ladder with one auxiliary variable per literal.
pub fn at_most_one(formula: &mut CnfFormula, lits: &[Lit], pairwise_limit: usize) {
    if lits.len() <= pairwise_limit {
        // (!A + !B) * (!A + !C) * ...
        for (&a, &b) in lits.iter().tuple_combinations() {
            formula.add_clause(&[!a, !b]);
        }
        return;
    }

    // seen_i holds when any of lits[0..=i] is true
    let mut seen: Option<Lit> = None;
    for &lit in lits {
        let current = formula.new_var().positive();
        formula.add_clause(&[!lit, current]);
        if let Some(previous) = seen {
            formula.add_clause(&[!previous, current]);
            formula.add_clause(&[!previous, !lit]);
        }
        seen = Some(current);
    }
}

/// Exactly one literal holds
pub fn exactly_one(formula: &mut CnfFormula, lits: &[Lit], pairwise_limit: usize) {
    at_least_one(formula, lits);
    at_most_one(formula, lits, pairwise_limit);
}

/// Between `lower` and `upper` literals hold, inclusive
///
/// The literals run through the comparators of [`sorting_network`], so output
/// wire `j` is true exactly when at least `j + 1` inputs are true. Bounds are
/// unit clauses on two of those outputs. Each comparator costs two variables
/// and six clauses, keeping the encoding at O(n log² n).
pub fn count_between(formula: &mut CnfFormula, lits: &[Lit], lower: usize, upper: usize) {
    let n = lits.len();
    if lower > upper || lower > n {
        contradiction(formula);
        return;
    }
    if lower == 0 && upper >= n {
        return;
    }

    let mut wires = lits.to_vec();
    for (i, j) in sorting_network(n) {
        let (Some(&a), Some(&b)) = (wires.get(i), wires.get(j)) else {
            continue;
        };
        let (high, low) = comparator(formula, a, b);
        if let Some(wire) = wires.get_mut(i) {
            *wire = high;
        }
        if let Some(wire) = wires.get_mut(j) {
            *wire = low;
        }
    }

    // Absent when upper >= n, where the bound is trivially met
    if let Some(&overflow) = wires.get(upper) {
        formula.add_clause(&[!overflow]);
    }
    if let Some(&reached) = lower.checked_sub(1).and_then(|k| wires.get(k)) {
        formula.add_clause(&[reached]);
    }
}

// high <=> a + b, low <=> a * b
fn comparator(formula: &mut CnfFormula, a: Lit, b: Lit) -> (Lit, Lit) {
    let high = formula.new_var().positive();
    let low = formula.new_var().positive();
    formula.add_clause(&[!a, high]);
    formula.add_clause(&[!b, high]);
    formula.add_clause(&[!high, a, b]);
    formula.add_clause(&[!a, !b, low]);
    formula.add_clause(&[!low, a]);
    formula.add_clause(&[!low, b]);
    (high, low)
}

/// Comparators of Batcher's odd-even merge sort over `n` wires
///
/// Every pair `(i, j)` has `i < j` and moves the larger value to `i`.
/// Comparators reaching past `n` in the enclosing power-of-two network are
/// left out, as padding wires there never change.
pub fn sorting_network(n: usize) -> Vec<(usize, usize)> {
    let mut comparators = Vec::new();
    let mut p = 1;
    while p < n {
        let mut k = p;
        while k > 0 {
            let mut j = k % p;
            while j + k < n {
                for i in 0..k.min(n - j - k) {
                    if (i + j) / (2 * p) == (i + j + k) / (2 * p) {
                        comparators.push((i + j, i + j + k));
                    }
                }
                j += 2 * k;
            }
            k /= 2;
        }
        p *= 2;
    }
    comparators
}
