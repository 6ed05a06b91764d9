//! Lowering of a [`CpModel`] to CNF and solving it with `varisat`
//!
//! Every integer variable becomes a one-hot block of boolean variables, one
//! per domain value. Table constraints and linear bounds are expressed over
//! those literals. Hints never add clauses: the literal standing for the
//! hinted value is built from the negative polarity of its variable, so the
//! solver's default false phase leans towards the hint while remaining free
//! to override it.

use crate::io::configuration::PAIRWISE_AT_MOST_ONE_LIMIT;
use crate::solver::backend::{Backend, SolveOutcome, SolveStatus};
use crate::solver::encoding::{constant_true, count_between, exactly_one};
use crate::solver::model::{BoolVar, CpModel, IntVar, TupleConstraint, TupleKind};
use itertools::Itertools;
use varisat::{CnfFormula, ExtendFormula, Lit, Solver};

/// Size of a lowered formula
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoweringStats {
    /// Boolean variables, auxiliaries included
    pub variables: usize,
    /// Clauses in the formula
    pub clauses: usize,
}

/// CNF image of a model together with the literal map needed to decode it
pub struct SatEncoding {
    formula: CnfFormula,
    value_lits: Vec<Vec<Lit>>,
}

impl SatEncoding {
    /// Lower `model` to CNF
    pub fn lower(model: &CpModel, pairwise_limit: usize) -> Self {
        let mut formula = CnfFormula::new();

        let value_lits: Vec<Vec<Lit>> = model
            .int_vars()
            .iter()
            .zip(model.hints())
            .map(|(info, hint)| {
                (0..info.domain_size)
                    .map(|value| formula.new_var().lit(*hint != Some(value)))
                    .collect()
            })
            .collect();

        for lits in &value_lits {
            exactly_one(&mut formula, lits, pairwise_limit);
        }

        let mut encoding = Self {
            formula,
            value_lits,
        };

        for constraint in model.tuple_constraints() {
            encoding.lower_tuple(constraint);
        }

        for bounds in model.linear_constraints() {
            let lits: Vec<Lit> = bounds
                .terms
                .iter()
                .map(|term| encoding.indicator_lit(*term))
                .collect();
            count_between(&mut encoding.formula, &lits, bounds.lower, bounds.upper);
        }

        encoding
    }

    /// Literal true exactly when `var == value`
    pub fn value_lit(&self, var: IntVar, value: usize) -> Option<Lit> {
        self.value_lits
            .get(var.index())
            .and_then(|lits| lits.get(value))
            .copied()
    }

    // Values outside the domain can never hold
    fn indicator_lit(&mut self, indicator: BoolVar) -> Lit {
        self.value_lit(indicator.var(), indicator.value())
            .unwrap_or_else(|| !constant_true(&mut self.formula))
    }

    fn lower_tuple(&mut self, constraint: &TupleConstraint) {
        let [x, y] = constraint.vars;

        match constraint.kind {
            TupleKind::Forbidden => {
                for &[a, b] in constraint.pairs.iter() {
                    if let (Some(la), Some(lb)) = (self.value_lit(x, a), self.value_lit(y, b)) {
                        self.formula.add_clause(&[!la, !lb]);
                    }
                }
            }
            TupleKind::Allowed => {
                let x_lits = self.value_lits.get(x.index()).cloned().unwrap_or_default();
                let y_lits = self.value_lits.get(y.index()).cloned().unwrap_or_default();
                let mut forward: Vec<Vec<Lit>> = vec![Vec::new(); x_lits.len()];
                let mut backward: Vec<Vec<Lit>> = vec![Vec::new(); y_lits.len()];

                for &[a, b] in constraint.pairs.iter() {
                    if let (Some(&la), Some(&lb)) = (x_lits.get(a), y_lits.get(b)) {
                        if let Some(support) = forward.get_mut(a) {
                            support.push(lb);
                        }
                        if let Some(support) = backward.get_mut(b) {
                            support.push(la);
                        }
                    }
                }

                // x = a implies y takes some value paired with a, and vice versa
                for (own, supports) in
                    x_lits.iter().zip(&forward).chain(y_lits.iter().zip(&backward))
                {
                    let clause: Vec<Lit> = std::iter::once(!*own)
                        .chain(supports.iter().copied().unique())
                        .collect();
                    self.formula.add_clause(&clause);
                }
            }
        }
    }

    /// The lowered formula
    pub const fn formula(&self) -> &CnfFormula {
        &self.formula
    }

    /// Formula size
    pub fn stats(&self) -> LoweringStats {
        LoweringStats {
            variables: self.formula.var_count(),
            clauses: self.formula.len(),
        }
    }

    /// Translate a SAT model back to one value per integer variable
    ///
    /// Returns `None` if some variable has no true value literal.
    pub fn decode(&self, model: &[Lit]) -> Option<Vec<usize>> {
        let mut truth = vec![false; self.formula.var_count()];
        for lit in model {
            if let Some(slot) = truth.get_mut(lit.var().index()) {
                *slot = lit.is_positive();
            }
        }

        self.value_lits
            .iter()
            .map(|lits| {
                lits.iter().position(|lit| {
                    truth.get(lit.var().index()).copied() == Some(lit.is_positive())
                })
            })
            .collect()
    }
}

/// Backend running `varisat` on the CNF lowering of a model
#[derive(Clone, Debug)]
pub struct SatBackend {
    pairwise_limit: usize,
    last_stats: Option<LoweringStats>,
}

impl Default for SatBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SatBackend {
    /// Backend with the default at-most-one encoding threshold
    pub const fn new() -> Self {
        Self {
            pairwise_limit: PAIRWISE_AT_MOST_ONE_LIMIT,
            last_stats: None,
        }
    }

    /// Use pairwise at-most-one clauses for domains up to `limit` values
    #[must_use]
    pub const fn with_pairwise_limit(mut self, limit: usize) -> Self {
        self.pairwise_limit = limit;
        self
    }

    /// Size of the most recently solved formula
    pub const fn last_stats(&self) -> Option<LoweringStats> {
        self.last_stats
    }
}

impl Backend for SatBackend {
    fn solve(&mut self, model: &CpModel) -> SolveOutcome {
        let encoding = SatEncoding::lower(model, self.pairwise_limit);
        let stats = encoding.stats();
        self.last_stats = Some(stats);
        tracing::debug!(
            variables = stats.variables,
            clauses = stats.clauses,
            "lowered model to CNF"
        );

        let mut solver = Solver::new();
        solver.add_formula(encoding.formula());

        match solver.solve() {
            Ok(true) => match solver.model().and_then(|lits| encoding.decode(&lits)) {
                Some(values) => SolveOutcome::solved(SolveStatus::Optimal, values),
                None => SolveOutcome::failed(SolveStatus::Unknown),
            },
            Ok(false) => SolveOutcome::failed(SolveStatus::Infeasible),
            Err(error) => {
                tracing::warn!(?error, "SAT solver aborted");
                SolveOutcome::failed(SolveStatus::Unknown)
            }
        }
    }
}
