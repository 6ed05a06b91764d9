//! Solver-agnostic constraint model
//!
//! Mirrors the small subset of a CP modelling API the generators need: bounded
//! integer variables, binary table constraints, indicator booleans, linear
//! bounds over indicators and non-binding value hints. Backends read the model
//! through the accessors and never mutate it.

use crate::io::error::{Result, invalid_parameter};
use std::rc::Rc;

/// Handle to an integer decision variable with domain `[0, domain_size - 1]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntVar(usize);

impl IntVar {
    /// Position of the variable in creation order
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Boolean that holds exactly when `var == value`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoolVar {
    var: IntVar,
    value: usize,
}

impl BoolVar {
    /// Integer variable the indicator observes
    pub const fn var(self) -> IntVar {
        self.var
    }

    /// Value whose assignment makes the indicator true
    pub const fn value(self) -> usize {
        self.value
    }
}

/// Declaration of an integer variable
#[derive(Clone, Debug)]
pub struct IntVarInfo {
    /// Human readable label, e.g. `[3,7]`
    pub name: String,
    /// Number of values in the domain
    pub domain_size: usize,
}

/// Whether a table lists the permitted or the prohibited value pairs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TupleKind {
    /// Only listed pairs may be assigned
    Allowed,
    /// Listed pairs may not be assigned
    Forbidden,
}

/// Shared list of value pairs, reused across many constraints
pub type PairList = Rc<[[usize; 2]]>;

/// Binary table constraint over two variables
#[derive(Clone, Debug)]
pub struct TupleConstraint {
    /// Constrained variables, in the order the pairs refer to them
    pub vars: [IntVar; 2],
    /// Interpretation of `pairs`
    pub kind: TupleKind,
    /// Value pairs `[value of vars[0], value of vars[1]]`
    pub pairs: PairList,
}

/// `lower <= sum(terms) <= upper`
#[derive(Clone, Debug)]
pub struct LinearBounds {
    /// Summed indicators
    pub terms: Vec<BoolVar>,
    /// Inclusive lower bound
    pub lower: usize,
    /// Inclusive upper bound
    pub upper: usize,
}

/// Constraint model built once per run and consumed by a backend
#[derive(Clone, Debug, Default)]
pub struct CpModel {
    vars: Vec<IntVarInfo>,
    hints: Vec<Option<usize>>,
    tuples: Vec<TupleConstraint>,
    linear: Vec<LinearBounds>,
}

impl CpModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an integer variable with domain `[0, domain_size - 1]`
    ///
    /// A zero-sized domain is accepted and makes the model infeasible.
    pub fn new_int_var(&mut self, domain_size: usize, name: impl Into<String>) -> IntVar {
        let var = IntVar(self.vars.len());
        self.vars.push(IntVarInfo {
            name: name.into(),
            domain_size,
        });
        self.hints.push(None);
        var
    }

    /// Boolean indicator for `var == value`
    ///
    /// Indicators carry no state of their own; backends map them onto the
    /// encoding of the integer variable.
    pub const fn new_indicator(&self, var: IntVar, value: usize) -> BoolVar {
        BoolVar { var, value }
    }

    /// Restrict `(vars[0], vars[1])` to the listed pairs
    pub fn add_allowed_assignments(&mut self, vars: [IntVar; 2], pairs: impl Into<PairList>) {
        self.tuples.push(TupleConstraint {
            vars,
            kind: TupleKind::Allowed,
            pairs: pairs.into(),
        });
    }

    /// Prohibit every listed pair for `(vars[0], vars[1])`
    pub fn add_forbidden_assignments(&mut self, vars: [IntVar; 2], pairs: impl Into<PairList>) {
        self.tuples.push(TupleConstraint {
            vars,
            kind: TupleKind::Forbidden,
            pairs: pairs.into(),
        });
    }

    /// Bound the number of true indicators to `[lower, upper]`
    ///
    /// # Errors
    ///
    /// Returns an error if `lower > upper` or `upper` exceeds the number of terms
    pub fn add_linear_bounds(
        &mut self,
        terms: Vec<BoolVar>,
        lower: usize,
        upper: usize,
    ) -> Result<()> {
        if lower > upper {
            return Err(invalid_parameter(
                "lower",
                &lower,
                &format!("exceeds upper bound {upper}"),
            ));
        }
        if upper > terms.len() {
            return Err(invalid_parameter(
                "upper",
                &upper,
                &format!("exceeds the {} summed terms", terms.len()),
            ));
        }
        self.linear.push(LinearBounds {
            terms,
            lower,
            upper,
        });
        Ok(())
    }

    /// Suggest a value for `var`; later hints replace earlier ones
    pub fn add_hint(&mut self, var: IntVar, value: usize) {
        if let Some(slot) = self.hints.get_mut(var.index()) {
            *slot = Some(value);
        }
    }

    /// Declared integer variables in creation order
    pub fn int_vars(&self) -> &[IntVarInfo] {
        &self.vars
    }

    /// Domain size of `var`, zero for unknown handles
    pub fn domain_size(&self, var: IntVar) -> usize {
        self.vars.get(var.index()).map_or(0, |info| info.domain_size)
    }

    /// Hinted value of `var`, if any
    pub fn hint(&self, var: IntVar) -> Option<usize> {
        self.hints.get(var.index()).copied().flatten()
    }

    /// All hints, indexed like `int_vars`
    pub fn hints(&self) -> &[Option<usize>] {
        &self.hints
    }

    /// Registered table constraints
    pub fn tuple_constraints(&self) -> &[TupleConstraint] {
        &self.tuples
    }

    /// Registered linear bounds
    pub fn linear_constraints(&self) -> &[LinearBounds] {
        &self.linear
    }
}
