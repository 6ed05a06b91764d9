//! Solver collaborator contract: status codes, outcomes and the backend trait

use crate::io::error::{GenerationError, Result};
use crate::solver::model::{CpModel, IntVar};
use std::fmt;

/// Final status reported by a backend
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveStatus {
    /// A solution was found and proven best; satisfaction models without an
    /// objective report this for any solution
    Optimal,
    /// A solution was found without an optimality proof
    Feasible,
    /// The model has no solution
    Infeasible,
    /// The backend gave up before reaching a verdict
    Unknown,
}

impl SolveStatus {
    /// Whether a value can be read back for every variable
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Optimal | Self::Feasible)
    }
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Optimal => "OPTIMAL",
            Self::Feasible => "FEASIBLE",
            Self::Infeasible => "INFEASIBLE",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

/// Status plus, on success, one value per integer variable
#[derive(Clone, Debug)]
pub struct SolveOutcome {
    status: SolveStatus,
    values: Vec<usize>,
}

impl SolveOutcome {
    /// Successful outcome carrying the chosen values in variable order
    pub const fn solved(status: SolveStatus, values: Vec<usize>) -> Self {
        Self { status, values }
    }

    /// Outcome without an assignment
    pub const fn failed(status: SolveStatus) -> Self {
        Self {
            status,
            values: Vec::new(),
        }
    }

    /// Reported status
    pub const fn status(&self) -> SolveStatus {
        self.status
    }

    /// Chosen value of `var`, available only after a successful solve
    pub fn value(&self, var: IntVar) -> Option<usize> {
        if self.status.is_success() {
            self.values.get(var.index()).copied()
        } else {
            None
        }
    }

    /// Consume the outcome, yielding the assignment
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Unsolvable`] unless the status is a success
    pub fn into_values(self) -> Result<Vec<usize>> {
        if self.status.is_success() {
            Ok(self.values)
        } else {
            Err(GenerationError::Unsolvable {
                status: self.status,
            })
        }
    }
}

/// External search engine able to solve a [`CpModel`]
///
/// Implementations own the search entirely; callers only inspect the status
/// and read values back.
pub trait Backend {
    /// Run the search to completion on `model`
    fn solve(&mut self, model: &CpModel) -> SolveOutcome;
}
