/// Status codes, outcomes and the backend trait
pub mod backend;
/// CNF cardinality building blocks
pub mod encoding;
/// Solver-agnostic constraint model
pub mod model;
/// CNF lowering and the `varisat` backend
pub mod sat;

pub use backend::{Backend, SolveOutcome, SolveStatus};
pub use model::{BoolVar, CpModel, IntVar};
pub use sat::SatBackend;
