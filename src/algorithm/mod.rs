/// Adjacency and target-ratio constraint encoding
pub mod constraints;
/// Random non-binding search hints
pub mod hints;
/// Build, solve and read back a map
pub mod pipeline;
