//! Procedures over a context: extracting a clique cover and merging its cliques.

pub mod cover;
pub mod merge;
