//! Structures fundamental to a merge: symbols, values, and cliques of configurations.

pub mod value;
pub use value::Value;

/// A symbol, by its interned identifier.
///
/// Identifiers are dense from zero in order of first observation, and never change.
pub type Symbol = u32;

/// A vertex of the compatibility graph, which is to say, the index of a parsed configuration.
pub type Node = usize;

/// An ordered collection of pairwise compatible configurations.
pub type Clique = Vec<Node>;
