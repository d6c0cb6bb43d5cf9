//! The maximum clique solver boundary.
//!
//! The cover loop is indifferent to where cliques come from, and so consumes any
//! [MaxCliqueSolver]. The one shipped implementation, [Pmc](pmc::Pmc), spawns the
//! external `pmc` tool. Tests script the trait directly.

pub mod pmc;

use std::path::Path;

use crate::{structures::Clique, types::err};

/// A source of maximum cliques for a serialized graph.
pub trait MaxCliqueSolver {
    /// A maximum clique of the graph serialized at `graph_path`.
    ///
    /// An empty clique reports that no vertex remains, and ends the cover loop.
    fn find_max_clique(&self, graph_path: &Path) -> Result<Clique, err::ErrorKind>;
}
