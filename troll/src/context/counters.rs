use std::time::Duration;

/// Counts for various things which count, roughly.
pub struct Counters {
    /// A count of conflicting ordered pairs seen while building the graph.
    ///
    /// Each conflicting pair of configurations is counted twice, once from each side.
    pub conflicts: u64,

    /// A count of compatible ordered pairs seen while building the graph.
    ///
    /// Each edge of the graph is counted twice, once from each side.
    pub compatibles: u64,

    /// A count of cliques extracted by the solver.
    pub cliques: usize,

    /// A count of configurations left over once the solver found no further clique.
    pub leftovers: usize,

    /// A count of value disagreements observed while merging cliques.
    ///
    /// Nonzero only when the solver and the conflict test disagree about compatibility.
    pub merge_disagreements: usize,

    /// The time taken by the cover loop.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            conflicts: 0,
            compatibles: 0,

            cliques: 0,
            leftovers: 0,
            merge_disagreements: 0,

            time: Duration::from_secs(0),
        }
    }
}
