/*!
Covering the compatibility graph with cliques.

# Overview

A minimum clique cover would give the smallest possible set of merged
configurations, but finding one is hard. The cover here is the usual greedy
approximation: repeatedly extract a maximum clique and remove its vertices,
until no vertex remains.

Roughly, the loop is:

```none
      +-----------+     serialized graph      +--------+
  +-->| write_mtx |-------------------------->| solver |
  |   +-----------+                           +--------+
  |                                                |
  |            empty clique: leftover pass, done   |
  |               <--------------------------------+
  |                                                | a clique
  |   +---------------+                            |
  +---| remove_clique |<---------------------------+
      +---------------+
```

The leftover pass turns every vertex whose diagonal sentinel survives into a
singleton clique. With a correctly functioning solver the loop only ends once
the graph is empty, and the pass contributes nothing; it guards against a
solver which gives up early.
*/

use crate::{
    context::Context,
    graph::CompatGraph,
    misc::log::targets::{self},
    solver::MaxCliqueSolver,
    structures::Clique,
    types::err::{self, SolverError},
};

impl Context {
    /// Partitions the vertices of `graph` into cliques.
    ///
    /// The graph file at the configured path is rewritten before each solver call,
    /// and the graph is consumed: on success every cell of the matrix is zero.
    pub fn clique_cover(
        &mut self,
        graph: &mut CompatGraph,
        solver: &dyn MaxCliqueSolver,
    ) -> Result<Vec<Clique>, err::ErrorKind> {
        let timer = std::time::Instant::now();

        let mut cliques: Vec<Clique> = Vec::default();

        'cover_loop: loop {
            graph.write_mtx_path(&self.config.graph_path)?;

            let clique = solver.find_max_clique(&self.config.graph_path)?;

            if clique.is_empty() {
                break 'cover_loop;
            }

            for &node in &clique {
                if node >= graph.size() {
                    return Err(err::ErrorKind::from(SolverError::Vertex(node)));
                }
            }

            log::info!(target: targets::COVER, "Clique of size {} extracted", clique.len());

            graph.remove_clique(&clique, self.config.thread_count);

            self.counters.cliques += 1;
            cliques.push(clique);
        }

        for node in graph.survivors() {
            log::info!(target: targets::COVER, "Leftover configuration {node}");
            self.counters.leftovers += 1;
            cliques.push(vec![node]);
        }

        self.counters.time = timer.elapsed();

        Ok(cliques)
    }
}
