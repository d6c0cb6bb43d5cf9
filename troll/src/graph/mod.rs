/*!
The compatibility graph, as a dense adjacency matrix.

Vertices are configurations, by index. An edge joins two configurations which
agree on every shared symbol, per the conflict test of the
[ConfigDB](crate::db::configs::ConfigDB). Each diagonal cell is set when the
graph is built and doubles as a vertex-still-present sentinel for the cover
loop: removing a clique zeroes the rows and columns, diagonal included, of
each of its members.

Both building and clique removal run on a configurable number of worker
threads. Work is partitioned into contiguous row chunks, each owned outright
by a single worker, so no cell ever has two writers and the matrix contents
are a pure function of the parsed configurations.
*/

pub mod mtx;

use std::sync::Mutex;

use ndarray::{Array2, Axis};

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::Node,
    types::err::{self, AllocationError, InternalError},
};

/// The compatibility graph over all parsed configurations.
#[derive(Clone)]
pub struct CompatGraph {
    /// The adjacency matrix, one byte per cell, symmetric at all times.
    matrix: Array2<u8>,
}

impl CompatGraph {
    /// The vertex count of the graph.
    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    /// Whether the graph holds an edge between `i` and `j`.
    pub fn edge(&self, i: Node, j: Node) -> bool {
        self.matrix[[i, j]] == 1
    }

    /// Every vertex whose presence sentinel remains set.
    pub fn survivors(&self) -> Vec<Node> {
        self.matrix
            .diag()
            .iter()
            .enumerate()
            .filter_map(|(node, &cell)| (cell == 1).then_some(node))
            .collect()
    }

    /// Zeroes the row and column of every member of `clique`, diagonal included.
    ///
    /// Workers own contiguous row chunks: a member's row is cleared whole, and any
    /// other row is cleared at the member columns. Cell ownership stays disjoint
    /// however the clique size compares to the worker count.
    pub fn remove_clique(&mut self, clique: &[Node], thread_count: usize) {
        let size = self.size();
        if size == 0 || clique.is_empty() {
            return;
        }

        let mut member = vec![false; size];
        for &node in clique {
            member[node] = true;
        }
        let member = &member;

        let chunk = size.div_ceil(thread_count.max(1));

        crossbeam::thread::scope(|s| {
            for (index, mut rows) in self.matrix.axis_chunks_iter_mut(Axis(0), chunk).enumerate() {
                let base = index * chunk;

                s.spawn(move |_| {
                    for (offset, mut row) in rows.outer_iter_mut().enumerate() {
                        if member[base + offset] {
                            row.fill(0);
                        } else {
                            for &node in clique {
                                row[node] = 0;
                            }
                        }
                    }
                });
            }
        })
        .expect("! Graph update worker panicked");
    }
}

impl Context {
    /// Builds the compatibility graph over every configuration in the context.
    ///
    /// The row range is split into contiguous chunks, one per worker. Each worker
    /// evaluates its rows against every column, so symmetry follows from the
    /// symmetry of the conflict test. Worker tallies of conflicting and compatible
    /// ordered pairs fold into the context counters under a single mutex.
    pub fn build_graph(&mut self) -> Result<CompatGraph, err::ErrorKind> {
        let size = self.config_db.count();

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(size * size)
            .map_err(|_| err::ErrorKind::from(AllocationError::Matrix(size * size)))?;
        cells.resize(size * size, 0u8);

        let mut matrix = Array2::from_shape_vec((size, size), cells)
            .map_err(|_| err::ErrorKind::from(InternalError::MatrixShape))?;

        if size == 0 {
            return Ok(CompatGraph { matrix });
        }

        let chunk = size.div_ceil(self.config.thread_count.max(1));
        let config_db = &self.config_db;
        let tally = Mutex::new((0_u64, 0_u64));

        crossbeam::thread::scope(|s| {
            for (index, mut rows) in matrix.axis_chunks_iter_mut(Axis(0), chunk).enumerate() {
                let base = index * chunk;
                let tally = &tally;

                s.spawn(move |_| {
                    let mut conflicts = 0_u64;
                    let mut compatibles = 0_u64;
                    let row_count = rows.nrows();

                    for (offset, mut row) in rows.outer_iter_mut().enumerate() {
                        let i = base + offset;

                        for j in 0..size {
                            if i == j {
                                row[j] = 1;
                                continue;
                            }

                            if config_db.conflict(i, j) {
                                conflicts += 1;
                            } else {
                                row[j] = 1;
                                compatibles += 1;
                            }
                        }
                    }

                    let mut totals = tally.lock().expect("! Poisoned tally mutex");
                    totals.0 += conflicts;
                    totals.1 += compatibles;

                    log::debug!(target: targets::GRAPH,
                        "Worker finished rows {base}:{}", base + row_count);
                });
            }
        })
        .expect("! Graph build worker panicked");

        let (conflicts, compatibles) = tally.into_inner().expect("! Poisoned tally mutex");
        self.counters.conflicts += conflicts;
        self.counters.compatibles += compatibles;

        log::info!(target: targets::GRAPH,
            "Graph built with {size} nodes, {} edges", compatibles / 2);

        Ok(CompatGraph { matrix })
    }
}
