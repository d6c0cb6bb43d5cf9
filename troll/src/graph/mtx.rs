/*!
Serialization of the graph in Matrix Market symmetric coordinate format.

The header names the format, a counts line gives the dimensions and the edge
count, and each following line is one upper-triangle edge as `j+1 i+1`.
Vertex identifiers are 1-based in the file and 0-based everywhere else.
*/

use std::{
    fmt::Write as _,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    graph::CompatGraph,
    misc::log::targets::{self},
    types::err::{self, IoError},
};

impl CompatGraph {
    /// Writes the graph to `writer`, returning the edge count.
    pub fn write_mtx(&self, mut writer: impl Write) -> std::io::Result<usize> {
        let size = self.size();

        let mut body = String::default();
        let mut edges = 0;

        for i in 0..size {
            for j in (i + 1)..size {
                if self.matrix[[i, j]] == 1 {
                    let _ = writeln!(body, "{} {}", j + 1, i + 1);
                    edges += 1;
                }
            }
        }

        writeln!(writer, "%%MatrixMarket matrix coordinate real symmetric")?;
        writeln!(writer, "{size} {size} {edges}")?;
        writer.write_all(body.as_bytes())?;

        Ok(edges)
    }

    /// Rewrites the file at `path` with the present state of the graph.
    pub fn write_mtx_path(&self, path: &Path) -> Result<usize, err::ErrorKind> {
        let graph_error = || err::ErrorKind::from(IoError::Graph(path.to_path_buf()));

        let file = File::create(path).map_err(|_| graph_error())?;
        let mut writer = BufWriter::new(file);

        let edges = self.write_mtx(&mut writer).map_err(|_| graph_error())?;
        writer.flush().map_err(|_| graph_error())?;

        log::debug!(target: targets::GRAPH, "Graph of {edges} edges written to {path:?}");

        Ok(edges)
    }
}
