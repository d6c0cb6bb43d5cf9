use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    sync::Mutex,
};

use troll::{
    config::Config,
    context::Context,
    solver::MaxCliqueSolver,
    structures::Clique,
    types::err::{self},
};

/// A context whose graph file lands in `directory`, with configurations read from strings.
pub fn context_in(directory: &Path, files: &[&str], thread_count: usize) -> Context {
    let mut config = Config::default();
    config.thread_count = thread_count;
    config.graph_path = directory.join("graph.mtx");

    let mut the_context = Context::from_config(config);
    for file in files {
        the_context.read_config(file.as_bytes()).unwrap();
    }
    the_context
}

/// A solver which replays a fixed sequence of cliques, then reports none.
pub struct ScriptedSolver {
    script: Mutex<VecDeque<Clique>>,
}

impl ScriptedSolver {
    pub fn new(cliques: Vec<Clique>) -> Self {
        ScriptedSolver {
            script: Mutex::new(cliques.into()),
        }
    }
}

impl MaxCliqueSolver for ScriptedSolver {
    fn find_max_clique(&self, _graph_path: &Path) -> Result<Clique, err::ErrorKind> {
        Ok(self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }
}

/// The serialized graph at `path`: the vertex count and the 0-based edge list.
pub fn read_mtx(path: &Path) -> (usize, Vec<(usize, usize)>) {
    let file = File::open(path).unwrap();
    let mut lines = BufReader::new(file).lines();

    let header = lines.next().unwrap().unwrap();
    assert_eq!(header, "%%MatrixMarket matrix coordinate real symmetric");

    let counts = lines.next().unwrap().unwrap();
    let counts: Vec<usize> = counts
        .split_whitespace()
        .map(|token| token.parse().unwrap())
        .collect();
    let [rows, columns, expected] = counts.as_slice() else {
        panic!("Malformed counts line");
    };
    assert_eq!(rows, columns);

    let mut edges = Vec::new();
    for line in lines {
        let line = line.unwrap();
        let pair: Vec<usize> = line
            .split_whitespace()
            .map(|token| token.parse().unwrap())
            .collect();
        let [j, i] = pair.as_slice() else {
            panic!("Malformed edge line");
        };
        assert!(j > i, "Edges are upper triangle, column first");
        edges.push((i - 1, j - 1));
    }
    assert_eq!(edges.len(), *expected);

    (*rows, edges)
}

/// A maximum clique solver which reads the serialized graph and searches exhaustively.
///
/// Cliques of size one are never reported, as an isolated vertex in the file is
/// indistinguishable from a removed one. The cover loop's leftover pass collects
/// such vertices instead.
pub struct ExhaustiveSolver {}

impl MaxCliqueSolver for ExhaustiveSolver {
    fn find_max_clique(&self, graph_path: &Path) -> Result<Clique, err::ErrorKind> {
        let (size, edges) = read_mtx(graph_path);
        assert!(size <= 16, "Exhaustive search is for small graphs only");

        let mut adjacent = vec![vec![false; size]; size];
        for (i, j) in edges {
            adjacent[i][j] = true;
            adjacent[j][i] = true;
        }

        let mut best: u32 = 0;

        for mask in 1_u32..(1 << size) {
            if mask.count_ones() <= best.count_ones().max(1) {
                continue;
            }

            let members: Clique = (0..size).filter(|&node| mask & (1 << node) != 0).collect();
            let clique = members
                .iter()
                .enumerate()
                .all(|(position, &a)| members[position + 1..].iter().all(|&b| adjacent[a][b]));

            if clique {
                best = mask;
            }
        }

        Ok((0..size).filter(|&node| best & (1 << node) != 0).collect())
    }
}

/// The merged output files under `directory`, as `(name, contents)` in name order.
pub fn merged_outputs(directory: &Path) -> Vec<(String, String)> {
    let mut outputs: Vec<(String, String)> = std::fs::read_dir(directory)
        .unwrap()
        .flatten()
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with("troll.config.")
        })
        .map(|entry| {
            (
                entry.file_name().to_string_lossy().into_owned(),
                std::fs::read_to_string(entry.path()).unwrap(),
            )
        })
        .collect();
    outputs.sort();
    outputs
}

/// Writes `contents` to `directory/name`, returning the path.
pub fn write_file(directory: &Path, name: &str, contents: &str) -> PathBuf {
    let path = directory.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
