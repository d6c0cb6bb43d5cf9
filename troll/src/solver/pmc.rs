/*!
The adapter for the external `pmc` maximum clique tool.

`pmc` is spawned with `-a0` (the single-threaded algorithm) on the serialized
graph, and reports a maximum clique on a stdout line of the form:

```text
Maximum clique: 3 1 7
```

Vertex identifiers on the line are 1-based, matching the serialized graph.
*/

use std::{path::Path, process::Command};

use crate::{
    misc::log::targets::{self},
    solver::MaxCliqueSolver,
    structures::Clique,
    types::err::{self, SolverError},
};

/// The prefix of the clique line in the tool's output.
const CLIQUE_PREFIX: &str = "Maximum clique: ";

/// The external `pmc` tool, by command name or path.
#[derive(Clone, Debug)]
pub struct Pmc {
    /// The command to invoke, discovered on PATH unless absolute.
    pub command: String,
}

impl Default for Pmc {
    fn default() -> Self {
        Pmc {
            command: crate::config::defaults::SOLVER_COMMAND.to_string(),
        }
    }
}

impl MaxCliqueSolver for Pmc {
    fn find_max_clique(&self, graph_path: &Path) -> Result<Clique, err::ErrorKind> {
        let output = Command::new(&self.command)
            .arg("-a0")
            .arg("-f")
            .arg(graph_path)
            .output()
            .map_err(|_| err::ErrorKind::from(SolverError::Launch))?;

        if !output.status.success() {
            return Err(err::ErrorKind::from(SolverError::Status(
                output.status.code(),
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);

        for line in stdout.lines() {
            let Some(position) = line.find(CLIQUE_PREFIX) else {
                continue;
            };

            let mut clique = Clique::default();

            for token in line[position + CLIQUE_PREFIX.len()..].split_whitespace() {
                let node: usize = token
                    .parse()
                    .map_err(|_| err::ErrorKind::from(SolverError::Output))?;

                // Identifiers on the line are 1-based.
                match node {
                    0 => return Err(err::ErrorKind::from(SolverError::Output)),
                    _ => clique.push(node - 1),
                }
            }

            log::debug!(target: targets::SOLVER, "Maximum clique of size {}", clique.len());

            return Ok(clique);
        }

        Ok(Clique::default())
    }
}
