/*!
Error types used in the library.

- Most of these terminate a merge, as the pipeline makes no attempt at local recovery.
- The one soft condition, a value disagreement while merging a clique, is reported
  through [Counters](crate::context::Counters) and a diagnostic rather than an error.

Names of the error enums overlap with the subsystems they belong to, and so
`err::{self}` is often used to prefix the types with `err::`.
*/

use std::path::PathBuf;

use crate::structures::{Node, Symbol};

/// A union of varied error kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An error reading inputs or writing outputs.
    Io(IoError),

    /// An error related to parsing a configuration file.
    Parse(ParseError),

    /// A failure to obtain memory for the adjacency matrix.
    Allocation(AllocationError),

    /// An error related to the external maximum clique solver.
    Solver(SolverError),

    /// A violated invariant, indicating a bug.
    Internal(InternalError),
}

/// Errors reading or writing files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IoError {
    /// The batch file could not be read.
    Batch(PathBuf),

    /// A configuration file listed in the batch could not be read.
    Configuration(PathBuf),

    /// The serialized graph could not be written.
    Graph(PathBuf),

    /// A merged configuration file could not be written.
    Output(PathBuf),
}

impl From<IoError> for ErrorKind {
    fn from(e: IoError) -> Self {
        ErrorKind::Io(e)
    }
}

/// Errors during parsing of a configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A line could not be read.
    Read(usize),

    /// A line holds no `=` delimiter.
    MissingDelimiter(usize),

    /// A value token outside {n, m, y}.
    Value(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// A failure to obtain memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocationError {
    /// The adjacency matrix could not be reserved.
    Matrix(usize),
}

impl From<AllocationError> for ErrorKind {
    fn from(e: AllocationError) -> Self {
        ErrorKind::Allocation(e)
    }
}

/// Errors from the external maximum clique solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverError {
    /// The solver process could not be spawned.
    Launch,

    /// The solver exited with a failure status.
    Status(Option<i32>),

    /// The clique line of the solver's output could not be parsed.
    Output,

    /// The solver named a vertex outside the graph.
    Vertex(Node),
}

impl From<SolverError> for ErrorKind {
    fn from(e: SolverError) -> Self {
        ErrorKind::Solver(e)
    }
}

/// Violated invariants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InternalError {
    /// A symbol identifier with no interned name.
    UnknownSymbol(Symbol),

    /// The adjacency matrix buffer did not match its shape.
    MatrixShape,
}

impl From<InternalError> for ErrorKind {
    fn from(e: InternalError) -> Self {
        ErrorKind::Internal(e)
    }
}
