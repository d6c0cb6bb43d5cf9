/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    pub const PARSE: &str = "parse";
    pub const GRAPH: &str = "graph";
    pub const COVER: &str = "cover";
    pub const SOLVER: &str = "solver";
    pub const MERGE: &str = "merge";
}
