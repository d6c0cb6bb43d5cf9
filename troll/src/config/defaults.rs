//! Default configuration values.

use super::ValueCheck;

pub const THREAD_COUNT: usize = 1;

pub const WORD_GROWTH: usize = 100;

pub const VALUE_CHECK: ValueCheck = ValueCheck::Shift;

pub const SOLVER_COMMAND: &str = "pmc";

pub const GRAPH_PATH: &str = "graph.mtx";

/// The stem of merged output files, extended with `.<index>.<size>`.
pub const OUTPUT_STEM: &str = "troll.config";
