/*!
Configuration of a merge.

Primary configuration is a [Config], owned by a [Context](crate::context::Context).
Some structures clone parts of the configuration, notably the
[ConfigDB](crate::db::configs::ConfigDB) keeps its own
[ConfigDBConfig](crate::config::dbs::ConfigDBConfig).
*/

use std::path::PathBuf;

pub mod defaults;

pub mod dbs;
use dbs::ConfigDBConfig;

/// Which pairwise word test decides whether two configurations clash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueCheck {
    /// The shifted test: `((a << 1) & b) ^ ((b << 1) & a)` is nonzero on a clash.
    Shift,

    /// An explicit test per slot: a clash is a slot set on both sides with differing codes.
    PerSlot,
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of the configuration database.
    pub config_db: ConfigDBConfig,

    /// The number of worker threads for the parallel phases.
    pub thread_count: usize,

    /// The command used to invoke the external maximum clique solver.
    pub solver_command: String,

    /// Where the serialized graph is (re)written for the solver.
    pub graph_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            config_db: ConfigDBConfig::default(),
            thread_count: defaults::THREAD_COUNT,
            solver_command: defaults::SOLVER_COMMAND.to_string(),
            graph_path: PathBuf::from(defaults::GRAPH_PATH),
        }
    }
}
