use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use troll::config::defaults;

pub fn cli() -> Command {
    Command::new("troll")
        .about("Merges (partial) Kconfig configuration files into a small set of compatible configurations.")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("batch")
            .short('b')
            .long("batch")
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("Path to a batch file listing one configuration file per line (mandatory).
Listed files ending in '.xz' are decompressed on the fly."))

        .arg(Arg::new("threads")
            .short('t')
            .long("threads")
            .value_name("N")
            .value_parser(value_parser!(i64))
            .required(false)
            .num_args(1)
            .help(format!("The number of worker threads for building and updating the graph.
Default: {}

Values below 1 are coerced to 1, with a warning.", defaults::THREAD_COUNT)))

        .arg(Arg::new("dump")
            .short('d')
            .long("dump")
            .action(ArgAction::SetTrue)
            .required(false)
            .help(format!("Build the compatibility graph, write it to {}, and exit.", defaults::GRAPH_PATH)))

        .arg(Arg::new("per_slot_check")
            .long("per-slot-check")
            .action(ArgAction::SetTrue)
            .required(false)
            .help("Decide conflicts with an explicit per-slot comparison.")
            .long_help("Decide conflicts with an explicit per-slot comparison.

The default shifted test and the per-slot test agree on every legal value pair.
The switch exists as a guard against drift in the slot encoding."))

        .arg(Arg::new("solver")
            .long("solver")
            .value_name("COMMAND")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .help(format!("The maximum clique solver command to invoke on the serialized graph.
Default: {}", defaults::SOLVER_COMMAND)))
}
