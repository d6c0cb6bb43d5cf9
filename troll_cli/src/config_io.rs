use std::path::PathBuf;

use clap::ArgMatches;

/// Options of the command line interface itself, as opposed to the merge.
#[derive(Clone)]
pub struct CliOptions {
    /// The batch file listing one configuration file per line.
    pub batch: Option<PathBuf>,

    /// Build and dump the graph, then exit.
    pub dump: bool,
}

impl CliOptions {
    pub fn from_args(args: &ArgMatches) -> Self {
        CliOptions {
            batch: args.get_one::<PathBuf>("batch").cloned(),
            dump: args.get_flag("dump"),
        }
    }
}
