use clap::ArgMatches;

use troll::config::{Config, ValueCheck};

pub fn config_from_args(args: &ArgMatches) -> Config {
    let mut the_config = Config::default();

    if let Some(&threads) = args.get_one::<i64>("threads") {
        if threads < 1 {
            println!("Invalid number of threads, defaulting to 1.");
            the_config.thread_count = 1;
        } else {
            the_config.thread_count = threads as usize;
        }
    };

    if args.get_flag("per_slot_check") {
        the_config.config_db.value_check = ValueCheck::PerSlot;
    };

    if let Some(command) = args.get_one::<String>("solver") {
        the_config.solver_command = command.clone();
    };

    the_config
}
