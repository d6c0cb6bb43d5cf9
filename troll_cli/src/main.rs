#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

use std::path::Path;

use troll::{
    context::Context,
    io::files,
    solver::pmc::Pmc,
    types::err::ErrorKind,
};

mod config_io;
mod parse;

use config_io::CliOptions;

fn main() {
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = parse::config::config_from_args(&matches);
    let options = CliOptions::from_args(&matches);

    let Some(batch_path) = options.batch else {
        println!("Please specify the mandatory batch file.");
        std::process::exit(1);
    };

    let solver = Pmc {
        command: config.solver_command.clone(),
    };

    let mut the_context = Context::from_config(config);

    let paths = ok_or_exit(files::paths_from_batch(&batch_path));
    for path in &paths {
        ok_or_exit(the_context.read_config_path(path));
    }

    println!(
        "Parsed {} configurations including {} symbols",
        the_context.configuration_count(),
        the_context.symbol_count()
    );

    let mut graph = ok_or_exit(the_context.build_graph());

    println!("Built graph with {} nodes", graph.size());
    println!("Number of edges: {}", the_context.counters.compatibles / 2);
    println!("Number of conflicts: {}", the_context.counters.conflicts / 2);

    if options.dump {
        ok_or_exit(graph.write_mtx_path(&the_context.config.graph_path));
        std::process::exit(0);
    }

    let cliques = ok_or_exit(the_context.clique_cover(&mut graph, &solver));

    ok_or_exit(the_context.merge_and_write(&cliques, Path::new(".")));

    if the_context.counters.merge_disagreements != 0 {
        eprintln!(
            "Warning: {} value disagreements while merging",
            the_context.counters.merge_disagreements
        );
    }

    println!(
        "Reduced {} configurations to {}",
        paths.len(),
        cliques.len()
    );
}

fn ok_or_exit<T>(result: Result<T, ErrorKind>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error: {e:?}");
            std::process::exit(2);
        }
    }
}
