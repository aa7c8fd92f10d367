//! A command line interface to convert AILS solutions of heterogeneous fleet vehicle routing
//! problem into VRPLIB solution format.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
mod helpers;

mod commands;

mod cli {
    use super::commands::batch::{get_batch_app, run_batch_convert};
    use super::commands::convert::{get_convert_app, run_convert};
    use super::commands::dialect::{get_dialect_app, run_dialect};
    use clap::{ArgMatches, Command};

    pub fn get_app() -> Command {
        Command::new("HFVRP solution converter")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to convert AILS heterogeneous fleet solutions into VRPLIB format")
            .subcommand(get_convert_app())
            .subcommand(get_batch_app())
            .subcommand(get_dialect_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) -> Result<(), String> {
        match arg_matches.subcommand() {
            Some(("convert", matches)) => run_convert(matches),
            Some(("batch", matches)) => run_batch_convert(matches),
            Some(("dialect", matches)) => run_dialect(matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        }
    }
}

use std::process;

fn main() {
    if let Err(err) = cli::run_subcommand(cli::get_app().get_matches()) {
        eprintln!("{err}");
        process::exit(1);
    }
}
