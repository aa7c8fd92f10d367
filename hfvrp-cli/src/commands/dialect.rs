#[cfg(test)]
#[path = "../../tests/unit/commands/dialect_test.rs"]
mod dialect_test;

use super::*;
use hfvrp_cli::extensions::dialect::convert_dialect;
use std::path::Path;

const INPUT_ARG_NAME: &str = "INPUT";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const EXTENSION_ARG_NAME: &str = "extension";

pub fn get_dialect_app() -> Command {
    Command::new("dialect")
        .about("Renames sections of heterogeneous fleet instances to ones supported by AILS solver")
        .arg(Arg::new(INPUT_ARG_NAME).help("Sets instance file or directory with instance files").required(true).index(1))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to output file, or directory when input is a directory")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(EXTENSION_ARG_NAME)
                .help("Specifies extension of instance files when input is a directory")
                .long(EXTENSION_ARG_NAME)
                .default_value("vrp"),
        )
}

pub fn run_dialect(matches: &ArgMatches) -> Result<(), String> {
    let input = matches.get_one::<String>(INPUT_ARG_NAME).ok_or("input is not specified")?;
    let output = matches.get_one::<String>(OUT_RESULT_ARG_NAME).ok_or("output is not specified")?;
    let extension = matches.get_one::<String>(EXTENSION_ARG_NAME).map(|ext| ext.as_str()).unwrap_or("vrp");

    convert_dialect(Path::new(input), Path::new(output), extension).map(|_| ()).map_err(|err| err.to_string())
}
