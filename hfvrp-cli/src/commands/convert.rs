#[cfg(test)]
#[path = "../../tests/unit/commands/convert_test.rs"]
mod convert_test;

use super::*;
use hfvrp_cli::extensions::convert::convert_files;
use std::path::Path;

const INSTANCE_ARG_NAME: &str = "instance";
const SOLUTION_ARG_NAME: &str = "solution";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_convert_app() -> Command {
    let command = Command::new("convert")
        .about("Converts AILS solution of heterogeneous fleet problem into VRPLIB solution")
        .arg(
            Arg::new(INSTANCE_ARG_NAME)
                .help("Sets instance file which defines vehicle types")
                .short('i')
                .long(INSTANCE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets AILS solution file")
                .short('s')
                .long(SOLUTION_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        );

    with_convert_args(command)
}

pub fn run_convert(matches: &ArgMatches) -> Result<(), String> {
    let instance_path = matches.get_one::<String>(INSTANCE_ARG_NAME).ok_or("instance file is not specified")?;
    let solution_path = matches.get_one::<String>(SOLUTION_ARG_NAME).ok_or("solution file is not specified")?;

    let config = get_convert_config(matches)?;
    let logger = get_logger(matches);

    let text = convert_files(Path::new(instance_path), Path::new(solution_path), &config, logger.as_ref())
        .map_err(|err| err.to_string())?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let mut out_buffer = create_write_buffer(out_result);

    out_buffer
        .write_all(text.as_bytes())
        .and_then(|_| out_buffer.flush())
        .map_err(|err| format!("cannot write result: '{err}'"))
}
