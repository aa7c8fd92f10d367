#[cfg(test)]
#[path = "../../tests/unit/commands/batch_test.rs"]
mod batch_test;

use super::*;
use hfvrp_cli::extensions::batch::{BatchConfig, PairStatus, run_batch, write_batch_report};
use std::path::PathBuf;

const SOLUTIONS_DIR_ARG_NAME: &str = "solutions-dir";
const INSTANCES_DIR_ARG_NAME: &str = "instances-dir";
const OUT_DIR_ARG_NAME: &str = "out-dir";
const REPORT_ARG_NAME: &str = "report";
const THREADS_ARG_NAME: &str = "threads";

pub fn get_batch_app() -> Command {
    let command = Command::new("batch")
        .about("Converts all AILS solutions found in directory tree paired with instances by file stem")
        .arg(
            Arg::new(SOLUTIONS_DIR_ARG_NAME)
                .help("Sets directory which is searched recursively for solution files")
                .long(SOLUTIONS_DIR_ARG_NAME)
                .default_value("Solutions"),
        )
        .arg(
            Arg::new(INSTANCES_DIR_ARG_NAME)
                .help("Sets directory with instance files")
                .long(INSTANCES_DIR_ARG_NAME)
                .default_value("Instances"),
        )
        .arg(
            Arg::new(OUT_DIR_ARG_NAME)
                .help("Sets directory for converted solutions")
                .short('o')
                .long(OUT_DIR_ARG_NAME)
                .default_value("Converted"),
        )
        .arg(
            Arg::new(REPORT_ARG_NAME)
                .help("Specifies path to file for json report output")
                .short('r')
                .long(REPORT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(THREADS_ARG_NAME)
                .help("Specifies amount of worker threads, default is amount of cpus")
                .short('t')
                .long(THREADS_ARG_NAME)
                .required(false),
        );

    with_convert_args(command)
}

pub fn run_batch_convert(matches: &ArgMatches) -> Result<(), String> {
    let get_path = |arg_name: &str| {
        matches.get_one::<String>(arg_name).map(PathBuf::from).ok_or_else(|| format!("'{arg_name}' is not specified"))
    };

    let mut batch_config =
        BatchConfig::new(get_path(SOLUTIONS_DIR_ARG_NAME)?, get_path(INSTANCES_DIR_ARG_NAME)?, get_path(OUT_DIR_ARG_NAME)?);
    if let Some(threads) = parse_int_value::<usize>(matches, THREADS_ARG_NAME, "threads")? {
        batch_config.threads = threads;
    }

    let config = get_convert_config(matches)?;
    let logger = get_logger(matches);

    let report = run_batch(&batch_config, &config, logger).map_err(|err| format!("cannot run batch: '{err}'"))?;

    if let Some(path) = matches.get_one::<String>(REPORT_ARG_NAME) {
        let report_buffer = create_write_buffer(Some(create_file(path, "report")?));
        write_batch_report(report_buffer, &report).map_err(|err| err.to_string())?;
    }

    report.failures().for_each(|pair| {
        if let PairStatus::Failed { reason, .. } = &pair.status {
            eprintln!("{}: {reason}", pair.solution.display());
        }
    });
    eprintln!("converted: {}, failed: {}", report.converted, report.failed);

    if report.is_success() { Ok(()) } else { Err(format!("cannot convert {} solutions", report.failed)) }
}
