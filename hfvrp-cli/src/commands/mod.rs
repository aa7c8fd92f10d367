use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod batch;
pub mod convert;
pub mod dialect;

use hfvrp_cli::scientific::config::read_convert_config;
use hfvrp_cli::scientific::prelude::{ConvertConfig, InfoLogger};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;
use std::sync::Arc;

const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Adds arguments shared by conversion commands.
fn with_convert_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to json file with conversion settings")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether diagnostic messages are printed to stderr")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

fn get_convert_config(matches: &ArgMatches) -> Result<ConvertConfig, String> {
    match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_convert_config(BufReader::new(open_file(path, "config")?)).map_err(|err| err.to_string()),
        None => Ok(ConvertConfig::default()),
    }
}

fn get_logger(matches: &ArgMatches) -> Option<InfoLogger> {
    if matches.get_flag(LOG_ARG_NAME) { Some(Arc::new(|msg: &str| eprintln!("{msg}"))) } else { None }
}
