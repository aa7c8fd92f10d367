//! Converts a single (instance, solution) pair.

#[cfg(test)]
#[path = "../../tests/unit/extensions/convert_test.rs"]
mod convert_test;

use hfvrp_scientific::prelude::*;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Converts AILS solution into VRPLIB text. Nothing is returned unless conversion fully succeeds.
pub fn convert_to_vrplib<I: Read, S: Read>(
    instance: BufReader<I>,
    solution: BufReader<S>,
    config: &ConvertConfig,
    logger: Option<&InfoLogger>,
) -> Result<String, ConvertError> {
    convert_solution(instance, solution, config, logger)
        .map(|solution| format_vrplib_solution(&solution, config.cost_precision))
}

/// Converts AILS solution stored in file using instance stored in file.
pub fn convert_files(
    instance_path: &Path,
    solution_path: &Path,
    config: &ConvertConfig,
    logger: Option<&InfoLogger>,
) -> GenericResult<String> {
    let open = |path: &Path, description: &str| {
        File::open(path)
            .map(BufReader::new)
            .map_err(|err| GenericError::from(format!("cannot open {description} file '{}': '{err}'", path.display())))
    };

    let instance = open(instance_path, "instance")?;
    let solution = open(solution_path, "solution")?;

    convert_to_vrplib(instance, solution, config, logger).map_err(GenericError::from)
}
