//! Renames section keywords of heterogeneous fleet instances (Pessoa et al. 2018) to ones
//! which AILS solver expects.

#[cfg(test)]
#[path = "../../tests/unit/extensions/dialect_test.rs"]
mod dialect_test;

use hfvrp_scientific::ails::convert_instance_dialect;
use hfvrp_scientific::utils::GenericResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Converts a single instance file or all instance files with given extension in a directory.
/// Returns paths of written files.
pub fn convert_dialect(input: &Path, output: &Path, extension: &str) -> GenericResult<Vec<PathBuf>> {
    if input.is_dir() {
        fs::create_dir_all(output)
            .map_err(|err| format!("cannot create output directory '{}': '{err}'", output.display()))?;

        let mut inputs = fs::read_dir(input)?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == extension))
            .collect::<Vec<_>>();
        inputs.sort();

        inputs
            .into_iter()
            .map(|path| {
                let target = output.join(path.file_name().unwrap_or_default());
                convert_dialect_file(&path, &target).map(|_| target)
            })
            .collect()
    } else {
        convert_dialect_file(input, output).map(|_| vec![output.to_path_buf()])
    }
}

fn convert_dialect_file(input: &Path, output: &Path) -> GenericResult<()> {
    let instance =
        fs::read_to_string(input).map_err(|err| format!("cannot read instance '{}': '{err}'", input.display()))?;

    fs::write(output, convert_instance_dialect(instance.as_str()))
        .map_err(|err| format!("cannot write instance '{}': '{err}'", output.display()).into())
}
