//! Converts many (instance, solution) pairs found in directories.
//!
//! Every solution file found recursively in solutions directory is paired with an instance file
//! which has the same stem. Pairs are converted independently in parallel: a failed pair is
//! reported and does not affect others, and nothing is written for it.

#[cfg(test)]
#[path = "../../tests/unit/extensions/batch_test.rs"]
mod batch_test;

use super::convert::convert_to_vrplib;
use hfvrp_scientific::prelude::*;
use hfvrp_scientific::utils::{ThreadPool, parallel_into_collect};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Specifies where to look for input files and where to put results.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// A directory which is searched recursively for solutions.
    pub solutions_dir: PathBuf,
    /// A directory with instances.
    pub instances_dir: PathBuf,
    /// A directory where converted solutions are written keeping relative paths of solutions.
    pub output_dir: PathBuf,
    /// Extension of instance files.
    pub instance_extension: String,
    /// Extension of solution files.
    pub solution_extension: String,
    /// Amount of worker threads.
    pub threads: usize,
}

impl BatchConfig {
    /// Creates a new instance of `BatchConfig` with default extensions and amount of threads
    /// equal to amount of CPUs.
    pub fn new(solutions_dir: PathBuf, instances_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            solutions_dir,
            instances_dir,
            output_dir,
            instance_extension: "vrp".to_string(),
            solution_extension: "sol".to_string(),
            threads: crate::get_cpus(),
        }
    }
}

/// Paths of files involved in one conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionPair {
    /// Solution path.
    pub solution: PathBuf,
    /// Instance path, `None` if there is no instance with the same stem.
    pub instance: Option<PathBuf>,
    /// Output path.
    pub output: PathBuf,
}

/// A result of one conversion.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PairStatus {
    /// Solution is converted and written.
    Converted,
    /// Solution is not converted, output is not written.
    #[serde(rename_all = "camelCase")]
    Failed {
        /// A conversion error, if failure is not caused by file handling.
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<ConvertError>,
        /// A failure reason.
        reason: String,
    },
}

/// A report about one conversion.
#[derive(Clone, Debug, Serialize)]
pub struct PairReport {
    /// Solution path.
    pub solution: PathBuf,
    /// Output path.
    pub output: PathBuf,
    /// Conversion status.
    #[serde(flatten)]
    pub status: PairStatus,
}

/// A report about the whole batch.
#[derive(Clone, Debug, Serialize)]
pub struct BatchReport {
    /// Amount of converted pairs.
    pub converted: usize,
    /// Amount of failed pairs.
    pub failed: usize,
    /// Reports in order of solution paths.
    pub pairs: Vec<PairReport>,
}

impl BatchReport {
    /// Returns true if all pairs are converted.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Returns failed pairs.
    pub fn failures(&self) -> impl Iterator<Item = &PairReport> + '_ {
        self.pairs.iter().filter(|pair| matches!(pair.status, PairStatus::Failed { .. }))
    }
}

/// Finds solutions and their instances.
pub fn discover_pairs(config: &BatchConfig) -> GenericResult<Vec<SolutionPair>> {
    let instances = collect_files(&config.instances_dir, config.instance_extension.as_str(), false)?
        .into_iter()
        .filter_map(|path| get_stem(&path).map(|stem| (stem, path)))
        .collect::<FxHashMap<_, _>>();

    collect_files(&config.solutions_dir, config.solution_extension.as_str(), true)?
        .into_iter()
        .map(|solution| {
            let relative = solution.strip_prefix(&config.solutions_dir).map_err(|err| {
                GenericError::from(format!("cannot get relative path of '{}': '{err}'", solution.display()))
            })?;
            let output = config.output_dir.join(relative);
            let instance = get_stem(&solution).and_then(|stem| instances.get(&stem).cloned());

            Ok(SolutionPair { solution, instance, output })
        })
        .collect()
}

/// Converts all discovered pairs in parallel and writes results.
pub fn run_batch(
    batch_config: &BatchConfig,
    convert_config: &ConvertConfig,
    logger: Option<InfoLogger>,
) -> GenericResult<BatchReport> {
    let pairs = discover_pairs(batch_config)?;

    if let Some(logger) = &logger {
        (logger)(&format!("found {} solutions, using {} threads", pairs.len(), batch_config.threads));
    }

    let pool = ThreadPool::new(batch_config.threads.max(1))?;
    let reports = pool.execute(|| {
        parallel_into_collect(pairs, |pair| {
            let status = convert_pair(&pair, convert_config, logger.as_ref());
            PairReport { solution: pair.solution, output: pair.output, status }
        })
    });

    let failed = reports.iter().filter(|report| matches!(report.status, PairStatus::Failed { .. })).count();

    Ok(BatchReport { converted: reports.len() - failed, failed, pairs: reports })
}

/// Writes batch report as json.
pub fn write_batch_report<W: Write>(writer: BufWriter<W>, report: &BatchReport) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, report).map_err(|err| format!("cannot write batch report: '{err}'").into())
}

fn convert_pair(pair: &SolutionPair, config: &ConvertConfig, logger: Option<&InfoLogger>) -> PairStatus {
    let failed = |error: Option<ConvertError>, reason: String| PairStatus::Failed { error, reason };

    let Some(instance_path) = &pair.instance else {
        return failed(None, format!("cannot find instance for '{}'", pair.solution.display()));
    };

    let (instance, solution) = match (File::open(instance_path), File::open(&pair.solution)) {
        (Ok(instance), Ok(solution)) => (BufReader::new(instance), BufReader::new(solution)),
        (Err(err), _) | (_, Err(err)) => return failed(None, format!("cannot open input file: '{err}'")),
    };

    let logger = logger.map(|logger| {
        let logger = logger.clone();
        let name = pair.solution.display().to_string();
        Arc::new(move |msg: &str| (logger)(&format!("{name}: {msg}"))) as InfoLogger
    });

    match convert_to_vrplib(instance, solution, config, logger.as_ref()) {
        Ok(text) => match write_output(&pair.output, text.as_str()) {
            Ok(_) => PairStatus::Converted,
            Err(err) => failed(None, err.to_string()),
        },
        Err(err) => {
            let reason = err.to_string();
            failed(Some(err), reason)
        }
    }
}

fn write_output(path: &Path, text: &str) -> GenericResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("cannot create output directory '{}': '{err}'", parent.display()))?;
    }

    fs::write(path, text).map_err(|err| format!("cannot write output file '{}': '{err}'", path.display()).into())
}

/// Returns files with given extension sorted by path.
fn collect_files(dir: &Path, extension: &str, is_recursive: bool) -> GenericResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut dirs = vec![dir.to_path_buf()];

    while let Some(dir) = dirs.pop() {
        let entries =
            fs::read_dir(&dir).map_err(|err| format!("cannot read directory '{}': '{err}'", dir.display()))?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            // symlinked directories are not followed
            if entry.file_type()?.is_dir() {
                if is_recursive {
                    dirs.push(path);
                }
            } else if path.extension().is_some_and(|ext| ext == extension) {
                files.push(path);
            }
        }
    }

    files.sort();

    Ok(files)
}

fn get_stem(path: &Path) -> Option<String> {
    path.file_stem().and_then(|stem| stem.to_str()).map(|stem| stem.to_string())
}
