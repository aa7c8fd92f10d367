//! Contains conversion pipeline: instance and solver output are read independently, then
//! routes get their canonical vehicle type and slot.

#[cfg(test)]
#[path = "../tests/unit/convert_test.rs"]
mod convert_test;

use crate::ails::*;
use crate::config::ConvertConfig;
use crate::format::ConvertResult;
use crate::models::CanonicalSolution;
use crate::utils::InfoLogger;
use std::io::{BufReader, Read};

/// Converts AILS solution of heterogeneous fleet problem into canonical solution.
/// Either a complete solution is returned or the first error encountered.
pub fn convert_solution<I: Read, S: Read>(
    instance: BufReader<I>,
    solution: BufReader<S>,
    config: &ConvertConfig,
    logger: Option<&InfoLogger>,
) -> ConvertResult<CanonicalSolution> {
    let log = |msg: &str| {
        if let Some(logger) = logger {
            (logger)(msg)
        }
    };

    let instance = instance.read_ails_instance(config)?;
    if instance.has_ambiguous_capacities() {
        log(&format!(
            "warning: capacities {:?} are not unique, first matching vehicle type is used",
            instance.capacities()
        ));
    }

    let solution = solution.read_ails_solution(config)?;
    let total_routes = solution.routes.len();

    let routes = resolve_routes(&instance, solution.routes)?;
    let canonical = reindex_routes(&instance, routes, solution.cost)?;

    log(&format!(
        "converted {total_routes} routes into {} slots ({} used), cost: {}",
        canonical.slots.len(),
        canonical.used_slots(),
        canonical.cost
    ));

    Ok(canonical)
}
