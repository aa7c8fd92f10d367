#[cfg(test)]
#[path = "../../tests/unit/ails/solution_test.rs"]
mod solution_test;

use crate::common::*;
use crate::config::ConvertConfig;
use crate::format::*;
use crate::models::*;
use std::io::{BufReader, Read};

/// A trait to read solution written by AILS solver.
/// NOTE: Solution feasibility is not checked and cost is not recalculated.
pub trait AilsSolution {
    /// Reads route records and total cost.
    fn read_ails_solution(self, config: &ConvertConfig) -> ConvertResult<RawSolution>;
}

impl<R: Read> AilsSolution for BufReader<R> {
    fn read_ails_solution(self, config: &ConvertConfig) -> ConvertResult<RawSolution> {
        let lines = read_trimmed_lines(self).map_err(|err| {
            ConvertError::new_with_details(ErrorKind::MalformedSolution, "cannot read solution", err.to_string())
        })?;

        read_solution_lines(lines.as_slice(), config)
    }
}

impl AilsSolution for &str {
    fn read_ails_solution(self, config: &ConvertConfig) -> ConvertResult<RawSolution> {
        BufReader::new(self.as_bytes()).read_ails_solution(config)
    }
}

fn read_solution_lines(lines: &[String], config: &ConvertConfig) -> ConvertResult<RawSolution> {
    let routes = lines
        .iter()
        .filter(|line| line.starts_with(config.route_token.as_str()))
        .map(|line| read_route(line, config))
        .collect::<ConvertResult<Vec<_>>>()?;

    let cost = read_cost(lines, config)?;

    Ok(RawSolution { routes, cost })
}

/// Reads route line, e.g. `Veiculo [type=0, q=283, f=575, r=1.16] Route: 3 7 1`.
fn read_route(line: &str, config: &ConvertConfig) -> ConvertResult<RawRouteRecord> {
    let malformed = |cause: &str| ConvertError::new_with_details(ErrorKind::MalformedRouteDescriptor, cause, line);

    let (head, tail) =
        line.split_once(config.route_keyword.as_str()).ok_or_else(|| malformed("cannot find route keyword"))?;

    let descriptor = head
        .strip_prefix(config.route_token.as_str())
        .and_then(read_descriptor)
        .ok_or_else(|| malformed("vehicle descriptor does not match '[type=<int>, q=<int>, f=<int>, r=<float>]'"))?;

    // the list of visits follows the first colon, a bare colon means an unused vehicle
    let visits = tail
        .trim_start()
        .strip_prefix(':')
        .ok_or_else(|| malformed("cannot find visits separator"))
        .and_then(|visits| {
            parse_values::<usize>(visits, "cannot parse node id").map_err(|_| malformed("invalid node id"))
        })?;

    Ok(RawRouteRecord { descriptor, visits })
}

fn read_descriptor(descriptor: &str) -> Option<VehicleDescriptor> {
    let fields = descriptor
        .trim()
        .strip_prefix('[')?
        .strip_suffix(']')?
        .split(',')
        .map(|field| field.split_once('=').map(|(key, value)| (key.trim(), value.trim())))
        .collect::<Option<Vec<_>>>()?;

    match fields.as_slice() {
        [("type", reported_type), ("q", capacity), ("f", fixed_cost), ("r", variable_cost)] => {
            Some(VehicleDescriptor {
                reported_type: reported_type.parse().ok()?,
                capacity: capacity.parse().ok()?,
                fixed_cost: fixed_cost.parse().ok()?,
                variable_cost: variable_cost.parse().ok()?,
            })
        }
        _ => None,
    }
}

fn read_cost(lines: &[String], config: &ConvertConfig) -> ConvertResult<f64> {
    let label = config.cost_label.as_str();
    let cost_lines = lines.iter().filter_map(|line| line.strip_prefix(label)).collect::<Vec<_>>();

    let value = match cost_lines.as_slice() {
        [value] => *value,
        [] => return Err(ConvertError::new(ErrorKind::MissingCost, format!("cannot find line starting with '{label}'"))),
        _ => {
            return Err(ConvertError::new_with_details(
                ErrorKind::AmbiguousCost,
                format!("expecting one line starting with '{label}'"),
                format!("found {} lines", cost_lines.len()),
            ));
        }
    };

    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|cost| cost.is_finite())
        .map(|cost| round_to(cost, config.cost_precision))
        .ok_or_else(|| ConvertError::new_with_details(ErrorKind::MissingCost, "cannot parse cost value", value.trim()))
}
