#[cfg(test)]
#[path = "../../tests/unit/vrplib/reader_test.rs"]
mod reader_test;

use crate::common::*;
use crate::format::*;
use crate::models::CanonicalSolution;
use std::io::{BufReader, Read};

/// Reads solution in VRPLIB format. Routes must be numbered consecutively starting from one,
/// lines which are neither route nor cost lines are ignored.
pub fn read_vrplib_solution<R: Read>(reader: BufReader<R>) -> ConvertResult<CanonicalSolution> {
    let malformed = |cause: String| ConvertError::new(ErrorKind::MalformedSolution, cause);

    let lines = read_trimmed_lines(reader).map_err(|err| malformed(format!("cannot read solution: '{err}'")))?;

    let mut slots = Vec::new();
    let mut cost = None;

    for line in lines.iter() {
        if let Some(route) = line.strip_prefix("Route #") {
            let (number, visits) =
                route.split_once(':').ok_or_else(|| malformed(format!("cannot find visits separator: '{line}'")))?;

            let expected = slots.len() + 1;
            if number.trim().parse::<usize>().ok() != Some(expected) {
                return Err(malformed(format!("expecting route #{expected}, got: '{line}'")));
            }

            let visits = parse_values::<usize>(visits, "cannot parse node id").map_err(|err| malformed(err.to_string()))?;
            slots.push(visits);
        } else if let Some(value) = line.strip_prefix("Cost:") {
            if cost.is_some() {
                return Err(malformed("more than one cost line".to_string()));
            }

            cost = Some(
                value.trim().parse::<f64>().map_err(|err| malformed(format!("cannot parse cost '{value}': '{err}'")))?,
            );
        }
    }

    let cost = cost.ok_or_else(|| malformed("cannot find cost line".to_string()))?;

    Ok(CanonicalSolution { slots, cost })
}
