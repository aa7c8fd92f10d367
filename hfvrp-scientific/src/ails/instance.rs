#[cfg(test)]
#[path = "../../tests/unit/ails/instance_test.rs"]
mod instance_test;

use crate::common::*;
use crate::config::ConvertConfig;
use crate::format::*;
use crate::models::Instance;
use std::io::{BufReader, Read};

/// A trait to read vehicle metadata of heterogeneous fleet instance.
pub trait AilsInstance {
    /// Reads vehicle capacities and amount of available vehicles per type.
    fn read_ails_instance(self, config: &ConvertConfig) -> ConvertResult<Instance>;
}

impl<R: Read> AilsInstance for BufReader<R> {
    fn read_ails_instance(self, config: &ConvertConfig) -> ConvertResult<Instance> {
        let lines = read_trimmed_lines(self).map_err(|err| {
            ConvertError::new_with_details(ErrorKind::MalformedInstance, "cannot read instance", err.to_string())
        })?;

        read_instance_lines(lines.as_slice(), config)
    }
}

impl AilsInstance for &str {
    fn read_ails_instance(self, config: &ConvertConfig) -> ConvertResult<Instance> {
        BufReader::new(self.as_bytes()).read_ails_instance(config)
    }
}

fn read_instance_lines(lines: &[String], config: &ConvertConfig) -> ConvertResult<Instance> {
    let capacities = read_section::<i64>(lines, config.capacities_marker.as_str())?;
    let vehicles_per_type = read_section::<usize>(lines, config.vehicles_marker.as_str())?;

    let (capacities_len, vehicles_len) = (capacities.len(), vehicles_per_type.len());

    Instance::new(capacities, vehicles_per_type).ok_or_else(|| {
        ConvertError::new_with_details(
            ErrorKind::MalformedInstance,
            "vehicle sections have different amount of vehicle types",
            format!("capacities: {capacities_len}, available vehicles: {vehicles_len}"),
        )
    })
}

fn read_section<T>(lines: &[String], marker: &str) -> ConvertResult<Vec<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let idx = lines
        .iter()
        .position(|line| line == marker)
        .ok_or_else(|| ConvertError::new(ErrorKind::MalformedInstance, format!("cannot find '{marker}' section")))?;

    let values = lines
        .get(idx + 1)
        .map(|line| parse_values::<T>(line, "cannot parse value"))
        .unwrap_or_else(|| Ok(Vec::default()))
        .map_err(|err| {
            ConvertError::new_with_details(
                ErrorKind::MalformedInstance,
                format!("cannot read '{marker}' section"),
                err.to_string(),
            )
        })?;

    if values.is_empty() {
        return Err(ConvertError::new(ErrorKind::MalformedInstance, format!("'{marker}' section has no values")));
    }

    Ok(values)
}
