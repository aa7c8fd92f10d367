#[cfg(test)]
#[path = "../../tests/unit/vrplib/writer_test.rs"]
mod writer_test;

use crate::models::CanonicalSolution;
use crate::utils::GenericError;
use std::io::{BufWriter, Write};

/// A trait to write solution in VRPLIB format.
pub trait VrplibSolution<W: Write> {
    /// Writes one line per canonical slot followed by cost line with given amount of decimal places.
    fn write_vrplib(&self, writer: &mut BufWriter<W>, precision: usize) -> Result<(), GenericError>;
}

impl<W: Write> VrplibSolution<W> for CanonicalSolution {
    fn write_vrplib(&self, writer: &mut BufWriter<W>, precision: usize) -> Result<(), GenericError> {
        writer.write_all(format_vrplib_solution(self, precision).as_bytes())?;
        writer.flush()?;

        Ok(())
    }
}

/// Formats solution as VRPLIB text. Lines are separated by new line, there is no trailing one.
pub fn format_vrplib_solution(solution: &CanonicalSolution, precision: usize) -> String {
    solution
        .slots
        .iter()
        .zip(1..)
        .map(|(visits, idx)| {
            let visits = visits.iter().map(|visit| visit.to_string()).collect::<Vec<_>>().join(" ");
            format!("Route #{idx}: {visits}")
        })
        .chain(std::iter::once(format!("Cost: {:.precision$}", solution.cost)))
        .collect::<Vec<_>>()
        .join("\n")
}
