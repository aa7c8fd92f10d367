#[cfg(test)]
#[path = "../../tests/unit/common/text_reader_test.rs"]
mod text_reader_test;

use crate::utils::GenericError;
use std::io::prelude::*;
use std::io::{BufReader, Read};
use std::str::FromStr;

/// Reads all lines from the buffer with leading and trailing whitespaces removed.
pub(crate) fn read_trimmed_lines<R: Read>(mut reader: BufReader<R>) -> Result<Vec<String>, GenericError> {
    let mut buffer = String::new();
    let mut lines = Vec::new();

    while read_line(&mut reader, &mut buffer)? > 0 {
        lines.push(buffer.trim().to_string());
    }

    Ok(lines)
}

pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, GenericError> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.to_string().into())
}

/// Parses whitespace separated values of the same type.
pub(crate) fn parse_values<T>(line: &str, err_msg: &str) -> Result<Vec<T>, GenericError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    line.split_whitespace()
        .map(|value| value.parse::<T>().map_err(|err| GenericError::from(format!("{err_msg}: '{value}': '{err}'"))))
        .collect()
}
