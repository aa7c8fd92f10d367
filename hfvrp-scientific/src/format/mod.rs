//! Contains error types shared by all conversion steps.

#[cfg(test)]
#[path = "../../tests/unit/format/error_test.rs"]
mod error_test;

use crate::utils::GenericError;
use serde::Serialize;

/// Specifies the kind of failure which stopped a conversion.
///
/// Every kind is terminal for the conversion in progress: none of them is caused by a transient
/// condition, so retrying with the same input yields the same error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// Instance misses vehicle sections or they are inconsistent.
    MalformedInstance,
    /// Route line has a vehicle descriptor or visit list which does not match the expected pattern.
    MalformedRouteDescriptor,
    /// Solution has no (parseable) cost line.
    MissingCost,
    /// Solution has more than one cost line.
    AmbiguousCost,
    /// Reported vehicle capacity is not present in the instance capacity table.
    UnknownVehicleCapacity,
    /// More routes of a vehicle type are reported than vehicles of that type are available.
    SlotOverflow,
    /// Solution text cannot be read, or canonical (VRPLIB) solution text cannot be parsed.
    MalformedSolution,
}

impl ErrorKind {
    /// Returns a stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::MalformedInstance => "E1000",
            ErrorKind::MalformedRouteDescriptor => "E1001",
            ErrorKind::MissingCost => "E1002",
            ErrorKind::AmbiguousCost => "E1003",
            ErrorKind::UnknownVehicleCapacity => "E1004",
            ErrorKind::SlotOverflow => "E1005",
            ErrorKind::MalformedSolution => "E1006",
        }
    }
}

/// A conversion error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConvertError {
    /// An error kind.
    pub kind: ErrorKind,
    /// An error code in registry.
    pub code: String,
    /// A possible error cause.
    pub cause: String,
    /// A details about exception.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A type alias for result type with `ConvertError`.
pub type ConvertResult<T> = Result<T, ConvertError>;

impl ConvertError {
    /// Creates a new instance of `ConvertError` without details.
    pub fn new(kind: ErrorKind, cause: impl Into<String>) -> Self {
        Self { kind, code: kind.code().to_string(), cause: cause.into(), details: None }
    }

    /// Creates a new instance of `ConvertError` with details.
    pub fn new_with_details(kind: ErrorKind, cause: impl Into<String>, details: impl Into<String>) -> Self {
        Self { kind, code: kind.code().to_string(), cause: cause.into(), details: Some(details.into()) }
    }
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}, cause: '{}'", self.code, self.cause)?;

        if let Some(details) = &self.details {
            write!(f, ", details: '{details}'")?;
        }

        Ok(())
    }
}

impl std::error::Error for ConvertError {}

impl From<ConvertError> for GenericError {
    fn from(value: ConvertError) -> Self {
        value.to_string().into()
    }
}
