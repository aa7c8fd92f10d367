//! Scientific crate contains logic to convert solutions of heterogeneous fleet vehicle routing
//! problems (HFVRP) written by AILS solver into a canonical, tool agnostic format.
//!
//! AILS prints a vehicle descriptor next to each route, but the type index in it is not updated
//! during search. The converter recovers the type by vehicle capacity and places every route into
//! a slot reserved for that type, so that routes of the same type are contiguous and the amount of
//! routes is equal to the amount of available vehicles.
//!
//! # Supported formats
//!
//! - **ails**: instance metadata (`CAPACITIES` and `VEHICLES_AVAILABLE` sections) and solver output
//! - **vrplib**: `Route #<n>: <visits>` line per vehicle followed by `Cost: <value>` line

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_solutions_test.rs"]
mod known_solutions_test;

pub mod ails;
pub mod config;
pub mod convert;
pub mod format;
pub mod models;
pub mod utils;
pub mod vrplib;

mod common;

/// Reexports commonly used types.
pub mod prelude {
    pub use crate::ails::{AilsInstance, AilsSolution};
    pub use crate::config::ConvertConfig;
    pub use crate::convert::convert_solution;
    pub use crate::format::{ConvertError, ConvertResult, ErrorKind};
    pub use crate::models::*;
    pub use crate::utils::{GenericError, GenericResult, InfoLogger};
    pub use crate::vrplib::{VrplibSolution, format_vrplib_solution, read_vrplib_solution};
}
