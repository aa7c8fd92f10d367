//! A crate contains a library part of command line interface which converts heterogeneous fleet
//! solutions of AILS solver into VRPLIB format.
//!
//! Functionality is split into extensions which can be used without the binary:
//!
//! - **convert**: converts a single (instance, solution) pair into VRPLIB text
//! - **batch**: discovers pairs in directories and converts them in parallel
//! - **dialect**: renames instance section keywords to ones expected by AILS solver

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
mod helpers;

pub use hfvrp_scientific as scientific;

pub mod extensions;

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
