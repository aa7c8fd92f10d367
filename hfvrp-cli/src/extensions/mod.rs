//! Contains command line extensions.

pub mod batch;
pub mod convert;
pub mod dialect;
