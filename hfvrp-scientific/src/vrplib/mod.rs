//! Contains functionality to write and read solutions in VRPLIB format.

mod reader;
pub use self::reader::read_vrplib_solution;

mod writer;
pub use self::writer::*;
