//! Contains common text reading functionality.

mod text_reader;
pub(crate) use self::text_reader::*;
