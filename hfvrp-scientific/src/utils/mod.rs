//! This module contains helper functionality.

use std::sync::Arc;

mod error;
pub use self::error::*;

mod parallel;
pub use self::parallel::*;

/// A logger type which is called with various information regarding the work done by the converter.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;
