//! Contains functionality to read heterogeneous fleet instance metadata and AILS solver output,
//! and to recover canonical vehicle types and slots of reported routes.

mod dialect;
pub use self::dialect::*;

mod instance;
pub use self::instance::AilsInstance;

mod reindexer;
pub use self::reindexer::reindex_routes;

mod resolver;
pub use self::resolver::resolve_routes;

mod solution;
pub use self::solution::AilsSolution;
