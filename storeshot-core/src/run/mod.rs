//! Sequential dispatch over the approach catalog.

/// Per-approach run records and the aggregate report.
pub mod report;
/// The runner itself.
pub mod runner;
