//! The approach catalog: what can be generated, and how automated it is.
//!
//! The catalog is static data. It is defined once at process start and never
//! mutated; the runner only reads it.

/// Approach record type.
pub mod model;
/// Validated catalog collection and the builtin table.
pub mod registry;
