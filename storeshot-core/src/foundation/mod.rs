//! Shared foundation: core identifiers, target rasters, and the error taxonomy.

/// Core identifiers and the fixed App Store target rasters.
pub mod core;
/// Error taxonomy and result alias.
pub mod error;
