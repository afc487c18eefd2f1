//! Output verification against the fixed App Store rasters.

/// Conformance scanning of produced PNGs.
pub mod conformance;
