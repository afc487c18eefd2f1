//! Input assets: the raw app captures generators composite.

/// Raw screenshot discovery under `raw/`.
pub mod raw;
