//! Filesystem layout of a screenshot project.

/// Project root and the fixed directory layout beneath it.
pub mod layout;
