//! Generator launching.
//!
//! The runner never composites pixels itself; every approach is an external
//! generator script. This module is the seam between the runner and the
//! operating system.

/// Launcher trait and built-in test double.
pub mod launcher;
/// Child-process launcher (the real implementation).
pub mod process;
