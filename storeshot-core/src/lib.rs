//! Storeshot catalogs ten App Store screenshot-generation approaches and
//! orchestrates their external generators.
//!
//! The generators (PIL compositors, Playwright renderers, Blender scenes,
//! commercial APIs) stay external scripts; this crate owns everything around
//! them:
//!
//! 1. **Catalog**: the fixed approach table ([`Catalog::builtin`])
//! 2. **Discover**: the raw capture inventory under `raw/` ([`RawInventory`])
//! 3. **Run**: sequential dispatch through a [`GeneratorLauncher`] ([`Runner`])
//! 4. **Verify**: produced PNGs against the fixed App Store rasters
//!    ([`verify_outputs`])
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Sequential-by-design**: approaches run one at a time, in id order.
//! - **No pixels here**: all rendering happens in the external generators;
//!   the library reads image headers only, for conformance checks.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod catalog;
mod foundation;
mod launch;
mod project;
mod run;
mod verify;

pub use assets::raw::RawInventory;
pub use catalog::model::Approach;
pub use catalog::registry::Catalog;
pub use foundation::core::{
    ApproachId, Automation, IPAD_13, IPHONE_6_7, TARGET_SIZES, TargetSize,
};
pub use foundation::error::{StoreshotError, StoreshotResult};
pub use launch::launcher::{GeneratorLauncher, LaunchOutcome, LaunchRequest, ScriptedLauncher};
pub use launch::process::{ProcessLauncher, ProcessLauncherOpts, is_interpreter_available};
pub use project::layout::ProjectLayout;
pub use run::report::{RunRecord, RunReport, RunStatus};
pub use run::runner::{RunAllOpts, Runner};
pub use verify::conformance::{
    ConformanceReport, FolderCensus, ShotCheck, verify_approach_outputs, verify_outputs,
};
