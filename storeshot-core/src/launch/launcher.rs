use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

use crate::catalog::model::Approach;
use crate::foundation::core::ApproachId;
use crate::foundation::error::StoreshotResult;

/// Everything a launcher needs to start one generator.
#[derive(Clone, Debug)]
pub struct LaunchRequest {
    /// Full path of the generator script.
    pub script_path: PathBuf,
    /// Working directory for the generator (the project root).
    pub workdir: PathBuf,
}

/// Completion data for one successful generator run.
#[derive(Clone, Debug)]
pub struct LaunchOutcome {
    /// Wall-clock time the generator took.
    pub elapsed: Duration,
}

/// Contract for running one generator to completion.
///
/// `launch` returns `Ok` only when the generator ran and exited with status
/// zero. Failures to start map to [`StoreshotError::Launch`] and non-zero
/// exits to [`StoreshotError::Execution`].
///
/// [`StoreshotError::Launch`]: crate::StoreshotError::Launch
/// [`StoreshotError::Execution`]: crate::StoreshotError::Execution
pub trait GeneratorLauncher {
    /// Run `approach`'s generator to completion.
    fn launch(
        &mut self,
        approach: &Approach,
        req: &LaunchRequest,
    ) -> StoreshotResult<LaunchOutcome>;
}

/// Scripted launcher for tests and debugging.
///
/// Queued outcomes are consumed one per launch, in order; once the queue is
/// empty every further launch succeeds immediately. Launched approach ids
/// are recorded in call order.
#[derive(Debug, Default)]
pub struct ScriptedLauncher {
    outcomes: VecDeque<StoreshotResult<LaunchOutcome>>,
    launched: Vec<ApproachId>,
}

impl ScriptedLauncher {
    /// Launcher that consumes `outcomes` in launch order.
    pub fn new(outcomes: impl IntoIterator<Item = StoreshotResult<LaunchOutcome>>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            launched: Vec::new(),
        }
    }

    /// Ids launched so far, in call order.
    pub fn launched(&self) -> &[ApproachId] {
        &self.launched
    }
}

impl GeneratorLauncher for ScriptedLauncher {
    fn launch(
        &mut self,
        approach: &Approach,
        _req: &LaunchRequest,
    ) -> StoreshotResult<LaunchOutcome> {
        self.launched.push(approach.id);
        self.outcomes.pop_front().unwrap_or_else(|| {
            Ok(LaunchOutcome {
                elapsed: Duration::ZERO,
            })
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/launch/launcher.rs"]
mod tests;
