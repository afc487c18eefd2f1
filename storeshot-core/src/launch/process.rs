use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::catalog::model::Approach;
use crate::foundation::error::{StoreshotError, StoreshotResult};
use crate::launch::launcher::{GeneratorLauncher, LaunchOutcome, LaunchRequest};

/// Options for [`ProcessLauncher`].
#[derive(Clone, Debug)]
pub struct ProcessLauncherOpts {
    /// Interpreter used to run generator scripts.
    pub interpreter: PathBuf,
    /// Let generators write progress to the parent's stdout/stderr.
    pub inherit_stdio: bool,
}

impl Default for ProcessLauncherOpts {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from("python3"),
            inherit_stdio: true,
        }
    }
}

/// Launcher that runs each generator as an `<interpreter> <script>` child
/// process with the project root as working directory.
///
/// Generators inherit stdio by default so their progress output stays
/// visible; the child's stdin is always closed.
#[derive(Debug)]
pub struct ProcessLauncher {
    opts: ProcessLauncherOpts,
}

impl ProcessLauncher {
    /// Create a launcher with `opts`.
    pub fn new(opts: ProcessLauncherOpts) -> Self {
        Self { opts }
    }
}

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new(ProcessLauncherOpts::default())
    }
}

impl GeneratorLauncher for ProcessLauncher {
    fn launch(
        &mut self,
        approach: &Approach,
        req: &LaunchRequest,
    ) -> StoreshotResult<LaunchOutcome> {
        if !req.script_path.is_file() {
            return Err(StoreshotError::launch(format!(
                "generator script not found: {}",
                req.script_path.display()
            )));
        }

        let mut cmd = Command::new(&self.opts.interpreter);
        cmd.arg(&req.script_path).current_dir(&req.workdir);
        cmd.stdin(Stdio::null());
        if self.opts.inherit_stdio {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
        }

        tracing::debug!(
            interpreter = %self.opts.interpreter.display(),
            script = %req.script_path.display(),
            "spawning generator"
        );

        let started = Instant::now();
        let status = cmd.status().map_err(|e| {
            StoreshotError::launch(format!(
                "failed to spawn '{}' (is it installed and on PATH?): {e}",
                self.opts.interpreter.display()
            ))
        })?;
        let elapsed = started.elapsed();

        if !status.success() {
            return Err(StoreshotError::execution(match status.code() {
                Some(code) => format!("generator '{}' exited with code {code}", approach.script),
                None => format!("generator '{}' was terminated by a signal", approach.script),
            }));
        }

        Ok(LaunchOutcome { elapsed })
    }
}

/// Return `true` when `interpreter` can be invoked from `PATH`.
pub fn is_interpreter_available(interpreter: &Path) -> bool {
    Command::new(interpreter)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/launch/process.rs"]
mod tests;
