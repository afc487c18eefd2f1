use crate::assets::raw::RawInventory;
use crate::catalog::model::Approach;
use crate::catalog::registry::Catalog;
use crate::foundation::core::ApproachId;
use crate::foundation::error::{StoreshotError, StoreshotResult};
use crate::launch::launcher::{GeneratorLauncher, LaunchRequest};
use crate::launch::process::{ProcessLauncher, ProcessLauncherOpts};
use crate::project::layout::ProjectLayout;
use crate::run::report::{RunRecord, RunReport};

/// Options for [`Runner::run_all`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RunAllOpts {
    /// Also launch semi-automated approaches instead of skipping them.
    pub include_semi: bool,
}

/// Sequential dispatcher over the approach catalog.
///
/// The runner owns no processes itself; it drives a [`GeneratorLauncher`]
/// one approach at a time, in id order. There is no retry policy and no
/// timeout: a generator runs until it exits.
pub struct Runner<L> {
    catalog: Catalog,
    layout: ProjectLayout,
    launcher: L,
}

impl Runner<ProcessLauncher> {
    /// Runner over the builtin catalog, launching real generator processes.
    pub fn with_process_launcher(layout: ProjectLayout, opts: ProcessLauncherOpts) -> Self {
        Self::new(Catalog::builtin(), layout, ProcessLauncher::new(opts))
    }
}

impl<L: GeneratorLauncher> Runner<L> {
    /// Build a runner over `catalog`, rooted at `layout`.
    pub fn new(catalog: Catalog, layout: ProjectLayout, launcher: L) -> Self {
        Self {
            catalog,
            layout,
            launcher,
        }
    }

    /// All cataloged approaches in id order. Always succeeds.
    pub fn approaches(&self) -> &[Approach] {
        self.catalog.approaches()
    }

    /// The catalog this runner dispatches over.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the single approach `id`.
    ///
    /// Fails with [`StoreshotError::NotFound`] when the catalog has no such
    /// id; launch and execution failures propagate unchanged (single-run
    /// policy: report and stop).
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self, id: ApproachId) -> StoreshotResult<RunRecord> {
        let approach = self
            .catalog
            .get(id)
            .cloned()
            .ok_or(StoreshotError::NotFound(id))?;

        let req = launch_request(&self.layout, &approach);
        tracing::info!(name = %approach.name, "launching generator");
        let outcome = self.launcher.launch(&approach, &req)?;
        tracing::info!(elapsed_ms = outcome.elapsed.as_millis() as u64, "generator completed");
        Ok(RunRecord::completed(&approach, outcome.elapsed))
    }

    /// Run every cataloged approach in id order, continuing past failures.
    ///
    /// Returns exactly one record per approach: semi-automated approaches are
    /// recorded as skipped unless `opts.include_semi`, and a failing
    /// generator yields a failed record instead of aborting the pass.
    ///
    /// Refuses up front when the raw inventory is empty — generators have
    /// nothing to composite until captures are added.
    #[tracing::instrument(skip(self))]
    pub fn run_all(&mut self, opts: RunAllOpts) -> StoreshotResult<RunReport> {
        let raw = RawInventory::scan(&self.layout)?;
        if raw.is_empty() {
            return Err(StoreshotError::validation(format!(
                "no raw screenshots in '{}'; add app captures before running",
                self.layout.raw_dir().display()
            )));
        }
        tracing::info!(captures = raw.count(), "raw inventory scanned");

        let mut report = RunReport::default();
        for approach in self.catalog.approaches() {
            if !approach.is_automated() && !opts.include_semi {
                tracing::debug!(id = approach.id.0, "skipping semi-automated approach");
                report.records.push(RunRecord::skipped(approach));
                continue;
            }

            let req = launch_request(&self.layout, approach);
            tracing::info!(id = approach.id.0, name = %approach.name, "launching generator");
            let record = match self.launcher.launch(approach, &req) {
                Ok(outcome) => RunRecord::completed(approach, outcome.elapsed),
                Err(err) => {
                    tracing::warn!(id = approach.id.0, error = %err, "generator failed");
                    RunRecord::failed(approach, err.to_string())
                }
            };
            report.records.push(record);
        }
        Ok(report)
    }
}

fn launch_request(layout: &ProjectLayout, approach: &Approach) -> LaunchRequest {
    LaunchRequest {
        script_path: layout.script_path(approach),
        workdir: layout.root().to_path_buf(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/run/runner.rs"]
mod tests;
