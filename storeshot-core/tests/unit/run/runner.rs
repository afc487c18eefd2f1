use super::*;
use crate::launch::launcher::{LaunchOutcome, ScriptedLauncher};
use crate::run::report::RunStatus;
use std::time::Duration;

/// Scratch project with one raw capture so run-all preconditions hold.
fn populated_project() -> (tempfile::TempDir, ProjectLayout) {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("raw")).unwrap();
    std::fs::write(tmp.path().join("raw/1.png"), b"x").unwrap();
    let layout = ProjectLayout::new(tmp.path());
    (tmp, layout)
}

fn runner(layout: ProjectLayout, launcher: ScriptedLauncher) -> Runner<ScriptedLauncher> {
    Runner::new(Catalog::builtin(), layout, launcher)
}

#[test]
fn run_unknown_id_is_not_found() {
    let (_tmp, layout) = populated_project();
    let mut runner = runner(layout, ScriptedLauncher::default());

    let err = runner.run(ApproachId(11)).unwrap_err();
    assert!(matches!(err, StoreshotError::NotFound(ApproachId(11))));
}

#[test]
fn run_returns_a_completed_record() {
    let (_tmp, layout) = populated_project();
    let mut runner = runner(
        layout,
        ScriptedLauncher::new([Ok(LaunchOutcome {
            elapsed: Duration::from_millis(40),
        })]),
    );

    let record = runner.run(ApproachId(5)).unwrap();
    assert_eq!(record.id, ApproachId(5));
    assert_eq!(record.name, "Ugly Ads (iMessage/Notes/Twitter)");
    assert!(record.succeeded());
    assert_eq!(record.elapsed, Duration::from_millis(40));
}

#[test]
fn run_propagates_generator_failure() {
    let (_tmp, layout) = populated_project();
    let mut runner = runner(
        layout,
        ScriptedLauncher::new([Err(StoreshotError::execution("exited with code 2"))]),
    );

    let err = runner.run(ApproachId(1)).unwrap_err();
    assert!(matches!(err, StoreshotError::Execution(_)));
}

#[test]
fn run_all_yields_one_record_per_approach_in_id_order() {
    let (_tmp, layout) = populated_project();
    let mut runner = runner(layout, ScriptedLauncher::default());

    let report = runner.run_all(RunAllOpts::default()).unwrap();
    assert_eq!(report.records.len(), 10);
    let ids: Vec<u32> = report.records.iter().map(|r| r.id.0).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
}

#[test]
fn run_all_skips_semi_automated_approaches_by_default() {
    let (_tmp, layout) = populated_project();
    let mut runner = runner(layout, ScriptedLauncher::default());

    let report = runner.run_all(RunAllOpts::default()).unwrap();
    let skipped: Vec<u32> = report
        .records
        .iter()
        .filter(|r| r.status == RunStatus::Skipped)
        .map(|r| r.id.0)
        .collect();
    assert_eq!(skipped, vec![3, 4, 6, 9]);
    assert_eq!(runner.launcher.launched().len(), 6);
}

#[test]
fn run_all_with_include_semi_launches_everything() {
    let (_tmp, layout) = populated_project();
    let mut runner = runner(layout, ScriptedLauncher::default());

    let report = runner
        .run_all(RunAllOpts { include_semi: true })
        .unwrap();
    assert_eq!(report.count(RunStatus::Completed), 10);
    assert_eq!(runner.launcher.launched().len(), 10);
}

#[test]
fn run_all_continues_past_failures_and_records_them() {
    let (_tmp, layout) = populated_project();
    let mut runner = runner(
        layout,
        ScriptedLauncher::new([Err(StoreshotError::execution(
            "generator 'approach_01_pil_mesh.py' exited with code 1",
        ))]),
    );

    let report = runner.run_all(RunAllOpts::default()).unwrap();
    assert_eq!(report.records.len(), 10);
    assert_eq!(report.count(RunStatus::Failed), 1);
    assert_eq!(report.count(RunStatus::Completed), 5);

    let failed = &report.records[0];
    assert_eq!(failed.id, ApproachId(1));
    assert!(failed.error.as_deref().unwrap().contains("code 1"));
}

#[test]
fn run_all_refuses_an_empty_raw_inventory_before_launching() {
    let tmp = tempfile::tempdir().unwrap();
    let layout = ProjectLayout::new(tmp.path());
    let mut runner = runner(layout, ScriptedLauncher::default());

    let err = runner.run_all(RunAllOpts::default()).unwrap_err();
    assert!(matches!(err, StoreshotError::Validation(_)));
    assert!(err.to_string().contains("no raw screenshots"));
    assert!(runner.launcher.launched().is_empty());
}

#[test]
fn single_run_does_not_require_raw_captures() {
    let tmp = tempfile::tempdir().unwrap();
    let layout = ProjectLayout::new(tmp.path());
    let mut runner = runner(layout, ScriptedLauncher::default());

    assert!(runner.run(ApproachId(1)).is_ok());
}
