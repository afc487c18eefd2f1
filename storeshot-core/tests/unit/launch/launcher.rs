use super::*;
use crate::foundation::error::StoreshotError;

fn approach(id: u32) -> Approach {
    let mut a = crate::Catalog::builtin().approaches()[0].clone();
    a.id = ApproachId(id);
    a
}

fn request() -> LaunchRequest {
    LaunchRequest {
        script_path: PathBuf::from("scripts/x.py"),
        workdir: PathBuf::from("."),
    }
}

#[test]
fn queued_outcomes_are_consumed_in_order() {
    let mut launcher = ScriptedLauncher::new([
        Err(StoreshotError::execution("boom")),
        Ok(LaunchOutcome {
            elapsed: Duration::from_millis(5),
        }),
    ]);

    assert!(launcher.launch(&approach(1), &request()).is_err());
    let outcome = launcher.launch(&approach(2), &request()).unwrap();
    assert_eq!(outcome.elapsed, Duration::from_millis(5));
}

#[test]
fn empty_queue_defaults_to_success() {
    let mut launcher = ScriptedLauncher::default();
    assert!(launcher.launch(&approach(1), &request()).is_ok());
    assert!(launcher.launch(&approach(2), &request()).is_ok());
}

#[test]
fn launched_ids_are_recorded_in_call_order() {
    let mut launcher = ScriptedLauncher::default();
    let _ = launcher.launch(&approach(3), &request());
    let _ = launcher.launch(&approach(1), &request());
    assert_eq!(launcher.launched(), &[ApproachId(3), ApproachId(1)]);
}
