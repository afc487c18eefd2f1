use super::*;

fn sample() -> Approach {
    Approach {
        id: ApproachId(1),
        name: "PIL + Mesh Gradients".to_string(),
        slug: "01_pil_mesh".to_string(),
        automation: Automation::Full,
        script: "approach_01_pil_mesh.py".to_string(),
        requires: vec!["PIL".to_string()],
        description: "Procedural gradients.".to_string(),
    }
}

#[test]
fn automation_drives_is_automated() {
    let mut a = sample();
    assert!(a.is_automated());
    a.automation = Automation::Semi;
    assert!(!a.is_automated());
}

#[test]
fn automation_serializes_lowercase() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["automation"], "full");
    assert_eq!(json["id"], 1);
}
