use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StoreshotError::launch("x")
            .to_string()
            .contains("launch error:")
    );
    assert!(
        StoreshotError::execution("x")
            .to_string()
            .contains("execution error:")
    );
    assert!(
        StoreshotError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn not_found_names_the_id() {
    let err = StoreshotError::NotFound(ApproachId(11));
    assert_eq!(err.to_string(), "unknown approach 11");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StoreshotError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
