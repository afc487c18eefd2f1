use super::*;

#[test]
fn builtin_has_ten_approaches_with_ids_1_to_10() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 10);
    let ids: Vec<u32> = catalog.approaches().iter().map(|a| a.id.0).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
}

#[test]
fn builtin_satisfies_the_catalog_invariants() {
    let catalog = Catalog::builtin();
    assert!(Catalog::new(catalog.approaches().to_vec()).is_ok());
}

#[test]
fn builtin_slugs_are_unique_and_prefixed() {
    let catalog = Catalog::builtin();
    for a in catalog.approaches() {
        assert!(
            a.slug.starts_with(&format!("{:02}_", a.id.0)),
            "slug '{}' does not carry the id prefix",
            a.slug
        );
    }
}

#[test]
fn lookup_known_and_unknown_ids() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.get(ApproachId(7)).map(|a| a.name.as_str()), Some("Video Preview"));
    assert!(catalog.get(ApproachId(11)).is_none());
    assert!(catalog.get(ApproachId(0)).is_none());
}

#[test]
fn builtin_automation_split_matches_the_table() {
    let catalog = Catalog::builtin();
    let full: Vec<u32> = catalog
        .approaches()
        .iter()
        .filter(|a| a.is_automated())
        .map(|a| a.id.0)
        .collect();
    assert_eq!(full, vec![1, 2, 5, 7, 8, 10]);
}

#[test]
fn new_rejects_out_of_order_ids() {
    let mut approaches = Catalog::builtin().approaches().to_vec();
    approaches.swap(0, 1);
    let err = Catalog::new(approaches).unwrap_err();
    assert!(err.to_string().contains("strictly ascending"));
}

#[test]
fn new_rejects_duplicate_ids() {
    let mut approaches = Catalog::builtin().approaches().to_vec();
    approaches[1].id = approaches[0].id;
    assert!(Catalog::new(approaches).is_err());
}

#[test]
fn new_rejects_duplicate_slugs() {
    let mut approaches = Catalog::builtin().approaches().to_vec();
    approaches[1].slug = approaches[0].slug.clone();
    let err = Catalog::new(approaches).unwrap_err();
    assert!(err.to_string().contains("duplicate approach slug"));
}

#[test]
fn new_rejects_empty_script() {
    let mut approaches = Catalog::builtin().approaches().to_vec();
    approaches[3].script.clear();
    let err = Catalog::new(approaches).unwrap_err();
    assert!(err.to_string().contains("empty script"));
}
