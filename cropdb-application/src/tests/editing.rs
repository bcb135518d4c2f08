use super::prelude::*;

fn new_crop(name: &str, parent_id: Option<&str>) -> usecases::NewCrop {
    usecases::NewCrop {
        name: name.into(),
        en_wikipedia_url: None,
        parent_id: parent_id.map(Into::into),
        creator: None,
    }
}

#[test]
fn create_pending_crop_with_names() {
    let fixture = BackendFixture::new();
    let crop = flows::create_crop(
        &fixture.db_connections,
        new_crop("potato", None),
        "Solanum tuberosum",
        "spud, tater",
    )
    .unwrap();
    assert_eq!(ApprovalStatus::Pending, crop.approval_status);
    assert_eq!(
        (
            vec!["Solanum tuberosum".to_string()],
            vec!["spud".to_string(), "tater".to_string()]
        ),
        fixture.crop_names(crop.id.as_str())
    );
    assert!(fixture.search("spud").is_empty());
}

#[test]
fn create_nothing_if_the_crop_is_invalid() {
    let fixture = BackendFixture::new();
    let err = flows::create_crop(
        &fixture.db_connections,
        new_crop("potato", Some("missing")),
        "Solanum tuberosum",
        "",
    )
    .unwrap_err();
    assert!(err.as_parameter_error().is_some());
    assert_eq!(0, fixture.count_crops());
}

#[test]
fn new_names_of_approved_crops_become_searchable() {
    let fixture = BackendFixture::new();
    fixture.import_approved_csv("zucchini\n");
    let zucchini = fixture.crop_by_name("zucchini");
    assert!(fixture.search("courgette").is_empty());

    let added = flows::add_crop_names(
        &fixture.db_connections,
        &mut *fixture.search_engine.borrow_mut(),
        zucchini.id.as_str(),
        "Cucurbita pepo",
        "courgette",
    )
    .unwrap();
    assert_eq!(2, added.len());
    assert_eq!(vec!["zucchini"], fixture.search("courgette"));
    assert_eq!(vec!["zucchini"], fixture.search("pepo"));
}

#[test]
fn move_crops_within_the_hierarchy() {
    let fixture = BackendFixture::new();
    fixture.import_csv("cabbage\nred cabbage\n");
    let cabbage = fixture.crop_by_name("cabbage");
    let red_cabbage = fixture.crop_by_name("red cabbage");

    let moved = flows::set_crop_parent(
        &fixture.db_connections,
        red_cabbage.id.as_str(),
        Some(cabbage.id.as_str()),
    )
    .unwrap();
    assert_eq!(Some(cabbage.id.clone()), moved.parent_id);

    let err = flows::set_crop_parent(
        &fixture.db_connections,
        cabbage.id.as_str(),
        Some(red_cabbage.id.as_str()),
    )
    .unwrap_err();
    assert!(matches!(
        err.as_parameter_error(),
        Some(usecases::Error::ParentCycle)
    ));
    assert_eq!(None, fixture.crop_by_name("cabbage").parent_id);

    flows::set_crop_parent(&fixture.db_connections, red_cabbage.id.as_str(), None).unwrap();
    assert_eq!(None, fixture.crop_by_name("red cabbage").parent_id);
}
