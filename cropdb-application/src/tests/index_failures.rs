use super::prelude::*;
use anyhow::Result as Fallible;

/// A search index that is not available.
struct FailingIndexer;

fn unavailable<T>() -> Fallible<T> {
    Err(anyhow::anyhow!("search index unavailable"))
}

impl Indexer for FailingIndexer {
    fn flush_index(&mut self) -> Fallible<()> {
        unavailable()
    }
}

impl IdIndexer for FailingIndexer {
    fn remove_by_id(&self, _id: &Id) -> Fallible<()> {
        unavailable()
    }
}

impl CropIndex for FailingIndexer {
    fn query_crops(&self, _text: &str, _limit: usize) -> Fallible<Vec<Id>> {
        unavailable()
    }
}

impl CropIndexer for FailingIndexer {
    fn add_or_update_crop(&self, _crop: &IndexedCrop) -> Fallible<()> {
        unavailable()
    }
    fn remove_all_crops(&self) -> Fallible<()> {
        unavailable()
    }
}

#[test]
fn review_crops_although_the_index_fails() {
    let fixture = BackendFixture::new();
    fixture.import_csv("tomato\n");
    let tomato = fixture.crop_by_name("tomato");

    let reviewed = flows::review_crops(
        &fixture.db_connections,
        &mut FailingIndexer,
        &[tomato.id.as_str()],
        usecases::CropReview::approve(),
    )
    .unwrap();
    assert_eq!(vec![tomato.id.clone()], reviewed.approved);
    assert_eq!(
        ApprovalStatus::Approved,
        fixture.crop_by_name("tomato").approval_status
    );
}

#[test]
fn delete_crop_although_the_index_fails() {
    let fixture = BackendFixture::new();
    fixture.import_approved_csv("tomato\n");
    let tomato = fixture.crop_by_name("tomato");

    let deleted = flows::delete_crop(
        &fixture.db_connections,
        &mut FailingIndexer,
        tomato.id.as_str(),
    )
    .unwrap();
    assert_eq!(tomato.id, deleted.id);
    assert!(!fixture.crop_exists(tomato.id.as_str()));
}

#[test]
fn import_crops_although_the_index_fails() {
    let fixture = BackendFixture::new();
    let settings = flows::ImportSettings {
        approve: true,
        ..Default::default()
    };
    let report = flows::import_crops_from_csv(
        &fixture.db_connections,
        &mut FailingIndexer,
        "tomato,,,Solanum lycopersicum\nbasil\n".as_bytes(),
        &settings,
    )
    .unwrap();
    assert_eq!(2, report.created_count());
    assert!(report.failures.is_empty());
    assert_eq!(2, fixture.count_crops());
    assert_eq!(
        ApprovalStatus::Approved,
        fixture.crop_by_name("basil").approval_status
    );
}

#[test]
fn search_approved_crops_without_an_index() {
    let fixture = BackendFixture::new();
    fixture.import_approved_csv("tomato,,,Solanum lycopersicum\nbasil\n");
    fixture.import_csv("tomatillo\n");

    let db = fixture.db_connections.shared().unwrap();
    let found: Vec<_> = usecases::search_crops(&db, &FailingIndexer, "lycoper", 10)
        .unwrap()
        .into_iter()
        .map(|crop| crop.name)
        .collect();
    assert_eq!(vec!["tomato"], found);
    let found: Vec<_> = usecases::search_crops(&db, &FailingIndexer, "TOMAT", 10)
        .unwrap()
        .into_iter()
        .map(|crop| crop.name)
        .collect();
    assert_eq!(vec!["tomato"], found);
}
