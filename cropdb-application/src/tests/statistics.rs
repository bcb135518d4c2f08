use super::prelude::*;
use cropdb_entities::builders::*;

fn photo(id: &str) -> Photo {
    Photo {
        id: id.into(),
        title: format!("Photo {id}"),
        url: format!("https://example.com/photos/{id}.jpg"),
        created_at: Timestamp::now(),
    }
}

fn plant_photographed_crop(fixture: &BackendFixture, crop: &Crop, n: usize) {
    let db = fixture.db_connections.exclusive().unwrap();
    for i in 0..n {
        let planting = Planting::build()
            .crop(crop)
            .sunniness(Sunniness::Sun)
            .planted_from(PlantedFrom::Seed)
            .created_at(Timestamp::from_millis(1_000 + i as i64))
            .finish();
        db.create_planting(&planting).unwrap();
        let photo = photo(&format!("{}-{i}", crop.name));
        db.create_photo(&photo).unwrap();
        db.attach_photo_to_planting(photo.id.as_str(), planting.id.as_str())
            .unwrap();
    }
}

#[test]
fn popular_and_interesting_crops() {
    let fixture = BackendFixture::new();
    fixture.import_approved_csv("tomato\nbasil\nmint\n");
    fixture.import_csv("nettle\n");
    let tomato = fixture.crop_by_name("tomato");
    let basil = fixture.crop_by_name("basil");
    let nettle = fixture.crop_by_name("nettle");
    plant_photographed_crop(&fixture, &tomato, 3);
    plant_photographed_crop(&fixture, &basil, 2);
    plant_photographed_crop(&fixture, &nettle, 5);

    let db = fixture.db_connections.shared().unwrap();
    let popular: Vec<_> = usecases::popular_crops(&db)
        .unwrap()
        .into_iter()
        .map(|CropPopularity(crop, count)| (crop.name, count))
        .collect();
    assert_eq!(
        vec![
            ("tomato".to_string(), 3),
            ("basil".to_string(), 2),
            ("mint".to_string(), 0)
        ],
        popular
    );

    let interesting = usecases::interesting_crops(&db, 12).unwrap();
    assert_eq!(1, interesting.len());
    assert_eq!(tomato.id, interesting[0].id);

    let sunniness = usecases::sunniness(&db, tomato.id.as_str()).unwrap();
    assert_eq!(Some(&3), sunniness.get(&Sunniness::Sun));
    let planted_from = usecases::planted_from(&db, tomato.id.as_str()).unwrap();
    assert_eq!(Some(&3), planted_from.get(&PlantedFrom::Seed));

    let default_photo = usecases::default_photo(&db, tomato.id.as_str()).unwrap();
    assert_eq!(Some(Id::from("tomato-0")), default_photo.map(|p| p.id));
}

#[test]
fn harvested_plant_parts() {
    let fixture = BackendFixture::new();
    fixture.import_approved_csv("apple\n");
    let apple = fixture.crop_by_name("apple");
    let fruit = PlantPart {
        id: "fruit".into(),
        name: "fruit".into(),
    };
    let leaf = PlantPart {
        id: "leaf".into(),
        name: "leaf".into(),
    };
    {
        let db = fixture.db_connections.exclusive().unwrap();
        db.create_plant_part(&fruit).unwrap();
        db.create_plant_part(&leaf).unwrap();
        for part in [&leaf, &fruit, &fruit] {
            let harvest = Harvest::build().crop(&apple).plant_part(part).finish();
            db.create_harvest(&harvest).unwrap();
        }
        let harvest = Harvest::build().crop(&apple).finish();
        db.create_harvest(&harvest).unwrap();
        db.create_photo(&photo("basket")).unwrap();
        db.attach_photo_to_harvest("basket", harvest.id.as_str())
            .unwrap();
    }

    let db = fixture.db_connections.shared().unwrap();
    assert_eq!(
        vec![fruit.clone(), leaf.clone()],
        usecases::plant_parts(&db, apple.id.as_str()).unwrap()
    );
    assert_eq!(
        vec![
            PlantPartFrequency(fruit, 2),
            PlantPartFrequency(leaf, 1)
        ],
        usecases::popular_plant_parts(&db, apple.id.as_str()).unwrap()
    );
    assert_eq!(
        Some(Id::from("basket")),
        usecases::default_photo(&db, apple.id.as_str())
            .unwrap()
            .map(|p| p.id)
    );
}
