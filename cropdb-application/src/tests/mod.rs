mod editing;
mod index_failures;
mod statistics;

pub mod prelude {

    use std::cell::RefCell;

    pub use cropdb_core::{
        db::*,
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
        util::sort::CropOrder,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub mod tantivy {
        pub use cropdb_db_tantivy::SearchEngine;
    }

    pub use crate::prelude as flows;

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub search_engine: RefCell<tantivy::SearchEngine>,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            cropdb_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            let search_engine = tantivy::SearchEngine::init_in_ram().unwrap();
            Self {
                db_connections,
                search_engine: RefCell::new(search_engine),
            }
        }

        pub fn import_csv_with(&self, csv: &str, approve: bool) -> flows::ImportReport {
            let settings = flows::ImportSettings {
                approve,
                ..Default::default()
            };
            flows::import_crops_from_csv(
                &self.db_connections,
                &mut *self.search_engine.borrow_mut(),
                csv.as_bytes(),
                &settings,
            )
            .unwrap()
        }

        pub fn import_csv(&self, csv: &str) -> flows::ImportReport {
            self.import_csv_with(csv, false)
        }

        pub fn import_approved_csv(&self, csv: &str) -> flows::ImportReport {
            self.import_csv_with(csv, true)
        }

        pub fn review(&self, ids: &[&str], review: usecases::CropReview) -> usecases::ReviewedCrops {
            flows::review_crops(
                &self.db_connections,
                &mut *self.search_engine.borrow_mut(),
                ids,
                review,
            )
            .unwrap()
        }

        pub fn try_get_crop(&self, id: &str) -> Option<Crop> {
            match self.db_connections.shared().unwrap().get_crop(id) {
                Ok(crop) => Some(crop),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn crop_exists(&self, id: &str) -> bool {
            self.try_get_crop(id).is_some()
        }

        pub fn crop_by_name(&self, name: &str) -> Crop {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_crop_by_name(name)
                .unwrap()
                .unwrap()
        }

        pub fn count_crops(&self) -> usize {
            self.db_connections.shared().unwrap().count_crops().unwrap()
        }

        pub fn crop_names(&self, id: &str) -> (Vec<String>, Vec<String>) {
            usecases::load_crop_names(&self.db_connections.shared().unwrap(), id).unwrap()
        }

        /// The names of all crops found by the search engine.
        pub fn search(&self, text: &str) -> Vec<String> {
            let db = self.db_connections.shared().unwrap();
            usecases::search_crops(&db, &*self.search_engine.borrow(), text, 10)
                .unwrap()
                .into_iter()
                .map(|crop| crop.name)
                .collect()
        }
    }
}
