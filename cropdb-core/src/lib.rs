pub mod db;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use cropdb_entities::{
        approval::*, crop::*, harvest::*, id::*, member::*, photo::*, planting::*, time::*,
    };
}

pub use repositories::Error as RepoError;
