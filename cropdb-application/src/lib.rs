#[macro_use]
extern crate log;

mod add_crop_names;
mod create_crop;
mod delete_crop;
mod import_crops;
mod reindex;
mod review_crops;
mod set_crop_parent;

pub mod prelude {
    pub use super::{
        add_crop_names::*, create_crop::*, delete_crop::*, import_crops::*, reindex::*,
        review_crops::*, set_crop_parent::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use cropdb_core::{db::*, entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use cropdb_db_sqlite::Connections;
}
