mod create_new_crop;
mod delete_crop;
mod error;
mod hierarchy;
mod import_crop;
mod indexing;
mod load_crops;
mod members;
mod names;
mod review_crops;
mod search;
mod statistics;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_new_crop::*, delete_crop::*, error::Error, hierarchy::*, import_crop::*, indexing::*,
    load_crops::*, members::*, names::*, review_crops::*, search::*, statistics::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}
