use crate::{entities::*, repositories::*};
use anyhow::Result as Fallible;

pub trait Db:
    CropRepo
    + CropNameRepo
    + PlantingRepo
    + HarvestRepo
    + PlantPartRepo
    + PhotoRepo
    + MemberRepo
    + CropMentionRepo
{
}

impl<T> Db for T where
    T: CropRepo
        + CropNameRepo
        + PlantingRepo
        + HarvestRepo
        + PlantPartRepo
        + PhotoRepo
        + MemberRepo
        + CropMentionRepo
{
}

pub trait Indexer {
    fn flush_index(&mut self) -> Fallible<()>;
}

pub trait IdIndexer: Indexer {
    fn remove_by_id(&self, id: &Id) -> Fallible<()>;
}

/// The searchable parts of an approved crop.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexedCrop {
    pub id: Id,
    pub name: String,
    pub scientific_names: Vec<String>,
    pub alternate_names: Vec<String>,
}

pub trait CropIndex {
    /// Find crops by (parts of) their names.
    ///
    /// Results are ordered by relevance.
    fn query_crops(&self, text: &str, limit: usize) -> Fallible<Vec<Id>>;
}

pub trait CropIndexer: IdIndexer + CropIndex {
    fn add_or_update_crop(&self, crop: &IndexedCrop) -> Fallible<()>;
    fn remove_all_crops(&self) -> Fallible<()>;
}
