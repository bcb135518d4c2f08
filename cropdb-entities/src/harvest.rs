use crate::{id::*, time::*};

/// The part of a plant that has been harvested, e.g. "fruit" or "leaf".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlantPart {
    pub id: Id,
    pub name: String,
}

/// A record of a crop being gathered.
///
/// The crop reference is cleared when the crop is destroyed.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Harvest {
    pub id            : Id,
    pub crop_id       : Option<Id>,
    pub owner         : Option<Id>,
    pub plant_part_id : Option<Id>,
    pub created_at    : Timestamp,
}

pub type HarvestCount = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantPartFrequency(pub PlantPart, pub HarvestCount);
