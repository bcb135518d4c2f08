// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// The desired moderation state of one or more crops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approval {
    pub status: ApprovalStatus,
    pub reason_for_rejection: Option<RejectionReason>,
    pub rejection_notes: Option<String>,
}

pub trait CropRepo {
    fn create_crop(&self, crop: &Crop) -> Result<()>;
    fn update_crop(&self, crop: &Crop) -> Result<()>;

    // Deletes the crop together with its names. Plantings, harvests
    // and varieties are detached, mentions in posts are removed.
    fn delete_crop(&self, id: &str) -> Result<()>;

    fn get_crop(&self, id: &str) -> Result<Crop>;
    fn get_crops(&self, ids: &[&str]) -> Result<Vec<Crop>>;

    // Exact, case-sensitive match
    fn try_get_crop_by_name(&self, name: &str) -> Result<Option<Crop>>;
    fn find_crops_by_name_ignore_case(&self, name: &str) -> Result<Vec<Crop>>;

    // The order of the results is unspecified
    fn all_crops(&self) -> Result<Vec<Crop>>;
    fn crops_with_status(&self, status: ApprovalStatus) -> Result<Vec<Crop>>;
    fn varieties_of_crop(&self, parent_id: &str) -> Result<Vec<Crop>>;
    fn count_crops(&self) -> Result<usize>;

    // Returns the number of reviewed crops
    fn review_crops(&self, ids: &[&str], approval: &Approval) -> Result<usize>;
}

pub trait CropNameRepo {
    // Fails with `Error::AlreadyExists` if the crop already
    // owns a name of the same kind with exactly this text.
    fn add_crop_name(&self, name: &CropName) -> Result<()>;

    // In order of insertion
    fn load_crop_names(&self, crop_id: &str, kind: CropNameKind) -> Result<Vec<CropName>>;
}

pub trait PlantingRepo {
    fn create_planting(&self, planting: &Planting) -> Result<()>;

    // Ordered by creation time
    fn load_plantings_of_crop(&self, crop_id: &str) -> Result<Vec<Planting>>;

    // Crops without any plantings are omitted
    fn count_plantings_per_crop(&self) -> Result<Vec<(Id, u64)>>;
}

pub trait HarvestRepo {
    fn create_harvest(&self, harvest: &Harvest) -> Result<()>;

    // Ordered by creation time
    fn load_harvests_of_crop(&self, crop_id: &str) -> Result<Vec<Harvest>>;
}

pub trait PlantPartRepo {
    fn create_plant_part(&self, plant_part: &PlantPart) -> Result<()>;
    fn get_plant_parts(&self, ids: &[&str]) -> Result<Vec<PlantPart>>;
}

pub trait PhotoRepo {
    fn create_photo(&self, photo: &Photo) -> Result<()>;

    fn attach_photo_to_planting(&self, photo_id: &str, planting_id: &str) -> Result<()>;
    fn attach_photo_to_harvest(&self, photo_id: &str, harvest_id: &str) -> Result<()>;

    // In order of attachment
    fn load_photos_of_planting(&self, planting_id: &str) -> Result<Vec<Photo>>;
    fn load_photos_of_harvest(&self, harvest_id: &str) -> Result<Vec<Photo>>;
}

pub trait MemberRepo {
    fn create_member(&self, member: &Member) -> Result<()>;
    fn try_get_member_by_login_name(&self, login_name: &str) -> Result<Option<Member>>;
}

// Posts are managed elsewhere. Only the links between
// posts and the crops they mention are stored here.
pub trait CropMentionRepo {
    fn mention_crops_in_post(&self, post_id: &str, crop_ids: &[&str]) -> Result<()>;
    fn crops_mentioned_by_post(&self, post_id: &str) -> Result<Vec<Id>>;
}
