use super::prelude::*;
use crate::{
    util::sort::{CropOrder, SortCrops},
    RepoError,
};

pub fn get_crop<R: CropRepo>(repo: &R, id: &str) -> Result<Crop> {
    repo.get_crop(id).map_err(|err| match err {
        RepoError::NotFound => Error::CropDoesNotExist,
        err => err.into(),
    })
}

pub fn crops_with_status<R: CropRepo>(
    repo: &R,
    status: ApprovalStatus,
    order: CropOrder,
) -> Result<Vec<Crop>> {
    let mut crops = repo.crops_with_status(status)?;
    crops.sort_crops(order);
    Ok(crops)
}

/// All crops that are visible to the public.
pub fn approved_crops<R: CropRepo>(repo: &R, order: CropOrder) -> Result<Vec<Crop>> {
    crops_with_status(repo, ApprovalStatus::Approved, order)
}
