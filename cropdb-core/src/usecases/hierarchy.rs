use super::{load_crops::get_crop, prelude::*};
use crate::{
    util::sort::{CropOrder, SortCrops},
    RepoError,
};
use std::collections::HashSet;

pub fn parent<R: CropRepo>(repo: &R, crop: &Crop) -> Result<Option<Crop>> {
    let Some(parent_id) = &crop.parent_id else {
        return Ok(None);
    };
    match repo.get_crop(parent_id.as_str()) {
        Ok(parent) => Ok(Some(parent)),
        Err(RepoError::NotFound) => {
            log::warn!("Parent {parent_id} of crop {} does not exist", crop.id);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

pub fn varieties<R: CropRepo>(repo: &R, crop: &Crop, order: CropOrder) -> Result<Vec<Crop>> {
    let mut varieties = repo.varieties_of_crop(crop.id.as_str())?;
    varieties.sort_crops(order);
    Ok(varieties)
}

/// All ancestors of a crop, starting with its parent.
///
/// The walk stops at the first crop that has already been
/// visited.
pub fn ancestors<R: CropRepo>(repo: &R, crop: &Crop) -> Result<Vec<Crop>> {
    let mut visited = HashSet::new();
    visited.insert(crop.id.clone());
    let mut ancestors = vec![];
    let mut next = parent(repo, crop)?;
    while let Some(ancestor) = next {
        if !visited.insert(ancestor.id.clone()) {
            log::warn!("Cyclic ancestry of crop {}", crop.id);
            break;
        }
        next = parent(repo, &ancestor)?;
        ancestors.push(ancestor);
    }
    Ok(ancestors)
}

/// Approved crops without a parent.
pub fn toplevel_crops<R: CropRepo>(repo: &R, order: CropOrder) -> Result<Vec<Crop>> {
    let mut crops: Vec<_> = repo
        .crops_with_status(ApprovalStatus::Approved)?
        .into_iter()
        .filter(|c| !c.is_variety())
        .collect();
    crops.sort_crops(order);
    Ok(crops)
}

/// Checks that `parent` may become the parent of `crop`.
pub fn check_parent<R: CropRepo>(repo: &R, crop_id: &Id, parent: &Crop) -> Result<()> {
    if &parent.id == crop_id {
        return Err(Error::ParentCycle);
    }
    if ancestors(repo, parent)?.iter().any(|a| &a.id == crop_id) {
        return Err(Error::ParentCycle);
    }
    Ok(())
}

/// Moves a crop below another crop or, without a parent,
/// to the top level of the hierarchy.
pub fn set_parent<R: CropRepo>(repo: &R, crop_id: &str, parent_id: Option<&str>) -> Result<Crop> {
    let mut crop = get_crop(repo, crop_id)?;
    let parent_id = match parent_id {
        Some(parent_id) => {
            let parent = get_crop(repo, parent_id)?;
            check_parent(repo, &crop.id, &parent)?;
            Some(parent.id)
        }
        None => None,
    };
    if crop.parent_id == parent_id {
        return Ok(crop);
    }
    crop.parent_id = parent_id;
    repo.update_crop(&crop)?;
    Ok(crop)
}
