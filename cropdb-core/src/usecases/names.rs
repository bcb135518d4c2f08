use super::prelude::*;
use crate::{util::text::split_name_list, RepoError};
use std::collections::HashSet;

/// Adds all names of a comma-separated list that the crop
/// does not own yet.
///
/// Returns the names that have actually been added.
pub fn add_crop_names<R: CropNameRepo>(
    repo: &R,
    crop_id: &Id,
    kind: CropNameKind,
    raw_names: &str,
) -> Result<Vec<CropName>> {
    let candidates = split_name_list(raw_names);
    if candidates.is_empty() {
        return Ok(vec![]);
    }
    let existing = repo.load_crop_names(crop_id.as_str(), kind)?;
    let mut known: HashSet<String> = existing.into_iter().map(|n| n.name).collect();
    let mut added = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if known.contains(candidate) {
            log::debug!("Crop {crop_id} already has the {kind:?} name '{candidate}'");
            continue;
        }
        let name = CropName::new(crop_id.clone(), kind, candidate);
        match repo.add_crop_name(&name) {
            Ok(()) => {}
            Err(RepoError::AlreadyExists) => {
                log::debug!("Crop {crop_id} already has the {kind:?} name '{candidate}'");
                continue;
            }
            Err(err) => return Err(err.into()),
        }
        known.insert(name.name.clone());
        added.push(name);
    }
    Ok(added)
}

pub fn add_scientific_names<R: CropNameRepo>(
    repo: &R,
    crop: &Crop,
    raw_names: &str,
) -> Result<Vec<CropName>> {
    add_crop_names(repo, &crop.id, CropNameKind::Scientific, raw_names)
}

pub fn add_alternate_names<R: CropNameRepo>(
    repo: &R,
    crop: &Crop,
    raw_names: &str,
) -> Result<Vec<CropName>> {
    add_crop_names(repo, &crop.id, CropNameKind::Alternate, raw_names)
}

pub fn scientific_names<R: CropNameRepo>(repo: &R, crop_id: &str) -> Result<Vec<String>> {
    load_names(repo, crop_id, CropNameKind::Scientific)
}

pub fn alternate_names<R: CropNameRepo>(repo: &R, crop_id: &str) -> Result<Vec<String>> {
    load_names(repo, crop_id, CropNameKind::Alternate)
}

/// Scientific and alternate names of a crop.
pub fn load_crop_names<R: CropNameRepo>(repo: &R, crop_id: &str) -> Result<(Vec<String>, Vec<String>)> {
    Ok((
        scientific_names(repo, crop_id)?,
        alternate_names(repo, crop_id)?,
    ))
}

fn load_names<R: CropNameRepo>(repo: &R, crop_id: &str, kind: CropNameKind) -> Result<Vec<String>> {
    Ok(repo
        .load_crop_names(crop_id, kind)?
        .into_iter()
        .map(|n| n.name)
        .collect())
}

/// The first scientific name of the crop or, if it has none,
/// the default scientific name of its parent.
///
/// Inheritance is resolved at the time of the request, i.e.
/// a variety follows changes of its ancestors until it gets
/// a scientific name of its own.
pub fn default_scientific_name<R>(repo: &R, crop: &Crop) -> Result<Option<String>>
where
    R: CropRepo + CropNameRepo,
{
    let mut visited = HashSet::new();
    let mut current = crop.clone();
    loop {
        if let Some(name) = repo
            .load_crop_names(current.id.as_str(), CropNameKind::Scientific)?
            .into_iter()
            .next()
        {
            return Ok(Some(name.name));
        }
        visited.insert(current.id.clone());
        let Some(parent_id) = current.parent_id else {
            return Ok(None);
        };
        if visited.contains(&parent_id) {
            log::warn!("Cyclic ancestry of crop {}", crop.id);
            return Ok(None);
        }
        current = match repo.get_crop(parent_id.as_str()) {
            Ok(parent) => parent,
            Err(RepoError::NotFound) => {
                log::warn!("Parent {parent_id} of crop {} does not exist", current.id);
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
    }
}
