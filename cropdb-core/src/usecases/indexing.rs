use super::{names::load_crop_names, prelude::*};
use anyhow::Result as Fallible;

pub fn indexed_crop<R: CropNameRepo>(repo: &R, crop: &Crop) -> Result<IndexedCrop> {
    let (scientific_names, alternate_names) = load_crop_names(repo, crop.id.as_str())?;
    Ok(IndexedCrop {
        id: crop.id.clone(),
        name: crop.name.clone(),
        scientific_names,
        alternate_names,
    })
}

/// Adds an approved crop to the index or removes
/// any other crop from it.
pub fn index_crop<R: CropNameRepo>(repo: &R, indexer: &dyn CropIndexer, crop: &Crop) -> Fallible<()> {
    if !crop.approval_status.is_visible() {
        return unindex_crop(indexer, &crop.id);
    }
    let indexed = indexed_crop(repo, crop)?;
    indexer.add_or_update_crop(&indexed)?;
    Ok(())
}

pub fn unindex_crop(indexer: &dyn CropIndexer, id: &Id) -> Fallible<()> {
    indexer.remove_by_id(id)?;
    Ok(())
}

/// Replaces the contents of the index with all approved crops.
///
/// Returns the number of indexed crops.
pub fn reindex_all_crops<R>(repo: &R, indexer: &dyn CropIndexer) -> Fallible<usize>
where
    R: CropRepo + CropNameRepo,
{
    indexer.remove_all_crops()?;
    let mut count = 0;
    for crop in repo.crops_with_status(ApprovalStatus::Approved)? {
        if let Err(err) = index_crop(repo, indexer, &crop) {
            log::error!("Failed to index crop {}: {}", crop.id, err);
            continue;
        }
        count += 1;
    }
    Ok(count)
}
