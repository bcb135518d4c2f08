use super::{load_crops::get_crop, prelude::*};

/// Deletes a crop and all of its names.
///
/// Plantings, harvests and varieties of the crop are kept but
/// no longer refer to it. Posts only lose their mention of
/// the crop.
pub fn delete_crop<R: CropRepo>(repo: &R, id: &str) -> Result<Crop> {
    let crop = get_crop(repo, id)?;
    repo.delete_crop(crop.id.as_str())?;
    log::info!("Deleted crop '{}' ({})", crop.name, crop.id);
    Ok(crop)
}
