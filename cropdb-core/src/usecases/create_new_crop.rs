use super::{hierarchy::check_parent, load_crops::get_crop, prelude::*};
use crate::util::validate::{AutoCorrect, Validate};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewCrop {
    pub name             : String,
    pub en_wikipedia_url : Option<String>,
    pub parent_id        : Option<String>,
    pub creator          : Option<Id>,
}

pub fn create_new_crop<R: CropRepo>(repo: &R, new_crop: NewCrop) -> Result<Crop> {
    let NewCrop {
        name,
        en_wikipedia_url,
        parent_id,
        creator,
    } = new_crop;
    let mut crop = Crop::new(name, creator);
    crop.en_wikipedia_url = en_wikipedia_url;
    let crop = crop.auto_correct();
    crop.validate()?;
    let crop = match parent_id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
        Some(parent_id) => {
            let parent = get_crop(repo, parent_id)?;
            check_parent(repo, &crop.id, &parent)?;
            Crop {
                parent_id: Some(parent.id),
                ..crop
            }
        }
        None => crop,
    };
    log::debug!("Creating new crop '{}' ({})", crop.name, crop.id);
    repo.create_crop(&crop)?;
    Ok(crop)
}
