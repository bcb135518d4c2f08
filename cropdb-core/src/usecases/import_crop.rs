use super::{
    hierarchy::check_parent,
    names::{add_alternate_names, add_scientific_names},
    prelude::*,
};
use crate::util::{
    text::non_blank,
    validate::{validate_wikipedia_url, AutoCorrect, Validate},
};

/// One row of a crop list.
///
/// Optional fields that are blank or absent are `None`.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CropRow {
    pub name             : String,
    pub en_wikipedia_url : Option<String>,
    pub parent_name      : Option<String>,
    pub scientific_names : Option<String>,
    pub alternate_names  : Option<String>,
}

impl CropRow {
    /// Reads the positional fields
    /// `name, wikipedia url, parent name, scientific names, alternate names`.
    ///
    /// Missing trailing fields are treated as blank and additional
    /// fields are ignored.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        let mut next = || non_blank(fields.next()).map(ToString::to_string);
        let name = next().unwrap_or_default();
        let en_wikipedia_url = next();
        let parent_name = next();
        let scientific_names = next();
        let alternate_names = next();
        Self {
            name,
            en_wikipedia_url,
            parent_name,
            scientific_names,
            alternate_names,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedCrop {
    pub crop: Crop,
    pub created: bool,
    pub added_names: Vec<CropName>,
}

#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    pub creator: Option<Id>,
    pub approve: bool,
}

fn find_crop_by_name<R: CropRepo>(repo: &R, name: &str) -> Result<Option<Crop>> {
    let mut candidates = repo.find_crops_by_name_ignore_case(name)?;
    if let Some(pos) = candidates.iter().position(|c| c.name == name) {
        return Ok(Some(candidates.swap_remove(pos)));
    }
    if candidates.len() > 1 {
        log::warn!(
            "Found {} crops named '{name}', using the oldest",
            candidates.len()
        );
    }
    candidates.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
    Ok(candidates.into_iter().next())
}

fn link_parent<R: CropRepo>(repo: &R, crop: &mut Crop, parent_name: &str) -> Result<bool> {
    let Some(parent) = repo.try_get_crop_by_name(parent_name)? else {
        log::warn!(
            "Parent crop '{parent_name}' of '{}' does not exist",
            crop.name
        );
        return Ok(false);
    };
    if crop.parent_id.as_ref() == Some(&parent.id) {
        return Ok(false);
    }
    match check_parent(repo, &crop.id, &parent) {
        Ok(()) => {}
        Err(Error::ParentCycle) => {
            log::warn!(
                "Crop '{}' cannot become a variety of '{parent_name}'",
                crop.name
            );
            return Ok(false);
        }
        Err(err) => return Err(err),
    }
    crop.parent_id = Some(parent.id);
    Ok(true)
}

/// Creates or updates a crop from a row of a crop list.
///
/// Importing the same row again does not change anything.
pub fn import_crop_row<R: Db>(repo: &R, row: &CropRow, options: &ImportOptions) -> Result<ImportedCrop> {
    let name = row.name.trim();
    if name.is_empty() {
        return Err(Error::Name);
    }
    if let Some(url) = &row.en_wikipedia_url {
        validate_wikipedia_url(url)?;
    }

    let (mut crop, created) = match find_crop_by_name(repo, name)? {
        Some(crop) => (crop, false),
        None => {
            let mut crop = Crop::new(name, options.creator.clone());
            crop.en_wikipedia_url = row.en_wikipedia_url.clone();
            if options.approve {
                crop.approval_status = ApprovalStatus::Approved;
            }
            let crop = crop.auto_correct();
            crop.validate()?;
            repo.create_crop(&crop)?;
            log::debug!("Created crop '{}' ({})", crop.name, crop.id);
            (crop, true)
        }
    };

    let mut modified = false;
    if !created {
        if row.en_wikipedia_url.is_some() && crop.en_wikipedia_url != row.en_wikipedia_url {
            crop.en_wikipedia_url = row.en_wikipedia_url.clone();
            modified = true;
        }
        if options.approve && !crop.is_approved() {
            crop.approval_status = ApprovalStatus::Approved;
            crop.reason_for_rejection = None;
            crop.rejection_notes = None;
            modified = true;
        }
    }
    if let Some(parent_name) = &row.parent_name {
        modified |= link_parent(repo, &mut crop, parent_name)?;
    }
    if modified {
        crop.validate()?;
        repo.update_crop(&crop)?;
    }

    let mut added_names = vec![];
    if let Some(names) = &row.scientific_names {
        added_names.extend(add_scientific_names(repo, &crop, names)?);
    }
    if let Some(names) = &row.alternate_names {
        added_names.extend(add_alternate_names(repo, &crop, names)?);
    }

    Ok(ImportedCrop {
        crop,
        created,
        added_names,
    })
}
