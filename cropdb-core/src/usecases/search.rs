use super::{names::load_crop_names, prelude::*};
use crate::util::sort::{CropOrder, SortCrops};
use std::collections::HashMap;

pub const DEFAULT_SEARCH_LIMIT: usize = 50;

fn query_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Finds approved crops by (parts of) their names.
///
/// The results of the index are ordered by relevance. If the index
/// is not available all approved crops are scanned instead.
pub fn search_crops<R>(repo: &R, index: &dyn CropIndex, text: &str, limit: usize) -> Result<Vec<Crop>>
where
    R: CropRepo + CropNameRepo,
{
    if limit == 0 {
        return Err(Error::InvalidLimit);
    }
    let text = text.trim();
    if text.is_empty() {
        return Ok(vec![]);
    }
    match index.query_crops(text, limit) {
        Ok(ids) => load_visible_crops(repo, &ids),
        Err(err) => {
            log::warn!("Failed to query the crop index, falling back to a full scan: {err}");
            scan_crops(repo, text, limit)
        }
    }
}

// The index might be outdated.
fn load_visible_crops<R: CropRepo>(repo: &R, ids: &[Id]) -> Result<Vec<Crop>> {
    let id_refs: Vec<_> = ids.iter().map(Id::as_str).collect();
    let mut crops: HashMap<_, _> = repo
        .get_crops(&id_refs)?
        .into_iter()
        .filter(|c| c.approval_status.is_visible())
        .map(|c| (c.id.clone(), c))
        .collect();
    Ok(ids.iter().filter_map(|id| crops.remove(id)).collect())
}

fn scan_crops<R>(repo: &R, text: &str, limit: usize) -> Result<Vec<Crop>>
where
    R: CropRepo + CropNameRepo,
{
    let words = query_words(text);
    let mut crops = repo.crops_with_status(ApprovalStatus::Approved)?;
    crops.sort_crops(CropOrder::Name);
    let mut results = vec![];
    for crop in crops {
        if results.len() >= limit {
            break;
        }
        let (scientific_names, alternate_names) = load_crop_names(repo, crop.id.as_str())?;
        let names: Vec<_> = std::iter::once(&crop.name)
            .chain(&scientific_names)
            .chain(&alternate_names)
            .map(|n| n.to_lowercase())
            .collect();
        if words
            .iter()
            .all(|w| names.iter().any(|n| n.contains(w.as_str())))
        {
            results.push(crop);
        }
    }
    Ok(results)
}
