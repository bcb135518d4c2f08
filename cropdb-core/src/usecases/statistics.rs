use super::prelude::*;
use crate::util::sort::{CropOrder, SortByFrequency, SortCrops};
use std::collections::{BTreeMap, HashMap, HashSet};

pub const DEFAULT_INTERESTING_LIMIT: usize = 12;

const MIN_INTERESTING_PLANTINGS: u64 = 3;
const MIN_INTERESTING_PHOTOS: usize = 3;

/// Approved crops ordered by their number of plantings.
pub fn popular_crops<R>(repo: &R) -> Result<Vec<CropPopularity>>
where
    R: CropRepo + PlantingRepo,
{
    let counts: HashMap<_, _> = repo.count_plantings_per_crop()?.into_iter().collect();
    let mut popular: Vec<_> = repo
        .crops_with_status(ApprovalStatus::Approved)?
        .into_iter()
        .map(|crop| {
            let count = counts.get(&crop.id).copied().unwrap_or_default();
            CropPopularity(crop, count)
        })
        .collect();
    popular.sort_by_frequency();
    Ok(popular)
}

fn count_distinct_planting_photos<R: PhotoRepo>(repo: &R, plantings: &[Planting]) -> Result<usize> {
    let mut photo_ids = HashSet::new();
    for planting in plantings {
        for photo in repo.load_photos_of_planting(planting.id.as_str())? {
            photo_ids.insert(photo.id);
        }
    }
    Ok(photo_ids.len())
}

/// Approved crops that have been planted and photographed
/// often enough to be featured.
pub fn interesting_crops<R>(repo: &R, limit: usize) -> Result<Vec<Crop>>
where
    R: CropRepo + PlantingRepo + PhotoRepo,
{
    if limit == 0 {
        return Err(Error::InvalidLimit);
    }
    let counts: HashMap<_, _> = repo.count_plantings_per_crop()?.into_iter().collect();
    let mut crops = repo.crops_with_status(ApprovalStatus::Approved)?;
    crops.sort_crops(CropOrder::Name);
    let mut interesting = Vec::with_capacity(limit.min(crops.len()));
    for crop in crops {
        if interesting.len() >= limit {
            break;
        }
        let planting_count = counts.get(&crop.id).copied().unwrap_or_default();
        if planting_count < MIN_INTERESTING_PLANTINGS {
            continue;
        }
        let plantings = repo.load_plantings_of_crop(crop.id.as_str())?;
        if count_distinct_planting_photos(repo, &plantings)? < MIN_INTERESTING_PHOTOS {
            continue;
        }
        interesting.push(crop);
    }
    Ok(interesting)
}

/// Number of plantings per sunniness.
///
/// Plantings without sunniness are not counted.
pub fn sunniness<R: PlantingRepo>(repo: &R, crop_id: &str) -> Result<BTreeMap<Sunniness, u64>> {
    let mut counts = BTreeMap::new();
    for planting in repo.load_plantings_of_crop(crop_id)? {
        if let Some(sunniness) = planting.sunniness {
            *counts.entry(sunniness).or_default() += 1;
        }
    }
    Ok(counts)
}

/// Number of plantings per propagation method.
pub fn planted_from<R: PlantingRepo>(repo: &R, crop_id: &str) -> Result<BTreeMap<PlantedFrom, u64>> {
    let mut counts = BTreeMap::new();
    for planting in repo.load_plantings_of_crop(crop_id)? {
        if let Some(planted_from) = planting.planted_from {
            *counts.entry(planted_from).or_default() += 1;
        }
    }
    Ok(counts)
}

fn count_harvests_per_plant_part<R: HarvestRepo>(repo: &R, crop_id: &str) -> Result<HashMap<Id, HarvestCount>> {
    let mut counts = HashMap::new();
    for harvest in repo.load_harvests_of_crop(crop_id)? {
        if let Some(plant_part_id) = harvest.plant_part_id {
            *counts.entry(plant_part_id).or_default() += 1;
        }
    }
    Ok(counts)
}

/// The distinct plant parts that have been harvested, ordered by name.
pub fn plant_parts<R>(repo: &R, crop_id: &str) -> Result<Vec<PlantPart>>
where
    R: HarvestRepo + PlantPartRepo,
{
    let counts = count_harvests_per_plant_part(repo, crop_id)?;
    let ids: Vec<_> = counts.keys().map(Id::as_str).collect();
    let mut parts = repo.get_plant_parts(&ids)?;
    parts.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
    Ok(parts)
}

/// Plant parts ordered by how often they have been harvested.
pub fn popular_plant_parts<R>(repo: &R, crop_id: &str) -> Result<Vec<PlantPartFrequency>>
where
    R: HarvestRepo + PlantPartRepo,
{
    let counts = count_harvests_per_plant_part(repo, crop_id)?;
    let ids: Vec<_> = counts.keys().map(Id::as_str).collect();
    let mut frequencies: Vec<_> = repo
        .get_plant_parts(&ids)?
        .into_iter()
        .filter_map(|part| {
            let count = counts.get(&part.id).copied()?;
            Some(PlantPartFrequency(part, count))
        })
        .collect();
    frequencies.sort_by_frequency();
    Ok(frequencies)
}

/// The photo that represents a crop.
///
/// Photos of plantings are always preferred over photos of harvests.
pub fn default_photo<R>(repo: &R, crop_id: &str) -> Result<Option<Photo>>
where
    R: PlantingRepo + HarvestRepo + PhotoRepo,
{
    for planting in repo.load_plantings_of_crop(crop_id)? {
        if let Some(photo) = repo
            .load_photos_of_planting(planting.id.as_str())?
            .into_iter()
            .next()
        {
            return Ok(Some(photo));
        }
    }
    for harvest in repo.load_harvests_of_crop(crop_id)? {
        if let Some(photo) = repo
            .load_photos_of_harvest(harvest.id.as_str())?
            .into_iter()
            .next()
        {
            return Ok(Some(photo));
        }
    }
    Ok(None)
}
