use cropdb_entities::{crop::*, harvest::*};
use std::cmp::Ordering;

/// How lists of crops are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CropOrder {
    /// Alphabetically, ignoring case.
    #[default]
    Name,
    /// Newest first.
    Recent,
}

fn name_key(crop: &Crop) -> (String, &str, &str) {
    (crop.name.to_lowercase(), &crop.name, crop.id.as_str())
}

/// Case-insensitive comparison by name.
///
/// Ties are broken by the exact name and finally by id
/// to obtain a total order.
pub fn cmp_crops_by_name(a: &Crop, b: &Crop) -> Ordering {
    name_key(a).cmp(&name_key(b))
}

pub trait SortCrops {
    fn sort_crops(&mut self, order: CropOrder);
}

impl SortCrops for [Crop] {
    fn sort_crops(&mut self, order: CropOrder) {
        match order {
            CropOrder::Name => {
                self.sort_by_cached_key(|c| (c.name.to_lowercase(), c.name.clone(), c.id.clone()))
            }
            CropOrder::Recent => self.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| cmp_crops_by_name(a, b))
            }),
        }
    }
}

pub trait SortByFrequency {
    fn sort_by_frequency(&mut self);
}

impl SortByFrequency for [CropPopularity] {
    fn sort_by_frequency(&mut self) {
        self.sort_by(|CropPopularity(a, a_count), CropPopularity(b, b_count)| {
            b_count
                .cmp(a_count)
                .then_with(|| cmp_crops_by_name(a, b))
        });
    }
}

impl SortByFrequency for [PlantPartFrequency] {
    fn sort_by_frequency(&mut self) {
        self.sort_by(|PlantPartFrequency(a, a_count), PlantPartFrequency(b, b_count)| {
            b_count
                .cmp(a_count)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropdb_entities::{builders::*, time::Timestamp};

    fn crop(id: &str, name: &str, created_at: i64) -> Crop {
        Crop::build()
            .id(id)
            .name(name)
            .created_at(Timestamp::from_millis(created_at))
            .finish()
    }

    fn ids(crops: &[Crop]) -> Vec<&str> {
        crops.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn sort_by_name_ignoring_case() {
        let mut crops = vec![
            crop("1", "tomato", 1),
            crop("2", "Apple", 2),
            crop("3", "banana", 3),
            crop("4", "apple", 4),
        ];
        crops.sort_crops(CropOrder::Name);
        assert_eq!(vec!["2", "4", "3", "1"], ids(&crops));
    }

    #[test]
    fn sort_recent_first() {
        let mut crops = vec![
            crop("1", "tomato", 1),
            crop("2", "apple", 3),
            crop("3", "banana", 2),
            crop("4", "arugula", 3),
        ];
        crops.sort_crops(CropOrder::Recent);
        assert_eq!(vec!["2", "4", "3", "1"], ids(&crops));
    }

    #[test]
    fn sort_popular_crops() {
        let mut popular = vec![
            CropPopularity(crop("1", "tomato", 0), 2),
            CropPopularity(crop("2", "maize", 0), 5),
            CropPopularity(crop("3", "Bean", 0), 2),
        ];
        popular.sort_by_frequency();
        let ids: Vec<_> = popular.iter().map(|p| p.0.id.as_str()).collect();
        assert_eq!(vec!["2", "3", "1"], ids);
    }

    #[test]
    fn sort_plant_parts() {
        let part = |id: &str, name: &str| PlantPart {
            id: id.into(),
            name: name.into(),
        };
        let mut parts = vec![
            PlantPartFrequency(part("1", "leaf"), 1),
            PlantPartFrequency(part("2", "fruit"), 1),
            PlantPartFrequency(part("3", "root"), 4),
        ];
        parts.sort_by_frequency();
        let names: Vec<_> = parts.iter().map(|p| p.0.name.as_str()).collect();
        assert_eq!(vec!["root", "fruit", "leaf"], names);
    }
}
