use super::{indexing::index_crop, prelude::*};
use crate::RepoError;
use anyhow::{anyhow, Result as Fallible};
use std::{
    cell::{Cell, RefCell},
    result,
};

type RepoResult<T> = result::Result<T, RepoError>;

trait Identified {
    fn id(&self) -> &str;
}

macro_rules! identified {
    ($($t:ty),*) => {
        $(
            impl Identified for $t {
                fn id(&self) -> &str {
                    self.id.as_str()
                }
            }
        )*
    };
}

identified!(Crop, CropName, Planting, Harvest, PlantPart, Photo, Member);

#[derive(Default)]
pub struct MockDb {
    pub crops: RefCell<Vec<Crop>>,
    pub crop_names: RefCell<Vec<CropName>>,
    pub plantings: RefCell<Vec<Planting>>,
    pub harvests: RefCell<Vec<Harvest>>,
    pub plant_parts: RefCell<Vec<PlantPart>>,
    pub photos: RefCell<Vec<Photo>>,
    pub planting_photos: RefCell<Vec<(Id, Id)>>,
    pub harvest_photos: RefCell<Vec<(Id, Id)>>,
    pub members: RefCell<Vec<Member>>,
    pub mentions: RefCell<Vec<(String, Id)>>,
    pub index: RefCell<Vec<IndexedCrop>>,
    index_queries_fail: Cell<bool>,
}

impl MockDb {
    pub fn index_all(&self) {
        for crop in self.all_crops().unwrap() {
            index_crop(self, self, &crop).unwrap();
        }
    }

    pub fn fail_index_queries(&self) {
        self.index_queries_fail.set(true);
    }
}

fn get<T: Clone + Identified>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.id() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Identified>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.id() == e.id()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Identified>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == e.id()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + Identified>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == id) {
        objects.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn refers_to(crop_id: &Option<Id>, id: &str) -> bool {
    crop_id.as_ref().map(Id::as_str) == Some(id)
}

impl CropRepo for MockDb {
    fn create_crop(&self, crop: &Crop) -> RepoResult<()> {
        create(&mut self.crops.borrow_mut(), crop.clone())
    }

    fn update_crop(&self, crop: &Crop) -> RepoResult<()> {
        update(&mut self.crops.borrow_mut(), crop)
    }

    fn delete_crop(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.crops.borrow_mut(), id)?;
        self.crop_names
            .borrow_mut()
            .retain(|n| n.crop_id.as_str() != id);
        for crop in self.crops.borrow_mut().iter_mut() {
            if refers_to(&crop.parent_id, id) {
                crop.parent_id = None;
            }
        }
        for planting in self.plantings.borrow_mut().iter_mut() {
            if refers_to(&planting.crop_id, id) {
                planting.crop_id = None;
            }
        }
        for harvest in self.harvests.borrow_mut().iter_mut() {
            if refers_to(&harvest.crop_id, id) {
                harvest.crop_id = None;
            }
        }
        self.mentions
            .borrow_mut()
            .retain(|(_, crop_id)| crop_id.as_str() != id);
        Ok(())
    }

    fn get_crop(&self, id: &str) -> RepoResult<Crop> {
        get(&self.crops.borrow(), id)
    }

    fn get_crops(&self, ids: &[&str]) -> RepoResult<Vec<Crop>> {
        Ok(self
            .crops
            .borrow()
            .iter()
            .filter(|c| ids.iter().any(|id| c.id.as_str() == *id))
            .cloned()
            .collect())
    }

    fn try_get_crop_by_name(&self, name: &str) -> RepoResult<Option<Crop>> {
        Ok(self.crops.borrow().iter().find(|c| c.name == name).cloned())
    }

    fn find_crops_by_name_ignore_case(&self, name: &str) -> RepoResult<Vec<Crop>> {
        let name = name.to_lowercase();
        Ok(self
            .crops
            .borrow()
            .iter()
            .filter(|c| c.name.to_lowercase() == name)
            .cloned()
            .collect())
    }

    fn all_crops(&self) -> RepoResult<Vec<Crop>> {
        Ok(self.crops.borrow().clone())
    }

    fn crops_with_status(&self, status: ApprovalStatus) -> RepoResult<Vec<Crop>> {
        Ok(self
            .crops
            .borrow()
            .iter()
            .filter(|c| c.approval_status == status)
            .cloned()
            .collect())
    }

    fn varieties_of_crop(&self, parent_id: &str) -> RepoResult<Vec<Crop>> {
        Ok(self
            .crops
            .borrow()
            .iter()
            .filter(|c| refers_to(&c.parent_id, parent_id))
            .cloned()
            .collect())
    }

    fn count_crops(&self) -> RepoResult<usize> {
        Ok(self.crops.borrow().len())
    }

    fn review_crops(&self, ids: &[&str], approval: &Approval) -> RepoResult<usize> {
        let mut count = 0;
        for crop in self.crops.borrow_mut().iter_mut() {
            if ids.iter().any(|id| crop.id.as_str() == *id) {
                crop.approval_status = approval.status;
                crop.reason_for_rejection = approval.reason_for_rejection;
                crop.rejection_notes = approval.rejection_notes.clone();
                count += 1;
            }
        }
        Ok(count)
    }
}

impl CropNameRepo for MockDb {
    fn add_crop_name(&self, name: &CropName) -> RepoResult<()> {
        let mut names = self.crop_names.borrow_mut();
        if names
            .iter()
            .any(|n| n.crop_id == name.crop_id && n.kind == name.kind && n.name == name.name)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut names, name.clone())
    }

    fn load_crop_names(&self, crop_id: &str, kind: CropNameKind) -> RepoResult<Vec<CropName>> {
        Ok(self
            .crop_names
            .borrow()
            .iter()
            .filter(|n| n.crop_id.as_str() == crop_id && n.kind == kind)
            .cloned()
            .collect())
    }
}

impl PlantingRepo for MockDb {
    fn create_planting(&self, planting: &Planting) -> RepoResult<()> {
        create(&mut self.plantings.borrow_mut(), planting.clone())
    }

    fn load_plantings_of_crop(&self, crop_id: &str) -> RepoResult<Vec<Planting>> {
        let mut plantings: Vec<_> = self
            .plantings
            .borrow()
            .iter()
            .filter(|p| refers_to(&p.crop_id, crop_id))
            .cloned()
            .collect();
        plantings.sort_by_key(|p| p.created_at);
        Ok(plantings)
    }

    fn count_plantings_per_crop(&self) -> RepoResult<Vec<(Id, u64)>> {
        let mut counts: Vec<(Id, u64)> = vec![];
        for crop_id in self.plantings.borrow().iter().filter_map(|p| p.crop_id.as_ref()) {
            match counts.iter_mut().find(|(id, _)| id == crop_id) {
                Some((_, count)) => *count += 1,
                None => counts.push((crop_id.clone(), 1)),
            }
        }
        Ok(counts)
    }
}

impl HarvestRepo for MockDb {
    fn create_harvest(&self, harvest: &Harvest) -> RepoResult<()> {
        create(&mut self.harvests.borrow_mut(), harvest.clone())
    }

    fn load_harvests_of_crop(&self, crop_id: &str) -> RepoResult<Vec<Harvest>> {
        let mut harvests: Vec<_> = self
            .harvests
            .borrow()
            .iter()
            .filter(|h| refers_to(&h.crop_id, crop_id))
            .cloned()
            .collect();
        harvests.sort_by_key(|h| h.created_at);
        Ok(harvests)
    }
}

impl PlantPartRepo for MockDb {
    fn create_plant_part(&self, plant_part: &PlantPart) -> RepoResult<()> {
        create(&mut self.plant_parts.borrow_mut(), plant_part.clone())
    }

    fn get_plant_parts(&self, ids: &[&str]) -> RepoResult<Vec<PlantPart>> {
        Ok(self
            .plant_parts
            .borrow()
            .iter()
            .filter(|p| ids.iter().any(|id| p.id.as_str() == *id))
            .cloned()
            .collect())
    }
}

impl PhotoRepo for MockDb {
    fn create_photo(&self, photo: &Photo) -> RepoResult<()> {
        create(&mut self.photos.borrow_mut(), photo.clone())
    }

    fn attach_photo_to_planting(&self, photo_id: &str, planting_id: &str) -> RepoResult<()> {
        get(&self.photos.borrow(), photo_id)?;
        get(&self.plantings.borrow(), planting_id)?;
        self.planting_photos
            .borrow_mut()
            .push((photo_id.into(), planting_id.into()));
        Ok(())
    }

    fn attach_photo_to_harvest(&self, photo_id: &str, harvest_id: &str) -> RepoResult<()> {
        get(&self.photos.borrow(), photo_id)?;
        get(&self.harvests.borrow(), harvest_id)?;
        self.harvest_photos
            .borrow_mut()
            .push((photo_id.into(), harvest_id.into()));
        Ok(())
    }

    fn load_photos_of_planting(&self, planting_id: &str) -> RepoResult<Vec<Photo>> {
        self.planting_photos
            .borrow()
            .iter()
            .filter(|(_, id)| id.as_str() == planting_id)
            .map(|(photo_id, _)| get(&self.photos.borrow(), photo_id.as_str()))
            .collect()
    }

    fn load_photos_of_harvest(&self, harvest_id: &str) -> RepoResult<Vec<Photo>> {
        self.harvest_photos
            .borrow()
            .iter()
            .filter(|(_, id)| id.as_str() == harvest_id)
            .map(|(photo_id, _)| get(&self.photos.borrow(), photo_id.as_str()))
            .collect()
    }
}

impl MemberRepo for MockDb {
    fn create_member(&self, member: &Member) -> RepoResult<()> {
        let mut members = self.members.borrow_mut();
        if members.iter().any(|m| m.login_name == member.login_name) {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut members, member.clone())
    }

    fn try_get_member_by_login_name(&self, login_name: &str) -> RepoResult<Option<Member>> {
        Ok(self
            .members
            .borrow()
            .iter()
            .find(|m| m.login_name == login_name)
            .cloned())
    }
}

impl CropMentionRepo for MockDb {
    fn mention_crops_in_post(&self, post_id: &str, crop_ids: &[&str]) -> RepoResult<()> {
        let mut mentions = self.mentions.borrow_mut();
        for crop_id in crop_ids {
            get(&self.crops.borrow(), crop_id)?;
            if !mentions
                .iter()
                .any(|(p, c)| p == post_id && c.as_str() == *crop_id)
            {
                mentions.push((post_id.to_string(), (*crop_id).into()));
            }
        }
        Ok(())
    }

    fn crops_mentioned_by_post(&self, post_id: &str) -> RepoResult<Vec<Id>> {
        Ok(self
            .mentions
            .borrow()
            .iter()
            .filter(|(p, _)| p == post_id)
            .map(|(_, crop_id)| crop_id.clone())
            .collect())
    }
}

impl Indexer for MockDb {
    fn flush_index(&mut self) -> Fallible<()> {
        Ok(())
    }
}

impl IdIndexer for MockDb {
    fn remove_by_id(&self, id: &Id) -> Fallible<()> {
        self.index.borrow_mut().retain(|c| &c.id != id);
        Ok(())
    }
}

impl CropIndex for MockDb {
    fn query_crops(&self, text: &str, limit: usize) -> Fallible<Vec<Id>> {
        if self.index_queries_fail.get() {
            return Err(anyhow!("The index is not available"));
        }
        let words: Vec<_> = text.split_whitespace().map(str::to_lowercase).collect();
        Ok(self
            .index
            .borrow()
            .iter()
            .filter(|c| {
                let names: Vec<_> = std::iter::once(&c.name)
                    .chain(&c.scientific_names)
                    .chain(&c.alternate_names)
                    .map(|n| n.to_lowercase())
                    .collect();
                words
                    .iter()
                    .all(|w| names.iter().any(|n| n.contains(w.as_str())))
            })
            .take(limit)
            .map(|c| c.id.clone())
            .collect())
    }
}

impl CropIndexer for MockDb {
    fn add_or_update_crop(&self, crop: &IndexedCrop) -> Fallible<()> {
        let mut index = self.index.borrow_mut();
        match index.iter().position(|c| c.id == crop.id) {
            Some(pos) => index[pos] = crop.clone(),
            None => index.push(crop.clone()),
        }
        Ok(())
    }

    fn remove_all_crops(&self) -> Fallible<()> {
        self.index.borrow_mut().clear();
        Ok(())
    }
}

#[test]
fn index_only_approved_crops() {
    let db = MockDb::default();
    let mut crop = Crop::new("tomato", None);
    db.create_crop(&crop).unwrap();
    index_crop(&db, &db, &crop).unwrap();
    assert!(db.index.borrow().is_empty());

    crop.approval_status = ApprovalStatus::Approved;
    index_crop(&db, &db, &crop).unwrap();
    assert_eq!(1, db.index.borrow().len());

    crop.approval_status = ApprovalStatus::Rejected;
    index_crop(&db, &db, &crop).unwrap();
    assert!(db.index.borrow().is_empty());
}
