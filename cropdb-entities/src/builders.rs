pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{crop_builder::*, harvest_builder::*, planting_builder::*};

pub mod crop_builder {

    use super::*;
    use crate::{approval::*, crop::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CropBuild {
        crop: Crop,
    }

    impl CropBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.crop.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.crop.name = name.into();
            self
        }
        pub fn en_wikipedia_url(mut self, url: Option<&str>) -> Self {
            self.crop.en_wikipedia_url = url.map(Into::into);
            self
        }
        pub fn parent(mut self, parent: &Crop) -> Self {
            self.crop.parent_id = Some(parent.id.clone());
            self
        }
        pub fn parent_id(mut self, parent_id: Option<&str>) -> Self {
            self.crop.parent_id = parent_id.map(Into::into);
            self
        }
        pub fn status(mut self, status: ApprovalStatus) -> Self {
            self.crop.approval_status = status;
            self
        }
        pub fn approved(self) -> Self {
            self.status(ApprovalStatus::Approved)
        }
        pub fn rejected(mut self, reason: RejectionReason, notes: Option<&str>) -> Self {
            self.crop.approval_status = ApprovalStatus::Rejected;
            self.crop.reason_for_rejection = Some(reason);
            self.crop.rejection_notes = notes.map(Into::into);
            self
        }
        pub fn creator(mut self, creator: &Id) -> Self {
            self.crop.creator = Some(creator.clone());
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.crop.created_at = created_at;
            self
        }
        pub fn finish(self) -> Crop {
            self.crop
        }
    }

    impl Builder for Crop {
        type Build = CropBuild;
        fn build() -> CropBuild {
            CropBuild {
                crop: Crop {
                    id: Id::new(),
                    name: "".into(),
                    en_wikipedia_url: None,
                    parent_id: None,
                    approval_status: ApprovalStatus::default(),
                    reason_for_rejection: None,
                    rejection_notes: None,
                    creator: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod planting_builder {

    use super::*;
    use crate::{crop::*, id::*, planting::*, time::*};

    #[derive(Debug)]
    pub struct PlantingBuild {
        planting: Planting,
    }

    impl PlantingBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.planting.id = id.into();
            self
        }
        pub fn crop(mut self, crop: &Crop) -> Self {
            self.planting.crop_id = Some(crop.id.clone());
            self
        }
        pub fn sunniness(mut self, sunniness: Sunniness) -> Self {
            self.planting.sunniness = Some(sunniness);
            self
        }
        pub fn planted_from(mut self, planted_from: PlantedFrom) -> Self {
            self.planting.planted_from = Some(planted_from);
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.planting.created_at = created_at;
            self
        }
        pub fn finish(self) -> Planting {
            self.planting
        }
    }

    impl Builder for Planting {
        type Build = PlantingBuild;
        fn build() -> PlantingBuild {
            PlantingBuild {
                planting: Planting {
                    id: Id::new(),
                    crop_id: None,
                    owner: None,
                    sunniness: None,
                    planted_from: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod harvest_builder {

    use super::*;
    use crate::{crop::*, harvest::*, id::*, time::*};

    #[derive(Debug)]
    pub struct HarvestBuild {
        harvest: Harvest,
    }

    impl HarvestBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.harvest.id = id.into();
            self
        }
        pub fn crop(mut self, crop: &Crop) -> Self {
            self.harvest.crop_id = Some(crop.id.clone());
            self
        }
        pub fn plant_part(mut self, plant_part: &PlantPart) -> Self {
            self.harvest.plant_part_id = Some(plant_part.id.clone());
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.harvest.created_at = created_at;
            self
        }
        pub fn finish(self) -> Harvest {
            self.harvest
        }
    }

    impl Builder for Harvest {
        type Build = HarvestBuild;
        fn build() -> HarvestBuild {
            HarvestBuild {
                harvest: Harvest {
                    id: Id::new(),
                    crop_id: None,
                    owner: None,
                    plant_part_id: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }

    #[test]
    fn build_harvest_of_crop() {
        let crop = Crop::build().name("apple").finish();
        let part = PlantPart {
            id: "fruit".into(),
            name: "fruit".into(),
        };
        let harvest = Harvest::build().crop(&crop).plant_part(&part).finish();
        assert_eq!(Some(&crop.id), harvest.crop_id.as_ref());
        assert_eq!(Some(&part.id), harvest.plant_part_id.as_ref());
    }
}
