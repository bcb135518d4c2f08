use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{id::*, time::*};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, Display, AsRefStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Sunniness {
    Sun,
    SemiShade,
    Shade,
}

/// How a planting has been propagated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, Display, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum PlantedFrom {
    #[strum(serialize = "seed")]
    Seed,
    #[strum(serialize = "seedling")]
    Seedling,
    #[strum(serialize = "cutting")]
    Cutting,
    #[strum(serialize = "root division")]
    RootDivision,
    #[strum(serialize = "runner")]
    Runner,
    #[strum(serialize = "bulb")]
    Bulb,
    #[strum(serialize = "root/tuber")]
    RootOrTuber,
    #[strum(serialize = "bare root plant")]
    BareRootPlant,
    #[strum(serialize = "advanced plant")]
    AdvancedPlant,
    #[strum(serialize = "graft")]
    Graft,
    #[strum(serialize = "layering")]
    Layering,
}

/// A record of a crop being grown.
///
/// The crop reference is cleared when the crop is destroyed.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planting {
    pub id           : Id,
    pub crop_id      : Option<Id>,
    pub owner        : Option<Id>,
    pub sunniness    : Option<Sunniness>,
    pub planted_from : Option<PlantedFrom>,
    pub created_at   : Timestamp,
}
