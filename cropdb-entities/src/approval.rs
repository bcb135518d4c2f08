use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

pub type ApprovalStatusPrimitive = i16;

/// Moderation state of a crop.
///
/// Every state may be changed into any other state. Who is allowed
/// to do so is decided by the surrounding editorial workflow.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ApprovalStatus {
    Rejected = -1,
    Pending  =  0,
    Approved =  1,
}

impl ApprovalStatus {
    pub const fn default() -> Self {
        Self::Pending
    }

    pub fn is_visible(self) -> bool {
        self == Self::Approved
    }
}

impl Default for ApprovalStatus {
    fn default() -> Self {
        Self::default()
    }
}

#[derive(Debug, Error)]
#[error("Invalid approval status primitive: {0}")]
pub struct InvalidApprovalStatusPrimitive(ApprovalStatusPrimitive);

impl TryFrom<ApprovalStatusPrimitive> for ApprovalStatus {
    type Error = InvalidApprovalStatusPrimitive;
    fn try_from(from: ApprovalStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidApprovalStatusPrimitive(from))
    }
}

impl From<ApprovalStatus> for ApprovalStatusPrimitive {
    fn from(from: ApprovalStatus) -> Self {
        from as ApprovalStatusPrimitive
    }
}

/// Why a crop has been rejected.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
    AsRefStr,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum RejectionReason {
    #[strum(serialize = "already in database")]
    AlreadyInDatabase,
    #[strum(serialize = "not edible")]
    NotEdible,
    #[strum(serialize = "not enough information")]
    NotEnoughInformation,
    #[strum(serialize = "other")]
    Other,
}

impl RejectionReason {
    /// The reason must be explained in free text.
    pub fn requires_notes(self) -> bool {
        self == Self::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_status_is_pending() {
        assert_eq!(ApprovalStatus::Pending, Default::default());
    }

    #[test]
    fn convert_status_primitives() {
        for status in ApprovalStatus::iter() {
            let primitive = ApprovalStatusPrimitive::from(status);
            assert_eq!(status, ApprovalStatus::try_from(primitive).unwrap());
        }
        assert!(ApprovalStatus::try_from(2).is_err());
    }

    #[test]
    fn parse_status_names() {
        assert_eq!(ApprovalStatus::Approved, "approved".parse().unwrap());
        assert_eq!(ApprovalStatus::Rejected, "Rejected".parse().unwrap());
        assert_eq!("pending", ApprovalStatus::Pending.to_string());
    }

    #[test]
    fn parse_rejection_reasons() {
        assert_eq!(
            RejectionReason::NotEdible,
            "not edible".parse::<RejectionReason>().unwrap()
        );
        assert_eq!(
            "already in database",
            RejectionReason::AlreadyInDatabase.as_ref()
        );
        assert!("edible".parse::<RejectionReason>().is_err());
    }
}
