use crate::{approval::*, id::*, time::*};

/// A species or variety record in the crop taxonomy.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crop {
    pub id                   : Id,
    pub name                 : String,
    pub en_wikipedia_url     : Option<String>,
    pub parent_id            : Option<Id>,
    pub approval_status      : ApprovalStatus,
    pub reason_for_rejection : Option<RejectionReason>,
    pub rejection_notes      : Option<String>,
    pub creator              : Option<Id>,
    pub created_at           : Timestamp,
}

impl Crop {
    pub fn new(name: impl Into<String>, creator: Option<Id>) -> Self {
        Self {
            id: Id::new(),
            name: name.into(),
            en_wikipedia_url: None,
            parent_id: None,
            approval_status: ApprovalStatus::default(),
            reason_for_rejection: None,
            rejection_notes: None,
            creator,
            created_at: Timestamp::now(),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.approval_status == ApprovalStatus::Approved
    }

    pub fn is_variety(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Human readable explanation why this crop has been rejected.
    ///
    /// The free text notes are only used for [`RejectionReason::Other`].
    pub fn rejection_explanation(&self) -> Option<&str> {
        match self.reason_for_rejection? {
            RejectionReason::Other => self.rejection_notes.as_deref(),
            reason => Some(<&'static str>::from(reason)),
        }
    }
}

/// The two separate namespaces of names that belong to a crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropNameKind {
    Scientific,
    Alternate,
}

/// A scientific or alternate name, owned exclusively by its crop.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropName {
    pub id      : Id,
    pub crop_id : Id,
    pub kind    : CropNameKind,
    pub name    : String,
}

impl CropName {
    pub fn new(crop_id: Id, kind: CropNameKind, name: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            crop_id,
            kind,
            name: name.into(),
        }
    }
}

pub type CropCount = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropPopularity(pub Crop, pub CropCount);

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(reason: Option<RejectionReason>, notes: Option<&str>) -> Crop {
        Crop {
            approval_status: ApprovalStatus::Rejected,
            reason_for_rejection: reason,
            rejection_notes: notes.map(Into::into),
            ..Crop::new("tomato", None)
        }
    }

    #[test]
    fn new_crops_are_pending_toplevel_crops() {
        let crop = Crop::new("tomato", None);
        assert_eq!(ApprovalStatus::Pending, crop.approval_status);
        assert!(!crop.is_approved());
        assert!(!crop.is_variety());
    }

    #[test]
    fn explain_rejection_with_reason() {
        let crop = rejected(Some(RejectionReason::NotEdible), None);
        assert_eq!(Some("not edible"), crop.rejection_explanation());
    }

    #[test]
    fn explain_rejection_with_notes() {
        let crop = rejected(Some(RejectionReason::Other), Some("blah blah blah"));
        assert_eq!(Some("blah blah blah"), crop.rejection_explanation());
    }

    #[test]
    fn ignore_notes_for_predefined_reasons() {
        let crop = rejected(Some(RejectionReason::AlreadyInDatabase), Some("dup"));
        assert_eq!(Some("already in database"), crop.rejection_explanation());
    }

    #[test]
    fn no_explanation_without_reason() {
        let crop = rejected(None, Some("blah"));
        assert_eq!(None, crop.rejection_explanation());
    }
}
