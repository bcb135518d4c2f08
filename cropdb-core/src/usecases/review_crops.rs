use super::{load_crops::crops_with_status, prelude::*};
use crate::util::{sort::CropOrder, text::non_blank};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropReview {
    pub status: ApprovalStatus,
    pub reason: Option<RejectionReason>,
    pub notes: Option<String>,
}

impl CropReview {
    pub fn approve() -> Self {
        Self::with_status(ApprovalStatus::Approved)
    }

    pub fn with_status(status: ApprovalStatus) -> Self {
        Self {
            status,
            reason: None,
            notes: None,
        }
    }

    pub fn reject(reason: RejectionReason, notes: Option<String>) -> Self {
        Self {
            status: ApprovalStatus::Rejected,
            reason: Some(reason),
            notes,
        }
    }
}

/// The outcome of a review.
///
/// Lists the crops that became visible or invisible
/// to the public by this review.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReviewedCrops {
    pub count: usize,
    pub approved: Vec<Id>,
    pub unapproved: Vec<Id>,
}

fn approval_of_review(review: CropReview) -> Result<Approval> {
    let CropReview {
        status,
        reason,
        notes,
    } = review;
    if status != ApprovalStatus::Rejected {
        // Reasons for rejection are discarded when leaving
        // the rejected state.
        return Ok(Approval {
            status,
            reason_for_rejection: None,
            rejection_notes: None,
        });
    }
    let notes = non_blank(notes.as_deref()).map(ToString::to_string);
    if reason.map(RejectionReason::requires_notes).unwrap_or(false) && notes.is_none() {
        return Err(Error::RejectionNotes);
    }
    Ok(Approval {
        status,
        reason_for_rejection: reason,
        rejection_notes: notes,
    })
}

pub fn review_crops<R: CropRepo>(repo: &R, ids: &[&str], review: CropReview) -> Result<ReviewedCrops> {
    if ids.is_empty() {
        return Err(Error::EmptyIdList);
    }
    let approval = approval_of_review(review)?;
    let crops = repo.get_crops(ids)?;
    let distinct_ids: HashSet<_> = ids.iter().copied().collect();
    if crops.len() != distinct_ids.len() {
        return Err(Error::CropDoesNotExist);
    }
    let now_approved = approval.status == ApprovalStatus::Approved;
    let (mut approved, mut unapproved) = (vec![], vec![]);
    for crop in crops {
        match (crop.is_approved(), now_approved) {
            (false, true) => approved.push(crop.id),
            (true, false) => unapproved.push(crop.id),
            _ => {}
        }
    }
    log::info!(
        "Changing approval status of {} crops to {}",
        distinct_ids.len(),
        approval.status
    );
    let count = repo.review_crops(ids, &approval)?;
    log::info!(
        "Changed approval status of {count} crops to {}",
        approval.status
    );
    Ok(ReviewedCrops {
        count,
        approved,
        unapproved,
    })
}

/// The review queue.
pub fn pending_crops<R: CropRepo>(repo: &R, order: CropOrder) -> Result<Vec<Crop>> {
    crops_with_status(repo, ApprovalStatus::Pending, order)
}

pub fn rejected_crops<R: CropRepo>(repo: &R, order: CropOrder) -> Result<Vec<Crop>> {
    crops_with_status(repo, ApprovalStatus::Rejected, order)
}
