use crate::{
    repositories,
    util::validate::{CropInvalidation, UrlInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid name")]
    Name,
    #[error("Invalid Wikipedia URL")]
    Url,
    #[error("Only rejected crops may have a reason for rejection")]
    RejectionReason,
    #[error("The reason for rejection needs to be explained")]
    RejectionNotes,
    #[error("The crop does not exist")]
    CropDoesNotExist,
    #[error("A crop cannot be its own ancestor")]
    ParentCycle,
    #[error("Invalid limit")]
    InvalidLimit,
    #[error("Missing id list")]
    EmptyIdList,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<UrlInvalidation> for Error {
    fn from(_: UrlInvalidation) -> Self {
        Self::Url
    }
}

impl From<CropInvalidation> for Error {
    fn from(err: CropInvalidation) -> Self {
        match err {
            CropInvalidation::Name => Self::Name,
            CropInvalidation::Url(err) => err.into(),
            CropInvalidation::RejectionReason => Self::RejectionReason,
            CropInvalidation::RejectionNotes => Self::RejectionNotes,
        }
    }
}
