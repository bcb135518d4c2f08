use cropdb_entities::{approval::*, crop::*};
use thiserror::Error;
use url::Url;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub trait AutoCorrect {
    fn auto_correct(self) -> Self;
}

#[derive(Debug, Error)]
pub enum UrlInvalidation {
    #[error("The URL contains whitespace or control characters")]
    ControlCharacters,
    #[error("The URL contains markup")]
    Markup,
    #[error("Unsupported URL scheme: {0}")]
    Scheme(String),
    #[error("The URL has no host")]
    MissingHost,
    #[error(transparent)]
    Malformed(#[from] url::ParseError),
}

fn contains_markup(s: &str) -> bool {
    if s.contains(['<', '>']) {
        return true;
    }
    let lowercase = s.to_ascii_lowercase();
    lowercase.contains("%3c") || lowercase.contains("%3e")
}

/// Checks a Wikipedia link as entered by a member.
///
/// Only absolute `http` and `https` URLs are accepted.
/// Non-ASCII characters are allowed, both raw and percent-encoded.
pub fn validate_wikipedia_url(s: &str) -> Result<(), UrlInvalidation> {
    if s.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(UrlInvalidation::ControlCharacters);
    }
    if contains_markup(s) {
        return Err(UrlInvalidation::Markup);
    }
    let url = Url::parse(s)?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlInvalidation::Scheme(scheme.to_string())),
    }
    if url.host_str().map(str::is_empty).unwrap_or(true) {
        return Err(UrlInvalidation::MissingHost);
    }
    Ok(())
}

pub fn is_valid_wikipedia_url(s: &str) -> bool {
    validate_wikipedia_url(s).is_ok()
}

pub fn is_valid_crop_name(name: &str) -> bool {
    !name.trim().is_empty() && !name.chars().any(char::is_control)
}

#[derive(Debug, Error)]
pub enum CropInvalidation {
    #[error("Invalid name")]
    Name,
    #[error("Invalid Wikipedia URL: {0}")]
    Url(#[source] UrlInvalidation),
    #[error("Only rejected crops may have a reason for rejection")]
    RejectionReason,
    #[error("The reason for rejection needs to be explained")]
    RejectionNotes,
}

impl Validate for Crop {
    type Error = CropInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !is_valid_crop_name(&self.name) {
            return Err(Self::Error::Name);
        }
        if let Some(ref url) = self.en_wikipedia_url {
            validate_wikipedia_url(url).map_err(Self::Error::Url)?;
        }
        if self.approval_status != ApprovalStatus::Rejected {
            if self.reason_for_rejection.is_some() || self.rejection_notes.is_some() {
                return Err(Self::Error::RejectionReason);
            }
            return Ok(());
        }
        if let Some(reason) = self.reason_for_rejection {
            if reason.requires_notes() && self.rejection_notes.is_none() {
                return Err(Self::Error::RejectionNotes);
            }
        }
        Ok(())
    }
}

impl AutoCorrect for Crop {
    fn auto_correct(mut self) -> Self {
        let name = self.name.trim();
        if name.len() != self.name.len() {
            self.name = name.to_string();
        }
        self.en_wikipedia_url = self
            .en_wikipedia_url
            .map(|x| x.trim().to_string())
            .filter(|x| !x.is_empty());
        self.rejection_notes = self
            .rejection_notes
            .map(|x| x.trim().to_string())
            .filter(|x| !x.is_empty());
        self.parent_id = self.parent_id.filter(|x| x.is_valid());
        self.creator = self.creator.filter(|x| x.is_valid());
        self
    }
}
