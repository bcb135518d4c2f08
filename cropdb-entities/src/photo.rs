use crate::{id::*, time::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: Id,
    pub title: String,
    pub url: String,
    pub created_at: Timestamp,
}
