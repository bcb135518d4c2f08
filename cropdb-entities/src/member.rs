use crate::id::Id;

/// The minimal view of a community member as referenced by crops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: Id,
    pub login_name: String,
}

impl Member {
    pub fn new(login_name: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            login_name: login_name.into(),
        }
    }
}
