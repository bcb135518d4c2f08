// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use cropdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod crop;
mod crop_name;
mod harvest;
mod member;
mod mention;
mod photo;
mod plant_part;
mod planting;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_approval_status(status: ApprovalStatusPrimitive) -> Result<ApprovalStatus> {
    ApprovalStatus::try_from(status).map_err(|err| anyhow!(err).into())
}

// Stored enumerations are parsed leniently. Unknown
// values should never occur and are only logged.
fn load_enum<T>(column: &str, value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = value?;
    value
        .parse()
        .inspect_err(|_| {
            log::error!("Failed to load invalid {column}: '{value}'");
        })
        .ok()
}

fn load_id(id: Option<String>) -> Option<Id> {
    id.map(Id::from)
}
