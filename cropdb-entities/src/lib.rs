//#![deny(missing_docs)] // TODO: Complete missing documentation and enable this option
#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # cropdb-entities
//!
//! Reusable, agnostic domain entities of the crop database.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod approval;
pub mod crop;
pub mod harvest;
pub mod id;
pub mod member;
pub mod photo;
pub mod planting;
pub mod time;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
