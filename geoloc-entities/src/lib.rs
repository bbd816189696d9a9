#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # geoloc-entities
//!
//! Reusable, agnostic domain entities for GeoLocDB.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod geo;
pub mod id;
pub mod location;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
