#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # restodb-entities
//!
//! Reusable, agnostic domain entities for RestoDB.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod email;
pub mod geo;
pub mod group;
pub mod id;
pub mod password;
pub mod rating;
pub mod rejection_message;
pub mod report;
pub mod restaurant;
pub mod restaurant_request;
pub mod review;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
