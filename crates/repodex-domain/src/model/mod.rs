//! Domain Models
//!
//! A repository record and the filter used to select records when listing.

pub mod filter;
pub mod repository;
