//! # Repodex Domain Layer
//!
//! Repository records and the ports used to store them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Repository entity, id, list filter            ││
//! │  │  repository/- Port traits (RepositoryStore, IdGenerator)    ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This crate has no external dependencies. Identifier formats, JSON and
//! HTTP are adapter concerns.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    filter::RepositoryFilter,
    repository::{Repository, RepositoryId},
};

pub use repository::{
    id_generator::IdGenerator,
    repository_store::{RepositoryStore, StoreError},
};
