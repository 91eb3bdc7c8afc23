//! # Repodex Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//! it owns the five repository operations and the request rules that guard them.

pub use repodex_domain;

pub mod command;
pub mod error;
pub mod repository_service;
pub mod validation;

pub use command::{CreateRepository, RequestedLikes, UpdateOutcome, UpdateRepository};
pub use error::ServiceError;
pub use repository_service::RepositoryService;
