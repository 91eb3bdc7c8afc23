//! Repository Store - Abstract storage for the collection
//!
//! This trait defines what operations the domain needs.
//! Whether they are backed by memory or something else is not our concern here.

use crate::model::filter::RepositoryFilter;
use crate::model::repository::{Repository, RepositoryId};

/// Errors that can occur during store operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Repository not found
    NotFound { id: String },
    /// Backing storage failed
    PersistenceError { message: String },
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StoreError::NotFound { id } => {
                write!(f, "Repository not found: {}", id)
            }
            StoreError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Repository Store Trait
///
/// This is a PORT in hexagonal architecture.
/// The collection is ordered: `list` returns records in insertion order,
/// and `replace` keeps a record at its position.
///
/// Methods take `&self` because a single store is shared by every request
/// handler; each call must apply its change as one unit.
pub trait RepositoryStore {
    /// All repositories, in insertion order
    fn list(&self) -> Result<Vec<Repository>, StoreError>;

    /// Repositories that satisfy `filter`, in insertion order
    fn find_matching(&self, filter: &RepositoryFilter) -> Result<Vec<Repository>, StoreError> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect())
    }

    /// Find a repository by ID
    fn find_by_id(&self, id: &RepositoryId) -> Result<Option<Repository>, StoreError>;

    /// Check if a repository exists
    fn exists(&self, id: &RepositoryId) -> Result<bool, StoreError> {
        Ok(self.find_by_id(id)?.is_some())
    }

    /// Append a repository at the end of the collection
    fn insert(&self, repository: Repository) -> Result<(), StoreError>;

    /// Swap the stored record with the same id for `repository`
    ///
    /// Fails with `NotFound` if no such record exists.
    fn replace(&self, repository: Repository) -> Result<Repository, StoreError>;

    /// Remove a repository, returning it
    ///
    /// Fails with `NotFound` if no such record exists.
    fn remove(&self, id: &RepositoryId) -> Result<Repository, StoreError>;

    /// Add one like to a repository and return the new count
    ///
    /// Fails with `NotFound` if no such record exists.
    fn like(&self, id: &RepositoryId) -> Result<f64, StoreError>;
}
