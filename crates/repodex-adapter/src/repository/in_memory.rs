//! In-Memory Repository Store
//!
//! Keeps the collection in a `Vec`, in insertion order, for the lifetime of
//! the process. Nothing is persisted.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use repodex_domain::model::repository::{Repository, RepositoryId};
use repodex_domain::repository::repository_store::{RepositoryStore, StoreError};

/// In-memory Repository Store
///
/// Thread-safe implementation using RwLock. Clones share the same
/// collection, so one store can be handed to every request handler.
/// Lookups by id are linear scans.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepositoryStore {
    repositories: Arc<RwLock<Vec<Repository>>>,
}

impl InMemoryRepositoryStore {
    pub fn new() -> Self {
        Self {
            repositories: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Repository>>, StoreError> {
        self.repositories
            .read()
            .map_err(|_| StoreError::PersistenceError {
                message: "Failed to acquire read lock".to_string(),
            })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Repository>>, StoreError> {
        self.repositories
            .write()
            .map_err(|_| StoreError::PersistenceError {
                message: "Failed to acquire write lock".to_string(),
            })
    }
}

fn position_of(repositories: &[Repository], id: &RepositoryId) -> Result<usize, StoreError> {
    repositories
        .iter()
        .position(|r| r.id() == id)
        .ok_or_else(|| StoreError::NotFound {
            id: id.as_str().to_string(),
        })
}

impl RepositoryStore for InMemoryRepositoryStore {
    fn list(&self) -> Result<Vec<Repository>, StoreError> {
        Ok(self.read()?.clone())
    }

    fn find_by_id(&self, id: &RepositoryId) -> Result<Option<Repository>, StoreError> {
        let repositories = self.read()?;
        Ok(repositories.iter().find(|r| r.id() == id).cloned())
    }

    fn insert(&self, repository: Repository) -> Result<(), StoreError> {
        self.write()?.push(repository);
        Ok(())
    }

    fn replace(&self, repository: Repository) -> Result<Repository, StoreError> {
        let mut repositories = self.write()?;
        let index = position_of(&repositories, repository.id())?;
        repositories[index] = repository.clone();
        Ok(repository)
    }

    fn remove(&self, id: &RepositoryId) -> Result<Repository, StoreError> {
        let mut repositories = self.write()?;
        let index = position_of(&repositories, id)?;
        Ok(repositories.remove(index))
    }

    fn like(&self, id: &RepositoryId) -> Result<f64, StoreError> {
        let mut repositories = self.write()?;
        let index = position_of(&repositories, id)?;
        Ok(repositories[index].like())
    }
}
