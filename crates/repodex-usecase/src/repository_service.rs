//! RepositoryService - The five operations on the collection
//!
//! ```text
//! list    ── filter ──────────────────────────────▶ store.list / find_matching
//! create  ── check_url ─ check_required_fields ───▶ store.insert
//! update  ── check_url ─ likes guard ─────────────▶ store.replace / store.exists
//! delete  ───────────────────────────────────────▶ store.remove
//! like    ───────────────────────────────────────▶ store.like
//! ```
//!
//! Identifier format is checked by the inbound adapter before any of these run.

use repodex_domain::{IdGenerator, Repository, RepositoryFilter, RepositoryId, RepositoryStore};

use crate::command::{CreateRepository, RequestedLikes, UpdateOutcome, UpdateRepository};
use crate::error::{Result, ServiceError};
use crate::validation::{check_required_fields, check_url};

/// Application service over a repository store
#[derive(Debug, Clone)]
pub struct RepositoryService<S, G> {
    store: S,
    ids: G,
}

impl<S, G> RepositoryService<S, G>
where
    S: RepositoryStore,
    G: IdGenerator,
{
    pub fn new(store: S, ids: G) -> Self {
        Self { store, ids }
    }

    /// List repositories, in insertion order
    pub fn list(&self, filter: &RepositoryFilter) -> Result<Vec<Repository>> {
        if filter.is_empty() {
            return Ok(self.store.list()?);
        }
        Ok(self.store.find_matching(filter)?)
    }

    /// Create a repository and append it to the collection
    pub fn create(&self, command: CreateRepository) -> Result<Repository> {
        check_url(command.url.as_deref())?;
        check_required_fields(command.title.as_deref(), command.url.as_deref())?;

        let repository = Repository::new(
            self.ids.generate(),
            command.title,
            command.url,
            command.techs,
        );
        self.store.insert(repository.clone())?;
        Ok(repository)
    }

    /// Replace a repository with the fields of `command`
    ///
    /// A non-negative `likes` in the request leaves the record untouched
    /// and yields [`UpdateOutcome::LikesGuarded`]. Either way an unknown id
    /// is `NotFound`, decided by a single store call.
    pub fn update(&self, id: &RepositoryId, command: UpdateRepository) -> Result<UpdateOutcome> {
        check_url(command.url.as_deref())?;

        if command.likes == RequestedLikes::NonNegative {
            if !self.store.exists(id)? {
                return Err(ServiceError::NotFound {
                    id: id.as_str().to_string(),
                });
            }
            return Ok(UpdateOutcome::LikesGuarded);
        }

        let replacement = Repository::replacement(
            id.clone(),
            command.title,
            command.url,
            command.techs,
            command.likes.stored_value(),
        );
        let replaced = self.store.replace(replacement)?;
        Ok(UpdateOutcome::Replaced(replaced))
    }

    /// Remove a repository from the collection
    pub fn delete(&self, id: &RepositoryId) -> Result<Repository> {
        Ok(self.store.remove(id)?)
    }

    /// Add one like, returning the new count
    pub fn like(&self, id: &RepositoryId) -> Result<f64> {
        Ok(self.store.like(id)?)
    }
}
