//! IdGenerator - Where new repository ids come from

use crate::model::repository::RepositoryId;

/// Produces a fresh identifier for every created repository.
///
/// Implementations must not hand out the same id twice.
pub trait IdGenerator {
    fn generate(&self) -> RepositoryId;
}
