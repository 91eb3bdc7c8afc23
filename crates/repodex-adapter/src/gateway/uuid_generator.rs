//! Random UUID v4 repository ids

use repodex_domain::model::repository::RepositoryId;
use repodex_domain::repository::id_generator::IdGenerator;
use uuid::Uuid;

/// Generates hyphenated, lowercase UUID v4 ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> RepositoryId {
        RepositoryId::new(Uuid::new_v4().to_string())
    }
}
