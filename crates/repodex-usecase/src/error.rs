//! Error types for repository operations

use repodex_domain::StoreError;
use thiserror::Error;

/// Why a repository operation was refused or failed
///
/// The display strings of the client-facing variants are the exact
/// messages returned over HTTP.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid url format")]
    InvalidUrl,

    #[error("Fields \"title\" and \"url\" are required!")]
    MissingRequiredFields,

    #[error("No repositories found with this id")]
    NotFound { id: String },

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ServiceError::NotFound { id },
            other => ServiceError::Store(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
