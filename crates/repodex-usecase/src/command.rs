//! Inputs and outputs of the repository operations

use repodex_domain::Repository;

/// Fields accepted when creating a repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRepository {
    pub title: Option<String>,
    pub url: Option<String>,
    pub techs: Option<Vec<String>>,
}

/// What the caller sent as `likes` in an update
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum RequestedLikes {
    /// Missing, or not a number
    #[default]
    Absent,
    /// A number >= 0
    NonNegative,
    /// A negative number, stored as sent
    Negative(f64),
}

impl RequestedLikes {
    /// The value that ends up on the replacement record
    pub fn stored_value(self) -> Option<f64> {
        match self {
            RequestedLikes::Negative(likes) => Some(likes),
            RequestedLikes::Absent | RequestedLikes::NonNegative => None,
        }
    }
}

/// Fields accepted when updating a repository
///
/// These replace the stored record wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateRepository {
    pub title: Option<String>,
    pub url: Option<String>,
    pub techs: Option<Vec<String>>,
    pub likes: RequestedLikes,
}

/// Result of an update request
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The record was replaced
    Replaced(Repository),
    /// A non-negative `likes` was sent; nothing was written
    LikesGuarded,
}
