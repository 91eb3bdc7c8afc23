//! Response types for the Repodex HTTP API.

use repodex_domain::Repository;
use serde::Serialize;
use serde_json::Number;

/// Largest magnitude at which every integer is exactly representable in an `f64`
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Render a like count the way a JSON client sent or expects it
///
/// Whole values come out as integers (`3`, not `3.0`). Non-finite values
/// have no JSON form and are dropped.
pub fn likes_number(likes: f64) -> Option<Number> {
    if likes.fract() == 0.0 && likes.abs() <= MAX_EXACT_INTEGER {
        return Some(Number::from(likes as i64));
    }
    Number::from_f64(likes)
}

/// JSON shape of a repository record
///
/// Fields cleared by an update are left out rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub techs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<Number>,
}

impl From<&Repository> for RepositoryResponse {
    fn from(repository: &Repository) -> Self {
        Self {
            id: repository.id().as_str().to_string(),
            title: repository.title().map(str::to_string),
            url: repository.url().map(str::to_string),
            techs: repository.techs().map(<[String]>::to_vec),
            likes: repository.likes().and_then(likes_number),
        }
    }
}

/// Body of a like, and of an update blocked by `likes`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikesResponse {
    pub likes: Option<Number>,
}

impl LikesResponse {
    pub fn new(likes: f64) -> Self {
        Self {
            likes: likes_number(likes),
        }
    }
}
