//! Request types for the Repodex HTTP API.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use repodex_domain::RepositoryFilter;
use repodex_usecase::{CreateRepository, RequestedLikes, UpdateRepository};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::ApiError;

/// JSON body extractor that tolerates a missing body and `Content-Type`.
///
/// An empty body deserializes as `T::default()`. Anything else must be
/// valid JSON for `T`, or the request is rejected with a 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedBody(e.body_text()))?;
        parse_body(&bytes).map(JsonBody)
    }
}

fn parse_body<T>(bytes: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(bytes).map_err(|e| ApiError::MalformedBody(e.to_string()))
}

/// Query parameters for GET /repositories
///
/// Built from the raw key/value pairs so that a repeated key never fails
/// the request: the last occurrence wins. Unknown keys are ignored.
#[derive(Debug, Default)]
pub struct ListParams {
    pub title: Option<String>,
    pub techs: Option<String>,
}

impl ListParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "title" => params.title = Some(value),
                "techs" => params.techs = Some(value),
                _ => {}
            }
        }
        params
    }

    pub fn filter(&self) -> RepositoryFilter {
        let mut filter = RepositoryFilter::new();
        if let Some(title) = &self.title {
            filter = filter.with_title(title.as_str());
        }
        if let Some(tech) = &self.techs {
            filter = filter.with_tech(tech.as_str());
        }
        filter
    }
}

/// Body of POST /repositories
#[derive(Debug, Default, Deserialize)]
pub struct CreateBody {
    pub title: Option<String>,
    pub url: Option<String>,
    pub techs: Option<Vec<String>>,
}

impl From<CreateBody> for CreateRepository {
    fn from(body: CreateBody) -> Self {
        Self {
            title: body.title,
            url: body.url,
            techs: body.techs,
        }
    }
}

/// Body of PUT /repositories/{id}
///
/// `likes` is kept as raw JSON: any number >= 0 blocks the update, a
/// negative number is stored as sent, anything else is dropped.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBody {
    pub title: Option<String>,
    pub url: Option<String>,
    pub techs: Option<Vec<String>>,
    pub likes: Option<serde_json::Value>,
}

fn requested_likes(likes: Option<&serde_json::Value>) -> RequestedLikes {
    let Some(serde_json::Value::Number(number)) = likes else {
        return RequestedLikes::Absent;
    };
    match number.as_f64() {
        Some(n) if n >= 0.0 => RequestedLikes::NonNegative,
        Some(n) => RequestedLikes::Negative(n),
        None => RequestedLikes::Absent,
    }
}

impl From<UpdateBody> for UpdateRepository {
    fn from(body: UpdateBody) -> Self {
        Self {
            likes: requested_likes(body.likes.as_ref()),
            title: body.title,
            url: body.url,
            techs: body.techs,
        }
    }
}
