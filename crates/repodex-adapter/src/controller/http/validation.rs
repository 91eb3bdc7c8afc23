//! Identifier-format gate for paths carrying a repository id.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use super::error::ApiError;

const COLLECTION_PREFIX: &str = "/repositories/";

/// Check that `id` is a hyphenated UUID.
///
/// Any version and variant is accepted; braced, URN and unhyphenated forms are not.
pub fn is_repository_id(id: &str) -> bool {
    id.len() == 36 && Uuid::try_parse(id).is_ok()
}

/// The `{id}` segment of `/repositories/{id}` and every path below it.
///
/// The segment is taken as it appears on the wire, without percent-decoding.
/// `/repositories` and `/repositories/` carry no id.
pub fn id_segment(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(COLLECTION_PREFIX)?;
    let segment = rest.split('/').next().unwrap_or(rest);
    (!segment.is_empty()).then_some(segment)
}

/// Middleware rejecting any request under `/repositories/{id}` whose id is
/// not a UUID, matched route or not.
///
/// Runs before routing, so neither handlers nor the fallback see a bad id,
/// and before the body is read.
pub async fn validate_id(request: Request, next: Next) -> Result<Response, ApiError> {
    if let Some(id) = id_segment(request.uri().path()) {
        if !is_repository_id(id) {
            tracing::debug!(id = %id, "Rejected malformed repository id");
            return Err(ApiError::InvalidId);
        }
    }
    Ok(next.run(request).await)
}
