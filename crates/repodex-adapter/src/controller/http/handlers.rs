//! HTTP route handlers for the Repodex server.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use repodex_domain::RepositoryId;
use repodex_usecase::{RepositoryService, UpdateOutcome};

use super::error::ApiError;
use super::request::{CreateBody, JsonBody, ListParams, UpdateBody};
use super::response::{LikesResponse, RepositoryResponse};
use crate::gateway::uuid_generator::UuidGenerator;
use crate::repository::in_memory::InMemoryRepositoryStore;

/// The service wired with the in-memory store and UUID ids.
pub type Repositories = RepositoryService<InMemoryRepositoryStore, UuidGenerator>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub repositories: Arc<Repositories>,
}

impl AppState {
    pub fn new(repositories: Repositories) -> Self {
        Self {
            repositories: Arc::new(repositories),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RepositoryService::new(
            InMemoryRepositoryStore::new(),
            UuidGenerator::new(),
        ))
    }
}

/// Handle GET /repositories
///
/// Optional `title` (substring) and `techs` (exact tag) filters.
pub async fn handle_list(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<RepositoryResponse>>, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::MalformedQuery(e.body_text()))?;
    let filter = ListParams::from_pairs(pairs).filter();
    let repositories = state.repositories.list(&filter)?;

    tracing::debug!(
        title = ?filter.title(),
        tech = ?filter.tech(),
        count = repositories.len(),
        "Listed repositories"
    );

    Ok(Json(
        repositories.iter().map(RepositoryResponse::from).collect(),
    ))
}

/// Handle POST /repositories
///
/// Answers 200 (not 201) with the created record.
pub async fn handle_create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateBody>,
) -> Result<Json<RepositoryResponse>, ApiError> {
    let repository = state.repositories.create(body.into())?;

    tracing::info!(id = %repository.id(), "Created repository");
    Ok(Json(RepositoryResponse::from(&repository)))
}

/// Handle PUT /repositories/{id}
///
/// Replaces the record, or answers `{ "likes": 0 }` without touching it
/// when the body carries a non-negative `likes`.
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateBody>,
) -> Result<Response, ApiError> {
    let id = RepositoryId::new(id);

    match state.repositories.update(&id, body.into())? {
        UpdateOutcome::Replaced(repository) => {
            tracing::info!(id = %id, "Replaced repository");
            Ok(Json(RepositoryResponse::from(&repository)).into_response())
        }
        UpdateOutcome::LikesGuarded => {
            tracing::debug!(id = %id, "Update carried likes, record left unchanged");
            Ok(Json(LikesResponse::new(0.0)).into_response())
        }
    }
}

/// Handle DELETE /repositories/{id}
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = RepositoryId::new(id);
    state.repositories.delete(&id)?;

    tracing::info!(id = %id, "Deleted repository");
    Ok(StatusCode::NO_CONTENT)
}

/// Handle POST /repositories/{id}/like
pub async fn handle_like(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LikesResponse>, ApiError> {
    let id = RepositoryId::new(id);
    let likes = state.repositories.like(&id)?;

    tracing::debug!(id = %id, likes, "Liked repository");
    Ok(Json(LikesResponse::new(likes)))
}

/// Fallback for paths and methods with no route.
pub async fn handle_not_found() -> ApiError {
    ApiError::RouteNotFound
}
