//! HTTP request handlers

use crate::api::models::{
    CreateMonsterRequest, HealthResponse, MonsterListResponse, MonsterResponse,
    UpdateMonsterRequest,
};
use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, Method, StatusCode, Uri},
    Json,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Path id as extracted by axum; a rejected segment (e.g. invalid UTF-8) is kept
/// so it can be reported as an unknown monster.
type IdPath = std::result::Result<Path<String>, PathRejection>;

/// Parse a path identifier. Anything that is not an integer names no monster.
fn parse_id(raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| AppError::monster_not_found(raw))
}

fn extract_id(path: IdPath) -> Result<i64> {
    match path {
        Ok(Path(raw)) => parse_id(&raw),
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "Unreadable monster id");
            Err(AppError::NotFound("Monster not found".to_string()))
        }
    }
}

/// Fallback for paths no route matches
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for '{}'", uri.path()))
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} is not allowed on '{}'", method, uri.path()))
}

/// List all monsters
#[utoipa::path(
    get,
    path = "/api/v1/monsters",
    tag = "Monsters",
    responses(
        (status = 200, description = "All stored monsters", body = MonsterListResponse),
        (status = 500, description = "Store failure", body = crate::api::models::ErrorResponse),
    )
)]
pub async fn list_monsters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MonsterListResponse>> {
    let store = state.store.clone();
    let monsters = state.cache.get_or_load(|| async move { store.list().await }).await?;

    Ok(Json(MonsterListResponse {
        monsters: monsters.as_ref().clone(),
    }))
}

/// Fetch a single monster
#[utoipa::path(
    get,
    path = "/api/v1/monsters/{id}",
    tag = "Monsters",
    params(("id" = i64, Path, description = "Monster identifier")),
    responses(
        (status = 200, description = "The monster", body = MonsterResponse),
        (status = 404, description = "Unknown or malformed identifier", body = crate::api::models::ErrorResponse),
    )
)]
pub async fn get_monster(
    State(state): State<Arc<AppState>>,
    path: IdPath,
) -> Result<Json<MonsterResponse>> {
    let id = extract_id(path)?;

    let monster = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::monster_not_found(id))?;

    Ok(Json(MonsterResponse { monster }))
}

/// Create a monster
#[utoipa::path(
    post,
    path = "/api/v1/monsters",
    tag = "Monsters",
    request_body = CreateMonsterRequest,
    responses(
        (status = 201, description = "Monster created", body = MonsterResponse),
        (status = 400, description = "Malformed JSON", body = crate::api::models::ErrorResponse),
        (status = 422, description = "Missing or invalid fields", body = crate::api::models::ErrorResponse),
    )
)]
pub async fn create_monster(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateMonsterRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<MonsterResponse>)> {
    let Json(request) = payload?;
    let new_monster = request.into_new_monster()?;

    let monster = state.store.create(new_monster).await?;
    state.cache.invalidate();

    info!(id = monster.id, name = %monster.name, level = monster.level, "Created monster");

    let location = format!("/api/v1/monsters/{}", monster.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(MonsterResponse { monster }),
    ))
}

/// Update some fields of a monster
#[utoipa::path(
    put,
    path = "/api/v1/monsters/{id}",
    tag = "Monsters",
    params(("id" = i64, Path, description = "Monster identifier")),
    request_body = UpdateMonsterRequest,
    responses(
        (status = 204, description = "Monster updated"),
        (status = 404, description = "Unknown or malformed identifier", body = crate::api::models::ErrorResponse),
        (status = 422, description = "No valid fields to change", body = crate::api::models::ErrorResponse),
    )
)]
pub async fn update_monster(
    State(state): State<Arc<AppState>>,
    path: IdPath,
    payload: std::result::Result<Json<UpdateMonsterRequest>, JsonRejection>,
) -> Result<StatusCode> {
    let id = extract_id(path)?;
    let Json(request) = payload?;
    let changes = request.into_changes()?;

    state.store.update(id, changes).await?;
    state.cache.invalidate();

    info!(id, "Updated monster");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a monster
#[utoipa::path(
    delete,
    path = "/api/v1/monsters/{id}",
    tag = "Monsters",
    params(("id" = i64, Path, description = "Monster identifier")),
    responses(
        (status = 204, description = "Monster deleted"),
        (status = 404, description = "Unknown or malformed identifier", body = crate::api::models::ErrorResponse),
    )
)]
pub async fn delete_monster(
    State(state): State<Arc<AppState>>,
    path: IdPath,
) -> Result<StatusCode> {
    let id = extract_id(path)?;

    state.store.delete(id).await?;
    state.cache.invalidate();

    info!(id, "Deleted monster");
    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are up", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse),
    )
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "up"),
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "down")
        }
    };

    let body = HealthResponse {
        status: if status == StatusCode::OK { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    };

    (status, Json(body))
}
