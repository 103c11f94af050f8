use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::json;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::auth::jwt::AuthUser;
use crate::state::AppState;

use super::dto::DirectorPayload;
use super::repo::{self, Director};

type ApiError = (StatusCode, Json<serde_json::Value>);

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/directors", get(list_directors))
        .route("/directors/:id", get(get_director))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/directors", post(create_director))
        .route(
            "/directors/:id",
            put(update_director).delete(delete_director),
        )
}

#[instrument(skip(state))]
pub async fn list_directors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Director>>, ApiError> {
    let directors = repo::list_all(&state.db).await.map_err(internal)?;
    Ok(Json(directors))
}

#[instrument(skip(state))]
pub async fn get_director(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Director>, ApiError> {
    match repo::get_by_id(&state.db, id).await.map_err(internal)? {
        Some(director) => Ok(Json(director)),
        None => Err(not_found()),
    }
}

#[instrument(skip(state, payload))]
pub async fn create_director(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<DirectorPayload>,
) -> Result<(StatusCode, Json<Director>), ApiError> {
    let name = match payload.name.as_deref().map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => return Err(bad_request("Name is required")),
    };
    let Some(birth_year) = payload.birth_year else {
        return Err(bad_request("Birth year is required"));
    };
    let Some(nationality) = payload.nationality.filter(|n| !n.trim().is_empty()) else {
        return Err(bad_request("Nationality is required"));
    };

    let director = repo::create(&state.db, &name, birth_year, &nationality)
        .await
        .map_err(internal)?;

    info!(user_id = %user_id, director_id = %director.id, "director created");
    Ok((StatusCode::CREATED, Json(director)))
}

#[instrument(skip(state, payload))]
pub async fn update_director(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<DirectorPayload>,
) -> Result<Json<Director>, ApiError> {
    match repo::update_by_id(&state.db, id, &payload)
        .await
        .map_err(internal)?
    {
        Some(director) => {
            info!(user_id = %user_id, director_id = %id, "director updated");
            Ok(Json(director))
        }
        None => Err(not_found()),
    }
}

#[instrument(skip(state))]
pub async fn delete_director(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !repo::delete_by_id(&state.db, id).await.map_err(internal)? {
        return Err(not_found());
    }
    info!(user_id = %user_id, director_id = %id, "director deleted");
    Ok(Json(json!({ "message": "Director deleted successfully" })))
}

fn not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Director not found" })),
    )
}

fn bad_request(msg: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg })))
}

fn internal(e: anyhow::Error) -> ApiError {
    error!(error = %e, "director repository failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
}
