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

use super::dto::{MovieDetails, MoviePayload};
use super::repo;

type ApiError = (StatusCode, Json<serde_json::Value>);

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/:id", get(get_movie))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", post(create_movie))
        .route("/movies/:id", put(update_movie).delete(delete_movie))
}

#[instrument(skip(state))]
pub async fn list_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieDetails>>, ApiError> {
    let movies = repo::list_all(&state.db).await.map_err(internal)?;
    Ok(Json(movies))
}

#[instrument(skip(state))]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MovieDetails>, ApiError> {
    match repo::get_by_id(&state.db, id).await.map_err(internal)? {
        Some(movie) => Ok(Json(movie)),
        None => Err(not_found()),
    }
}

#[instrument(skip(state, payload))]
pub async fn create_movie(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<MoviePayload>,
) -> Result<(StatusCode, Json<MovieDetails>), ApiError> {
    let title = match payload.title.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => return Err(bad_request("Title is required")),
    };
    let Some(genre) = payload.genre.filter(|g| !g.trim().is_empty()) else {
        return Err(bad_request("Genre is required"));
    };
    let Some(release_year) = payload.release_year else {
        return Err(bad_request("Release year is required"));
    };

    let movie = repo::create(&state.db, &title, &genre, release_year, payload.director)
        .await
        .map_err(internal)?;

    info!(user_id = %user_id, movie_id = %movie.id, "movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

#[instrument(skip(state, payload))]
pub async fn update_movie(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<MoviePayload>,
) -> Result<Json<MovieDetails>, ApiError> {
    match repo::update_by_id(&state.db, id, &payload)
        .await
        .map_err(internal)?
    {
        Some(movie) => {
            info!(user_id = %user_id, movie_id = %id, "movie updated");
            Ok(Json(movie))
        }
        None => Err(not_found()),
    }
}

#[instrument(skip(state))]
pub async fn delete_movie(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !repo::delete_by_id(&state.db, id).await.map_err(internal)? {
        return Err(not_found());
    }
    info!(user_id = %user_id, movie_id = %id, "movie deleted");
    Ok(Json(json!({ "message": "Movie deleted successfully" })))
}

fn not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Movie not found" })),
    )
}

fn bad_request(msg: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg })))
}

fn internal(e: anyhow::Error) -> ApiError {
    error!(error = %e, "movie repository failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
}
