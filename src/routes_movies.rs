// --------------------------------------------------
// Handles API endpoints for the movies service.
//
// Responsibilities:
// - List / create / rename / delete movies
// - Every handler reloads the document from disk and, for
//   mutations, rewrites it in full before responding
//
// Errors are plain text; a load or save failure fails the
// request (there is no resilient fallback on this variant).
// --------------------------------------------------

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;
use crate::models::MoviesDb;
use crate::movies;

#[derive(Debug, Deserialize)]
pub struct CreateMovieInput {
    pub name: String,
    pub genre: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMovieInput {
    pub name: Option<String>,
}

// -----------------------------
// GET /movies
// -----------------------------
pub async fn list_movies(State(state): State<AppState<MoviesDb>>) -> impl IntoResponse {
    let db = match state.store.load() {
        Ok(db) => db,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "failed to load db").into_response(),
    };
    Json(db.movies).into_response()
}

// -----------------------------
// POST /movies
// Creates a movie with an epoch-millisecond id
// -----------------------------
pub async fn create_movie(
    State(state): State<AppState<MoviesDb>>,
    Json(input): Json<CreateMovieInput>,
) -> impl IntoResponse {
    let mut db = match state.store.load() {
        Ok(db) => db,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "failed to load db").into_response(),
    };

    let movie = movies::add_movie(&mut db.movies, input.name, input.genre);

    if state.store.save(&db).is_err() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "failed to save db").into_response();
    }

    (StatusCode::CREATED, Json(movie)).into_response()
}

// -----------------------------
// PUT /movies/:id
// Renames a movie; an absent name keeps the stored one
// -----------------------------
pub async fn update_movie(
    State(state): State<AppState<MoviesDb>>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateMovieInput>,
) -> impl IntoResponse {
    let mut db = match state.store.load() {
        Ok(db) => db,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "failed to load db").into_response(),
    };

    let Some(movie) = movies::rename_movie(&mut db.movies, id, input.name) else {
        return (StatusCode::NOT_FOUND, "Movie not found").into_response();
    };

    if state.store.save(&db).is_err() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "failed to save db").into_response();
    }

    Json(movie).into_response()
}

// -----------------------------
// DELETE /movies/:id
// -----------------------------
pub async fn delete_movie(
    State(state): State<AppState<MoviesDb>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let mut db = match state.store.load() {
        Ok(db) => db,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "failed to load db").into_response(),
    };

    if !movies::remove_movie(&mut db.movies, id) {
        return (StatusCode::NOT_FOUND, "Movie not found").into_response();
    }

    if state.store.save(&db).is_err() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "failed to save db").into_response();
    }

    Json(json!({ "success": true })).into_response()
}
