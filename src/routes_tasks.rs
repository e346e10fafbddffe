// --------------------------------------------------
// Handles API endpoints for the tasks service.
//
// Responsibilities:
// - List / get / create / patch / delete tasks
// - Every handler reloads the document from disk and, for
//   mutations, rewrites it in full before responding
//
// Errors are JSON objects. Reads are resilient: a missing or
// broken data file is treated as an empty collection.
// --------------------------------------------------

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::AppState;
use crate::models::TasksDb;
use crate::tasks::{self, NewTask, TaskPatch};

// -----------------------------
// GET /tasks
// -----------------------------
pub async fn list_tasks(State(state): State<AppState<TasksDb>>) -> impl IntoResponse {
    let db = state.store.load_or_default();
    Json(db.tasks)
}

// -----------------------------
// GET /tasks/:id
// -----------------------------
pub async fn get_task(
    State(state): State<AppState<TasksDb>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let db = state.store.load_or_default();

    match tasks::find_task(&db.tasks, id) {
        Some(task) => Json(task.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "error": "Task not found" }))).into_response(),
    }
}

// -----------------------------
// POST /tasks
// Creates a task; name is required, the rest defaults
// -----------------------------
pub async fn create_task(
    State(state): State<AppState<TasksDb>>,
    Json(input): Json<NewTask>,
) -> impl IntoResponse {
    let mut db = state.store.load_or_default();

    let task = match tasks::add_task(&mut db.tasks, input) {
        Ok(task) => task,
        Err(msg) => {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response();
        }
    };

    if state.store.save(&db).is_err() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "failed to save db" })),
        )
            .into_response();
    }

    (StatusCode::CREATED, Json(task)).into_response()
}

// -----------------------------
// PUT /tasks/:id
// Partial update; only fields present in the body are applied
// -----------------------------
pub async fn update_task(
    State(state): State<AppState<TasksDb>>,
    Path(id): Path<i64>,
    Json(patch): Json<TaskPatch>,
) -> impl IntoResponse {
    let mut db = state.store.load_or_default();

    let Some(task) = tasks::update_task(&mut db.tasks, id, patch) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "Task not found" }))).into_response();
    };

    if state.store.save(&db).is_err() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "failed to save db" })),
        )
            .into_response();
    }

    Json(task).into_response()
}

// -----------------------------
// DELETE /tasks/:id
// -----------------------------
pub async fn delete_task(
    State(state): State<AppState<TasksDb>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let mut db = state.store.load_or_default();

    if !tasks::remove_task(&mut db.tasks, id) {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "Task not found" }))).into_response();
    }

    if state.store.save(&db).is_err() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "failed to save db" })),
        )
            .into_response();
    }

    Json(json!({ "success": true })).into_response()
}
