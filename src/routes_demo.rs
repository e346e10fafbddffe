// --------------------------------------------------
// Demo endpoints shared by both services.
//
// Responsibilities:
// - Root banner and hello greeting
// - Current time (plain text for movies, JSON for tasks)
// - Health/status with process uptime
// --------------------------------------------------

use axum::{Json, extract::State, response::IntoResponse};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::AppState;

// GET /
pub async fn root() -> &'static str {
    "Server is running"
}

// GET /hello
pub async fn hello() -> impl IntoResponse {
    Json(json!({ "message": "Hello from server!" }))
}

// -----------------------------
// GET /time (movies variant)
// Bare ISO-8601 timestamp as text
// -----------------------------
pub async fn time_text() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// -----------------------------
// GET /time (tasks variant)
// ISO string plus epoch milliseconds
// -----------------------------
pub async fn time_json() -> impl IntoResponse {
    let now = Utc::now();
    Json(json!({
        "iso": now.to_rfc3339_opts(SecondsFormat::Millis, true),
        "epoch_ms": now.timestamp_millis(),
    }))
}

// -----------------------------
// GET /status (movies variant)
// -----------------------------
pub async fn status<D>(State(state): State<AppState<D>>) -> impl IntoResponse
where
    D: Clone + Send + Sync + 'static,
{
    Json(json!({
        "status": "OK",
        "uptime": state.started.elapsed().as_secs_f64(),
    }))
}

// -----------------------------
// GET /status (tasks variant, adds a human-readable message)
// -----------------------------
pub async fn status_detailed<D>(State(state): State<AppState<D>>) -> impl IntoResponse
where
    D: Clone + Send + Sync + 'static,
{
    Json(json!({
        "status": "OK",
        "uptime": state.started.elapsed().as_secs_f64(),
        "message": "Server is healthy",
    }))
}
