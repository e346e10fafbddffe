// Define data modules
pub mod models; // Data structures (Movie, Task, document roots)
pub mod store; // Persistent storage (load/save the JSON data file)
pub mod movies; // In-memory movie collection operations
pub mod tasks; // In-memory task collection operations
pub mod routes_demo; // Demo endpoints (root, hello, time, status)
pub mod routes_movies; // HTTP handlers for the movies API
pub mod routes_tasks; // HTTP handlers for the tasks API

use std::time::Instant;

use axum::{
    Router,
    routing::{get, put},
};

use crate::models::{MoviesDb, TasksDb};
use crate::store::JsonStore;

/// Shared per-service state, passed to handlers through axum's `State`
/// extractor. Holds the flat-file store and the process start time used
/// by the status endpoint.
#[derive(Clone)]
pub struct AppState<D> {
    pub store: JsonStore<D>,
    pub started: Instant,
}

impl<D> AppState<D> {
    pub fn new(store: JsonStore<D>) -> Self {
        Self {
            store,
            started: Instant::now(),
        }
    }
}

/// Router for the movies service (variant A: text demo routes, text errors).
pub fn movies_app(state: AppState<MoviesDb>) -> Router {
    Router::new()
        .route("/", get(routes_demo::root))
        .route("/hello", get(routes_demo::hello))
        .route("/time", get(routes_demo::time_text))
        .route("/status", get(routes_demo::status::<MoviesDb>))
        .route(
            "/movies",
            get(routes_movies::list_movies).post(routes_movies::create_movie),
        )
        .route(
            "/movies/:id",
            put(routes_movies::update_movie).delete(routes_movies::delete_movie),
        )
        .with_state(state)
}

/// Router for the tasks service (variant B: JSON demo routes, JSON errors).
pub fn tasks_app(state: AppState<TasksDb>) -> Router {
    Router::new()
        .route("/", get(routes_demo::root))
        .route("/hello", get(routes_demo::hello))
        .route("/time", get(routes_demo::time_json))
        .route("/status", get(routes_demo::status_detailed::<TasksDb>))
        .route(
            "/tasks",
            get(routes_tasks::list_tasks).post(routes_tasks::create_task),
        )
        .route(
            "/tasks/:id",
            get(routes_tasks::get_task)
                .put(routes_tasks::update_task)
                .delete(routes_tasks::delete_task),
        )
        .with_state(state)
}
