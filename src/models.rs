use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64, // epoch milliseconds at creation time
    pub name: String,
    pub genre: String,
}

/// Root document persisted by the movies service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviesDb {
    pub movies: Vec<Movie>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub completed: bool,
    pub priority: String, // free-form, defaults to "medium"
}

/// Root document persisted by the tasks service. Defaults to an empty
/// collection so a missing or broken data file reads as `{ "tasks": [] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TasksDb {
    pub tasks: Vec<Task>,
}
