/*
In-memory task collection operations.
Module is independent from HTTP / Axum so the semantics can be unit tested.
*/

use serde::Deserialize;

use crate::models::Task;

#[derive(Debug, Deserialize)]
pub struct NewTask {
    pub name: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
}

/// Partial update. A field left out of the request body stays untouched;
/// a field that is present is applied even when it is `false` or empty.
#[derive(Debug, Deserialize)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
}

/// 1 + max(existing ids), or 1 for an empty collection.
pub fn next_task_id(tasks: &[Task]) -> i64 {
    tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}

/// Appends a new task. Fails when the name is absent or empty.
///
/// Defaults follow the falsy policy: on create, `completed: false` in the
/// body is indistinguishable from leaving the field out, and an empty
/// priority string falls back to "medium".
pub fn add_task(tasks: &mut Vec<Task>, input: NewTask) -> Result<Task, &'static str> {
    let Some(name) = input.name.filter(|n| !n.is_empty()) else {
        return Err("name is required");
    };

    let task = Task {
        id: next_task_id(tasks),
        name,
        description: input.description.unwrap_or_default(),
        completed: input.completed.unwrap_or(false),
        priority: input
            .priority
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "medium".to_string()),
    };
    tasks.push(task.clone());
    Ok(task)
}

pub fn find_task(tasks: &[Task], id: i64) -> Option<&Task> {
    tasks.iter().find(|t| t.id == id)
}

/// Applies a patch to the task with the given id. Unlike create, presence
/// wins here: a supplied `completed: false` or empty string is stored.
pub fn update_task(tasks: &mut [Task], id: i64, patch: TaskPatch) -> Option<Task> {
    let task = tasks.iter_mut().find(|t| t.id == id)?;

    if let Some(name) = patch.name {
        task.name = name;
    }
    if let Some(description) = patch.description {
        task.description = description;
    }
    if let Some(completed) = patch.completed {
        task.completed = completed;
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }

    Some(task.clone())
}

/// Removes the task at the matched index. Returns false when the id is
/// unknown.
pub fn remove_task(tasks: &mut Vec<Task>, id: i64) -> bool {
    match tasks.iter().position(|t| t.id == id) {
        Some(idx) => {
            tasks.remove(idx);
            true
        }
        None => false,
    }
}
