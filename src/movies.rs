/*
In-memory movie collection operations.
Module is independent from HTTP / Axum so the semantics can be unit tested.
*/

use chrono::Utc;

use crate::models::Movie;

/// Appends a new movie. The id is the current epoch-millisecond timestamp;
/// two creates in the same millisecond can collide, which is accepted.
/// An absent or empty genre falls back to "N/A".
pub fn add_movie(movies: &mut Vec<Movie>, name: String, genre: Option<String>) -> Movie {
    let movie = Movie {
        id: Utc::now().timestamp_millis(),
        name,
        genre: genre
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| "N/A".to_string()),
    };
    movies.push(movie.clone());
    movie
}

/// Renames the movie with the given id. An absent or empty name leaves the
/// stored name untouched; other fields are never modified.
pub fn rename_movie(movies: &mut [Movie], id: i64, name: Option<String>) -> Option<Movie> {
    let movie = movies.iter_mut().find(|m| m.id == id)?;
    if let Some(name) = name.filter(|n| !n.is_empty()) {
        movie.name = name;
    }
    Some(movie.clone())
}

/// Removes every movie whose id matches (exactly one in practice, since ids
/// are unique). Returns false when no movie has that id.
pub fn remove_movie(movies: &mut Vec<Movie>, id: i64) -> bool {
    if !movies.iter().any(|m| m.id == id) {
        return false;
    }
    movies.retain(|m| m.id != id);
    true
}
