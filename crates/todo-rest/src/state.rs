//! Application state for Axum handlers.

use std::sync::Arc;
use todo_repository::TodoRepository;

/// Shared application state.
///
/// Holds no per-request mutable data; the repository (and through it the
/// connection pool) is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(todos: Arc<dyn TodoRepository>) -> Self {
        Self { todos }
    }
}
