//! Todo CRUD controller.
//!
//! Binds each route to exactly one repository call. Path ids are parsed by
//! hand so that a non-integer segment yields 400 with the API's error payload
//! before any persistence call; body decode failures are mapped to 400 the
//! same way (never Axum's default 422).

use crate::{
    responses::{created, ok, ApiResult, AppError, MessageResponse},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use todo_core::{Todo, TodoError};
use tracing::debug;

/// Creates the todo router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/:id", get(get_todo).put(update_todo).delete(delete_todo))
}

/// List all todos.
async fn list_todos(State(state): State<AppState>) -> ApiResult<Vec<Todo>> {
    debug!("List todos request");

    let todos = state.todos.get_all().await?;
    ok(todos)
}

/// Get a todo by id.
///
/// A missing row surfaces as 500, not 404; only a malformed id yields 400.
async fn get_todo(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Todo> {
    debug!("Get todo request: {}", id);

    let id = parse_todo_id(&id)?;
    let todo = state.todos.get_by_id(id).await?;
    ok(todo)
}

/// Create a new todo.
async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<Todo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let Json(todo) = body.map_err(decode_error)?;
    debug!("Create todo request: {}", todo.title);

    let todo = state.todos.create(todo).await?;
    Ok(created(todo))
}

/// Update an existing todo.
///
/// The path id is validated before the body is decoded. The response echoes
/// the submitted todo without re-fetching, so it does not reflect whether a
/// row actually existed.
async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Todo>, JsonRejection>,
) -> ApiResult<Todo> {
    debug!("Update todo request: {}", id);

    let id = parse_todo_id(&id)?;
    let Json(todo) = body.map_err(decode_error)?;

    state.todos.update(id, &todo).await?;
    ok(todo)
}

/// Delete a todo.
async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    debug!("Delete todo request: {}", id);

    let id = parse_todo_id(&id)?;
    state.todos.delete(id).await?;
    ok(MessageResponse::new("Todo deleted"))
}

/// Parses a todo id from a path parameter.
fn parse_todo_id(id: &str) -> Result<i64, AppError> {
    id.parse()
        .map_err(|_| AppError(TodoError::validation("invalid todo ID")))
}

/// Maps a body decode failure to a 400 validation error.
fn decode_error(rejection: JsonRejection) -> AppError {
    AppError(TodoError::Validation(rejection.body_text()))
}
