//! PostgreSQL todo repository implementation.

use crate::{traits::TodoRepository, DatabasePool};
use async_trait::async_trait;
use sqlx::FromRow;
use std::sync::Arc;
use todo_core::{Todo, TodoError, TodoResult};
use tracing::debug;

/// PostgreSQL todo repository.
///
/// Each operation issues exactly one SQL statement against the shared pool.
/// No transactions span multiple statements and no locking happens in
/// process; per-statement atomicity is whatever PostgreSQL provides.
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: Arc<DatabasePool>,
}

impl PgTodoRepository {
    /// Creates a new PostgreSQL todo repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a todo.
#[derive(Debug, FromRow)]
struct TodoRow {
    id: i64,
    title: String,
    completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            completed: row.completed,
        }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepository {
    async fn get_all(&self) -> TodoResult<Vec<Todo>> {
        debug!("Fetching all todos");

        let rows = sqlx::query_as::<_, TodoRow>("SELECT id, title, completed FROM todos")
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> TodoResult<Todo> {
        debug!("Fetching todo by id: {}", id);

        let row = sqlx::query_as::<_, TodoRow>(
            "SELECT id, title, completed FROM todos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Todo::from).ok_or(TodoError::NotFound { id })
    }

    async fn create(&self, todo: Todo) -> TodoResult<Todo> {
        debug!("Creating todo: {}", todo.title);

        let row = sqlx::query_as::<_, TodoRow>(
            "INSERT INTO todos (title, completed) VALUES ($1, $2) RETURNING id, title, completed",
        )
        .bind(&todo.title)
        .bind(todo.completed)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(Todo::from(row))
    }

    async fn update(&self, id: i64, todo: &Todo) -> TodoResult<()> {
        debug!("Updating todo: {}", id);

        // Zero rows affected is success: a missing row is not surfaced here.
        sqlx::query("UPDATE todos SET title = $1, completed = $2 WHERE id = $3")
            .bind(&todo.title)
            .bind(todo.completed)
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> TodoResult<()> {
        debug!("Deleting todo: {}", id);

        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

impl std::fmt::Debug for PgTodoRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgTodoRepository").finish_non_exhaustive()
    }
}
