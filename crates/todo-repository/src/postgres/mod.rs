//! PostgreSQL repository implementations.

pub mod todo_repository;

pub use todo_repository::PgTodoRepository;
