//! Result type aliases for the todo API.

use crate::TodoError;

/// A specialized `Result` type for todo operations.
pub type TodoResult<T> = Result<T, TodoError>;
