//! Repository trait definitions.

use async_trait::async_trait;
use todo_core::{Todo, TodoResult};

/// Persistence contract for todo records.
///
/// Implemented by one relational adapter in this design, but defined as a
/// trait so alternative backends are substitutable. Consumers hold it as
/// `Arc<dyn TodoRepository>`.
///
/// Cancellation is owned by the caller: dropping the returned future (for
/// example when the client disconnects, or under an outer timeout) aborts the
/// in-flight query. Implementations never retry; every failure is surfaced
/// immediately.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns every todo currently in the store, in natural scan order.
    ///
    /// An empty store yields an empty vec, never an error.
    async fn get_all(&self) -> TodoResult<Vec<Todo>>;

    /// Returns the single todo whose id matches.
    ///
    /// Fails with [`TodoError::NotFound`] when no row matches; this is the
    /// only operation that distinguishes "absent" from "store failure".
    ///
    /// [`TodoError::NotFound`]: todo_core::TodoError::NotFound
    async fn get_by_id(&self, id: i64) -> TodoResult<Todo>;

    /// Persists a new row from the given title and completion flag.
    ///
    /// Any caller-supplied id is ignored; the returned todo carries the
    /// store-assigned id.
    async fn create(&self, todo: Todo) -> TodoResult<Todo>;

    /// Overwrites title and completed for the row matching `id`.
    ///
    /// Succeeds even when no row matches: zero rows affected is not an error.
    async fn update(&self, id: i64, todo: &Todo) -> TodoResult<()>;

    /// Removes the row matching `id`.
    ///
    /// Same zero-rows-affected-is-success semantics as [`update`](Self::update).
    async fn delete(&self, id: i64) -> TodoResult<()>;
}
