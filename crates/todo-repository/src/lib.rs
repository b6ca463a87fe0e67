//! # Todo Repository
//!
//! Persistence-access layer for the todo API:
//!
//! ```text
//! Handler
//!   ↓  Arc<dyn TodoRepository>   (persistence contract)
//! PgTodoRepository               (PostgreSQL / SQLx)
//!   ↓
//! PostgreSQL
//! ```

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::PgTodoRepository;
pub use traits::*;
