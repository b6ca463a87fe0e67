//! # Todo REST
//!
//! REST API layer using Axum for the todo API.
//! Adapts HTTP requests to repository calls and repository outcomes to
//! HTTP responses; no business logic lives here.

pub mod controllers;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
