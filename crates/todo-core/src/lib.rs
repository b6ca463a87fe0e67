//! # Todo Core
//!
//! Core types, error taxonomy, and result aliases shared across all layers
//! of the todo API.

pub mod error;
pub mod result;
pub mod todo;

pub use error::*;
pub use result::*;
pub use todo::*;
