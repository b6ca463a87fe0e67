//! The todo entity.

use serde::{Deserialize, Serialize};

/// A single task record.
///
/// The store is the sole owner of durable todo state; values of this type are
/// transient copies exchanged between the handler and repository layers.
///
/// All fields default to their zero value when decoded from a request body,
/// so `{}` decodes to `{id: 0, title: "", completed: false}`. A todo with
/// `id == 0` has not been persisted and must not be treated as a valid
/// reference; `create` ignores any caller-supplied id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identifier, immutable once created.
    #[serde(default)]
    pub id: i64,
    /// Task description. Non-empty is assumed but not enforced here.
    #[serde(default)]
    pub title: String,
    /// Completion flag, defaults to false.
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Creates an unpersisted todo (id 0) from title and completion flag.
    #[must_use]
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: 0,
            title: title.into(),
            completed,
        }
    }
}
