//! Domain types for the todo API.
//!
//! # Design
//! These mirror the server's wire schema but are defined independently of
//! the mock-server crate; the integration tests catch schema drift. The
//! server assigns ids and they never change afterwards — the client only
//! ever round-trips them.

use serde::{Deserialize, Serialize};

/// A single todo item as the server represents it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
}

/// Payload for creating or updating a todo. The id is path-addressed on
/// update and absent on create, so the payload carries only the title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    pub title: String,
}

impl TodoInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// The `{ "todo": { ... } }` request envelope the API expects around
/// create and update payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoEnvelope {
    pub todo: TodoInput,
}
