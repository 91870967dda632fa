//! Error type for the todo API client.
//!
//! # Design
//! Everything that can go wrong between "issue a request" and "hold a
//! parsed value" is one `TransportError`. `NotFound` gets a dedicated
//! variant because callers distinguish "the todo does not exist" from
//! "the server returned an unexpected status"; all other non-2xx responses
//! land in `UnexpectedStatus` with the raw status and body for debugging.

use thiserror::Error;

/// Errors returned by the client, service, and transport layers.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport could not complete the round-trip at all.
    #[error("network error: {0}")]
    Network(String),

    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("request serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("response deserialization failed: {0}")]
    Deserialization(String),
}
