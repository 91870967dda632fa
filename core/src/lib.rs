//! Client core for a todo list backed by a REST API.
//!
//! # Overview
//! Four layers, leaves first:
//! - [`http`] — plain-data request/response types and the [`Transport`]
//!   seam the caller implements to perform real I/O.
//! - [`client`] — stateless `build_*` / `parse_*` pairs mapping each CRUD
//!   operation onto the wire contract (`/todos` paths, `{todo: {...}}`
//!   request envelopes).
//! - [`service`] — the five domain operations, each one HTTP round-trip.
//! - [`store`] / [`view`] — the state container owning the list and UI
//!   flags, and the pure render / intent-forwarding presentation contract.
//!
//! # Design
//! Local state follows confirm-then-apply: the store mutates the list only
//! after the server confirms an operation, so the displayed list never
//! diverges from confirmed server state. Failures surface as one static
//! user-facing message per operation and never escape the store.

pub mod client;
pub mod error;
pub mod http;
pub mod service;
pub mod store;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use client::TodoClient;
pub use error::TransportError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use service::TodoService;
pub use store::{Messages, Snapshot, TodoStore};
pub use types::{Todo, TodoEnvelope, TodoInput};
pub use view::{input_key, render, Intent, Key, RowEditor};
