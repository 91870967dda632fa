//! The state container owning the todo list and its UI flags.
//!
//! # Design
//! `TodoStore` is the single owner of the in-memory list; everything else
//! reads it through [`Snapshot`]. Mutation is confirm-then-apply: the store
//! calls the service, and only a successful response touches local state.
//! There is no optimistic update and therefore no rollback path. Because
//! every intent takes `&mut self`, at most one operation is in flight at a
//! time and overlapping requests cannot race.
//!
//! Failures never propagate out of the store: each one is converted to its
//! operation's message from [`Messages`] and parked in `error` for display.
//! Only a successful refetch clears the message.

use tracing::warn;

use crate::http::Transport;
use crate::service::TodoService;
use crate::types::{Todo, TodoInput};

/// User-facing failure strings, one per operation.
///
/// These are configuration, not logic: construct the store with
/// [`TodoStore::with_messages`] to localize or reword them.
#[derive(Debug, Clone)]
pub struct Messages {
    pub fetch: String,
    pub add: String,
    pub delete: String,
    pub update: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            fetch: "Failed to load todos.".to_string(),
            add: "Failed to add the todo.".to_string(),
            delete: "Failed to delete the todo.".to_string(),
            update: "Failed to update the todo.".to_string(),
        }
    }
}

/// Read-only view of the store for render functions.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub todos: &'a [Todo],
    pub draft: &'a str,
    pub loading: bool,
    pub error: Option<&'a str>,
}

pub struct TodoStore<T> {
    service: TodoService<T>,
    messages: Messages,
    todos: Vec<Todo>,
    draft: String,
    loading: bool,
    error: Option<String>,
}

impl<T> TodoStore<T> {
    /// A fresh store starts in the loading state with an empty list; call
    /// [`load`](Self::load) once when the view activates.
    pub fn new(service: TodoService<T>) -> Self {
        Self::with_messages(service, Messages::default())
    }

    pub fn with_messages(service: TodoService<T>, messages: Messages) -> Self {
        Self {
            service,
            messages,
            todos: Vec::new(),
            draft: String::new(),
            loading: true,
            error: None,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            todos: &self.todos,
            draft: &self.draft,
            loading: self.loading,
            error: self.error.as_deref(),
        }
    }
}

impl<T: Transport> TodoStore<T> {
    /// The one initial fetch. Leaves the loading state whatever the outcome;
    /// on failure the list stays empty and the fetch message is shown.
    pub fn load(&mut self) {
        match self.service.get_all() {
            Ok(todos) => {
                self.todos = todos;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "initial load failed");
                self.error = Some(self.messages.fetch.clone());
            }
        }
        self.loading = false;
    }

    /// Refetch the list without re-entering the loading state. A success
    /// replaces the list and clears any parked error; a failure leaves the
    /// list as it was.
    pub fn reload(&mut self) {
        match self.service.get_all() {
            Ok(todos) => {
                self.todos = todos;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "reload failed");
                self.error = Some(self.messages.fetch.clone());
            }
        }
    }

    /// Create a todo from the current draft. A draft that trims to empty is
    /// a no-op without a service call. On success the server-assigned todo
    /// is appended and the draft cleared; on failure both stay as they were.
    pub fn add(&mut self) {
        let title = self.draft.trim();
        if title.is_empty() {
            return;
        }
        match self.service.create(&TodoInput::new(title)) {
            Ok(todo) => {
                self.todos.push(todo);
                self.draft.clear();
            }
            Err(e) => {
                warn!(error = %e, "add failed");
                self.error = Some(self.messages.add.clone());
            }
        }
    }

    /// Delete the todo with the given id. Only a confirmed deletion removes
    /// it locally.
    pub fn remove(&mut self, id: u64) {
        match self.service.delete(id) {
            Ok(()) => {
                self.todos.retain(|todo| todo.id != id);
            }
            Err(e) => {
                warn!(id, error = %e, "delete failed");
                self.error = Some(self.messages.delete.clone());
            }
        }
    }

    /// Retitle the todo with the given id. The local copy is replaced by the
    /// server's echo, not by the submitted title — the server's value is
    /// canonical.
    pub fn edit(&mut self, id: u64, new_title: &str) {
        match self.service.update(id, &TodoInput::new(new_title)) {
            Ok(updated) => {
                if let Some(slot) = self.todos.iter_mut().find(|todo| todo.id == id) {
                    *slot = updated;
                }
            }
            Err(e) => {
                warn!(id, error = %e, "update failed");
                self.error = Some(self.messages.update.clone());
            }
        }
    }
}
