//! Presentation contract: pure rendering and intent forwarding.
//!
//! # Design
//! The view layer owns no list state and performs no network calls. Its
//! only state is [`RowEditor`]: which row is in edit mode and the working
//! copy of that row's title. Everything else comes in read-only through
//! [`Snapshot`](crate::store::Snapshot) and goes out as an [`Intent`] for
//! the controller to map onto store calls.
//!
//! Pressing Enter on the input row is equivalent to the add control, and
//! Enter while editing is equivalent to save. Leaving edit mode without
//! saving discards the working copy; the display reverts to the last
//! confirmed title.

use crate::store::Snapshot;
use crate::types::Todo;

/// A user intent forwarded upward by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Submit the input row's draft as a new todo.
    Add,
    /// Delete the row with this id.
    Delete(u64),
    /// Confirm an edit with the working title.
    Save { id: u64, title: String },
}

/// Keyboard input the presentation layer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Esc,
    Backspace,
    Char(char),
}

struct EditDraft {
    id: u64,
    text: String,
}

/// Per-row edit state: at most one row is in edit mode, holding a working
/// copy of its title until saved or discarded.
#[derive(Default)]
pub struct RowEditor {
    active: Option<EditDraft>,
}

impl RowEditor {
    /// Enter edit mode on a row, seeding the working copy with the row's
    /// confirmed title. Replaces any edit already in progress.
    pub fn begin(&mut self, todo: &Todo) {
        self.active = Some(EditDraft {
            id: todo.id,
            text: todo.title.clone(),
        });
    }

    /// The id of the row being edited, if any.
    pub fn editing(&self) -> Option<u64> {
        self.active.as_ref().map(|draft| draft.id)
    }

    pub fn is_editing(&self, id: u64) -> bool {
        self.editing() == Some(id)
    }

    /// The working copy of the title being edited.
    pub fn text(&self) -> Option<&str> {
        self.active.as_ref().map(|draft| draft.text.as_str())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        if let Some(draft) = self.active.as_mut() {
            draft.text = text.into();
        }
    }

    /// Leave edit mode, discarding the working copy.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Feed a key into the active edit. Enter confirms and yields a
    /// [`Intent::Save`]; Esc discards; other keys edit the working copy.
    pub fn key(&mut self, key: Key) -> Option<Intent> {
        match key {
            Key::Enter => self.active.take().map(|draft| Intent::Save {
                id: draft.id,
                title: draft.text,
            }),
            Key::Esc => {
                self.cancel();
                None
            }
            Key::Backspace => {
                if let Some(draft) = self.active.as_mut() {
                    draft.text.pop();
                }
                None
            }
            Key::Char(c) => {
                if let Some(draft) = self.active.as_mut() {
                    draft.text.push(c);
                }
                None
            }
        }
    }
}

/// Key handling for the input row: Enter is equivalent to the add control.
pub fn input_key(key: Key) -> Option<Intent> {
    match key {
        Key::Enter => Some(Intent::Add),
        _ => None,
    }
}

/// Render the whole view as display lines. While the initial fetch is
/// pending only a placeholder appears; the list is not rendered.
pub fn render(snapshot: Snapshot<'_>, editor: &RowEditor) -> Vec<String> {
    if snapshot.loading {
        return vec!["Loading todos...".to_string()];
    }

    let mut lines = Vec::with_capacity(snapshot.todos.len() + 2);
    if let Some(message) = snapshot.error {
        lines.push(format!("! {message}"));
    }
    lines.push(format!("> {}", snapshot.draft));
    for todo in snapshot.todos {
        if editor.is_editing(todo.id) {
            let text = editor.text().unwrap_or_default();
            lines.push(format!("[{}] {text} (editing)", todo.id));
        } else {
            lines.push(format!("[{}] {}", todo.id, todo.title));
        }
    }
    lines
}
