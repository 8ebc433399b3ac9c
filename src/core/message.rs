//! State-transition messages.
//!
//! The message set is closed. Each variant maps a [`Model`] to a new
//! [`Model`] through [`Message::apply`], a pure function that never
//! touches its input.

use super::blank::Blank;
use super::model::{Entry, EntryId, Model};
use serde::{Deserialize, Serialize};

/// A request to change the model.
///
/// # Example
///
/// ```rust
/// use todo_core::core::{Message, Model};
///
/// let model = Model::new();
/// let typed = Message::UpdateNewEntryField("buy milk".into()).apply(&model);
/// let added = Message::Add.apply(&typed);
///
/// assert_eq!(added.entries.len(), 1);
/// assert_eq!(added.entries[0].description, "buy milk");
/// assert_eq!(added.next_id, 1);
/// assert!(model.entries.is_empty()); // input untouched
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Commit the new-entry field as an entry unless it is blank.
    ///
    /// Clears the field and consumes an id either way. Once `next_id`
    /// can no longer advance, no entry is added.
    Add,
    /// Replace the new-entry field.
    UpdateNewEntryField(String),
    /// Set the completion flag of the entry with `id`.
    Check { id: EntryId, completed: bool },
    /// Remove the entry with the given id.
    Delete(EntryId),
    /// Remove every completed entry.
    DeleteAllCompleted,
}

impl Message {
    /// Build an `UpdateNewEntryField` from possibly absent text.
    ///
    /// `None` becomes the empty string.
    ///
    /// ```rust
    /// use todo_core::core::Message;
    ///
    /// assert_eq!(
    ///     Message::update_new_entry_field(None::<String>),
    ///     Message::UpdateNewEntryField(String::new()),
    /// );
    /// ```
    pub fn update_new_entry_field(text: Option<impl Into<String>>) -> Self {
        Self::UpdateNewEntryField(text.map(Into::into).unwrap_or_default())
    }

    /// Shorthand for `Check { id, completed }`.
    pub fn check(id: EntryId, completed: bool) -> Self {
        Self::Check { id, completed }
    }

    /// Variant name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::UpdateNewEntryField(_) => "UpdateNewEntryField",
            Self::Check { .. } => "Check",
            Self::Delete(_) => "Delete",
            Self::DeleteAllCompleted => "DeleteAllCompleted",
        }
    }

    /// Produce the model that results from applying this message to `model`.
    ///
    /// Fields a variant does not mention are copied unchanged. Unknown ids
    /// in `Check` and `Delete` leave the model as it was.
    pub fn apply(&self, model: &Model) -> Model {
        match self {
            Self::Add => add(model),
            Self::UpdateNewEntryField(text) => Model {
                new_entry_field: text.clone(),
                ..model.clone()
            },
            Self::Check { id, completed } => Model {
                entries: model
                    .entries
                    .iter()
                    .map(|entry| {
                        if entry.id == *id {
                            entry.clone().with_completed(*completed)
                        } else {
                            entry.clone()
                        }
                    })
                    .collect(),
                ..model.clone()
            },
            Self::Delete(id) => retain_entries(model, |entry| entry.id != *id),
            Self::DeleteAllCompleted => retain_entries(model, |entry| !entry.completed),
        }
    }
}

fn add(model: &Model) -> Model {
    let mut entries = model.entries.clone();
    let next_id = model.next_id.checked_add(1);

    if model.new_entry_field.is_blank() {
        tracing::debug!(
            next_id = model.next_id,
            "new entry field is blank; consuming id without adding an entry"
        );
    } else if next_id.is_none() {
        tracing::warn!(
            next_id = model.next_id,
            "entry id space exhausted; new entry not added"
        );
    } else {
        entries.push(Entry::new(model.next_id, model.new_entry_field.clone()));
    }

    Model {
        entries,
        new_entry_field: String::new(),
        next_id: next_id.unwrap_or(model.next_id),
    }
}

fn retain_entries(model: &Model, keep: impl Fn(&Entry) -> bool) -> Model {
    Model {
        entries: model
            .entries
            .iter()
            .filter(|&entry| keep(entry))
            .cloned()
            .collect(),
        new_entry_field: model.new_entry_field.clone(),
        next_id: model.next_id,
    }
}
