//! Application state: the to-do entries and the pending input field.
//!
//! Both [`Entry`] and [`Model`] are plain values. Nothing in this crate
//! mutates a model after it is produced; transitions build new ones.

use serde::{Deserialize, Serialize};

/// Identifier of an entry. Unique within a model and never reused.
pub type EntryId = u64;

/// A single to-do item.
///
/// The `id` is fixed at creation. Changing an entry means producing a
/// replacement value with the same `id`.
///
/// # Example
///
/// ```rust
/// use todo_core::core::Entry;
///
/// let entry = Entry::new(10, "Pat head");
/// assert!(!entry.completed);
///
/// let done = entry.clone().with_completed(true);
/// assert_eq!(done.id, entry.id);
/// assert!(done.completed);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub description: String,
    pub completed: bool,
}

impl Entry {
    /// Create an uncompleted entry.
    pub fn new(id: EntryId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }

    /// Replacement value with the given completion flag.
    pub fn with_completed(self, completed: bool) -> Self {
        Self { completed, ..self }
    }
}

/// The whole application state at one point in time.
///
/// Equality is structural over all three fields, with `entries` compared
/// as an ordered sequence.
///
/// # Invariants
///
/// - Entry ids are pairwise distinct.
/// - `next_id` is greater than every id in `entries` and never decreases.
///
/// # Example
///
/// ```rust
/// use todo_core::core::{Entry, Model};
///
/// let empty = Model::new();
/// assert!(empty.entries.is_empty());
/// assert_eq!(empty.next_id, 0);
///
/// let model = Model::with_entries(vec![
///     Entry::new(10, "Pat head"),
///     Entry::new(11, "Rub tummy"),
/// ]);
/// assert_eq!(model.next_id, 12);
/// assert_eq!(model.new_entry_field, "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Entries in display order.
    pub entries: Vec<Entry>,
    /// Text typed for an entry that has not been added yet.
    pub new_entry_field: String,
    /// Id the next added entry will receive.
    pub next_id: EntryId,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model holding `entries`, with `next_id` one past the
    /// largest id present (or 0 when there are none).
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self::from_parts(entries, String::new(), None)
    }

    /// Create a model from all of its parts.
    ///
    /// When `next_id` is `None` it is derived from `entries` the same way
    /// [`Model::with_entries`] does.
    ///
    /// # Example
    ///
    /// ```rust
    /// use todo_core::core::{Entry, Model};
    ///
    /// let model = Model::from_parts(vec![Entry::new(3, "x")], "draft", Some(7));
    /// assert_eq!(model.next_id, 7);
    /// assert_eq!(model.new_entry_field, "draft");
    ///
    /// let derived = Model::from_parts(vec![Entry::new(3, "x")], "", None);
    /// assert_eq!(derived.next_id, 4);
    /// ```
    pub fn from_parts(
        entries: Vec<Entry>,
        new_entry_field: impl Into<String>,
        next_id: Option<EntryId>,
    ) -> Self {
        let next_id = next_id.unwrap_or_else(|| next_id_after(&entries));
        Self {
            entries,
            new_entry_field: new_entry_field.into(),
            next_id,
        }
    }

    /// Look up an entry by id.
    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Number of completed entries.
    pub fn completed_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.completed).count()
    }

    /// Number of entries still to do.
    pub fn active_count(&self) -> usize {
        self.entries.len() - self.completed_count()
    }
}

// An entry already at `EntryId::MAX` leaves no id to hand out; `Add`
// refuses to append once `next_id` cannot advance.
fn next_id_after(entries: &[Entry]) -> EntryId {
    entries
        .iter()
        .map(|entry| entry.id)
        .max()
        .map_or(0, |max| max.checked_add(1).unwrap_or(EntryId::MAX))
}
