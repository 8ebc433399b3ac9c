//! Replayable history of models.
//!
//! A [`History`] is the ordered list of models produced while applying
//! messages, one per message. The model a run starts from is not part of
//! it.

use super::error::HistoryError;
use super::message::Message;
use super::model::Model;
use serde::{Deserialize, Serialize};

/// One applied message and the model it produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The message that was applied
    pub message: Message,
    /// The model after applying it
    pub model: Model,
}

/// Ordered history of transitions.
///
/// Each recorded model is an independent value, so earlier snapshots stay
/// exactly as they were when later messages are applied.
///
/// # Example
///
/// ```rust
/// use todo_core::core::{History, Message, Model, Transition};
///
/// let start = Model::new();
/// let message = Message::UpdateNewEntryField("draft".into());
/// let next = message.apply(&start);
///
/// let history = History::new();
/// let recorded = history.record(Transition { message, model: next.clone() });
///
/// assert!(history.is_empty()); // original unchanged
/// assert_eq!(recorded.len(), 1);
/// assert_eq!(recorded.last(), Ok(&next));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    transitions: Vec<Transition>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The receiver is left as it was. Each call copies every recorded
    /// transition, so it costs O(n); build long histories with
    /// [`Engine::run_with_history`](crate::Engine::run_with_history) or a
    /// [`Session`](crate::Session) instead.
    pub fn record(&self, transition: Transition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    pub(crate) fn push(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    /// Number of recorded models.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// All recorded transitions in order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Recorded models in message order.
    pub fn models(&self) -> impl Iterator<Item = &Model> + '_ {
        self.transitions.iter().map(|transition| &transition.model)
    }

    /// The most recent model.
    ///
    /// # Errors
    ///
    /// [`HistoryError::Empty`] when nothing has been recorded.
    pub fn last(&self) -> Result<&Model, HistoryError> {
        self.transitions
            .last()
            .map(|transition| &transition.model)
            .ok_or(HistoryError::Empty)
    }

    /// The model produced by the message at index `step`.
    ///
    /// # Errors
    ///
    /// [`HistoryError::StepOutOfRange`] when `step >= len()`.
    pub fn model_at(&self, step: usize) -> Result<&Model, HistoryError> {
        self.transitions
            .get(step)
            .map(|transition| &transition.model)
            .ok_or(HistoryError::StepOutOfRange {
                step,
                len: self.transitions.len(),
            })
    }

    /// Consume the history, keeping only the models.
    pub fn into_models(self) -> Vec<Model> {
        self.transitions
            .into_iter()
            .map(|transition| transition.model)
            .collect()
    }
}

impl FromIterator<Transition> for History {
    fn from_iter<I: IntoIterator<Item = Transition>>(iter: I) -> Self {
        Self {
            transitions: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for History {
    type Item = Transition;
    type IntoIter = std::vec::IntoIter<Transition>;

    fn into_iter(self) -> Self::IntoIter {
        self.transitions.into_iter()
    }
}
