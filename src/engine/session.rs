//! Stepwise message dispatch with recorded history.

use super::replay::step;
use crate::core::{History, Message, Model, Transition};

/// A running to-do state that applies messages one at a time.
///
/// The session keeps the model it started from, the current model and the
/// history of every dispatched message. Dispatching a list through a
/// session records the same models [`Engine::run_with_history`] returns.
///
/// [`Engine::run_with_history`]: super::Engine::run_with_history
///
/// # Example
///
/// ```rust
/// use todo_core::core::{Message, Model};
/// use todo_core::Session;
///
/// let mut session = Session::new(Model::new());
/// session.dispatch(Message::UpdateNewEntryField("call mom".into()));
/// let current = session.dispatch(Message::Add);
///
/// assert_eq!(current.entries.len(), 1);
/// assert_eq!(session.history().len(), 2);
/// assert_eq!(session.path().len(), 3); // initial + two steps
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    initial: Model,
    current: Model,
    history: History,
}

impl Session {
    /// Start a session at `initial`.
    pub fn new(initial: Model) -> Self {
        Self {
            current: initial.clone(),
            initial,
            history: History::new(),
        }
    }

    /// Apply one message, record it, and return the new current model.
    pub fn dispatch(&mut self, message: Message) -> &Model {
        let next = step(&self.current, &message);
        self.history.push(Transition {
            message,
            model: next.clone(),
        });
        self.current = next;
        &self.current
    }

    /// Apply every message in order.
    pub fn dispatch_all(&mut self, messages: impl IntoIterator<Item = Message>) -> &Model {
        for message in messages {
            self.dispatch(message);
        }
        &self.current
    }

    /// The model the session started from.
    pub fn initial(&self) -> &Model {
        &self.initial
    }

    /// The model after the latest dispatched message.
    pub fn current(&self) -> &Model {
        &self.current
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The initial model followed by every recorded model.
    pub fn path(&self) -> Vec<&Model> {
        std::iter::once(&self.initial)
            .chain(self.history.models())
            .collect()
    }

    /// Consume the session, returning its history.
    pub fn into_history(self) -> History {
        self.history
    }
}
