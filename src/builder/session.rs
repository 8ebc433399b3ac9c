//! Builder for constructing sessions.

use crate::builder::error::BuildError;
use crate::core::{Entry, Message, Model};
use crate::engine::Session;

/// Builder for constructing sessions with a fluent API.
///
/// # Example
///
/// ```rust
/// use todo_core::builder::SessionBuilder;
/// use todo_core::core::{Message, Model};
///
/// let session = SessionBuilder::new()
///     .initial(Model::new())
///     .replay(vec![
///         Message::UpdateNewEntryField("stretch".into()),
///         Message::Add,
///     ])
///     .build()
///     .unwrap();
///
/// assert_eq!(session.history().len(), 2);
/// assert_eq!(session.current().entries.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    initial: Option<Model>,
    replay: Vec<Message>,
}

impl SessionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            replay: Vec::new(),
        }
    }

    /// Set the initial model (required).
    pub fn initial(mut self, model: Model) -> Self {
        self.initial = Some(model);
        self
    }

    /// Start from a model holding `entries`, with the next id derived
    /// from them.
    pub fn entries(self, entries: Vec<Entry>) -> Self {
        self.initial(Model::with_entries(entries))
    }

    /// Queue messages to dispatch when the session is built.
    pub fn replay(mut self, messages: impl IntoIterator<Item = Message>) -> Self {
        self.replay.extend(messages);
        self
    }

    /// Build the session, dispatching any queued messages.
    ///
    /// # Errors
    ///
    /// [`BuildError::MissingInitialModel`] when no initial model was set.
    pub fn build(self) -> Result<Session, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialModel)?;

        let mut session = Session::new(initial);
        session.dispatch_all(self.replay);

        Ok(session)
    }
}
