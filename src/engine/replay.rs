//! Folding message lists over a model.

use crate::core::{History, Message, Model, Transition};

/// Applies message lists to models.
///
/// Both operations are pure: the input model is borrowed and never
/// changed, and every intermediate model is a fresh value.
///
/// # Example
///
/// ```rust
/// use todo_core::core::{Message, Model};
/// use todo_core::Engine;
///
/// let messages = [
///     Message::UpdateNewEntryField("water plants".into()),
///     Message::Add,
///     Message::check(0, true),
/// ];
///
/// let history = Engine::run_with_history(&Model::new(), &messages);
/// assert_eq!(history.len(), 3);
///
/// let last = Engine::run(&Model::new(), &messages);
/// assert_eq!(history.last(), Ok(&last));
/// assert!(last.entries[0].completed);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Engine;

impl Engine {
    /// Apply `messages` in order and return the final model.
    ///
    /// An empty list returns a copy of `model`.
    pub fn run(model: &Model, messages: &[Message]) -> Model {
        tracing::debug!(messages = messages.len(), "running messages");
        messages
            .iter()
            .fold(model.clone(), |current, message| step(&current, message))
    }

    /// Apply `messages` in order and return every resulting model.
    ///
    /// The history holds one model per message, in message order; the
    /// starting model is not included. An empty list yields an empty
    /// history.
    #[tracing::instrument(skip_all, fields(messages = messages.len()))]
    pub fn run_with_history(model: &Model, messages: &[Message]) -> History {
        let mut history = History::new();
        let mut current = model.clone();
        for message in messages {
            current = step(&current, message);
            history.push(Transition {
                message: message.clone(),
                model: current.clone(),
            });
        }
        history
    }
}

pub(crate) fn step(model: &Model, message: &Message) -> Model {
    let next = message.apply(model);
    tracing::trace!(
        message = message.name(),
        entries = next.entries.len(),
        next_id = next.next_id,
        "applied message"
    );
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entry;

    fn fixture() -> Model {
        Model::with_entries(vec![Entry::new(10, "Pat head"), Entry::new(11, "Rub tummy")])
    }

    #[test]
    fn run_on_empty_list_returns_input() {
        let model = fixture();
        assert_eq!(Engine::run(&model, &[]), model);
    }

    #[test]
    fn run_with_history_on_empty_list_is_empty() {
        let history = Engine::run_with_history(&fixture(), &[]);
        assert!(history.is_empty());
    }

    #[test]
    fn run_threads_model_through_messages() {
        let model = Engine::run(
            &fixture(),
            &[
                Message::check(10, true),
                Message::check(11, true),
                Message::check(10, false),
            ],
        );

        assert!(!model.entries[0].completed);
        assert!(model.entries[1].completed);
    }

    #[test]
    fn history_has_one_model_per_message() {
        let messages = [
            Message::UpdateNewEntryField("a".into()),
            Message::Add,
            Message::Add,
        ];
        let history = Engine::run_with_history(&fixture(), &messages);

        assert_eq!(history.len(), messages.len());
        let recorded: Vec<&Message> = history.transitions().iter().map(|t| &t.message).collect();
        assert_eq!(recorded, messages.iter().collect::<Vec<_>>());
    }

    #[test]
    fn run_matches_last_history_model() {
        let messages = [
            Message::UpdateNewEntryField("hop on one foot".into()),
            Message::Add,
            Message::Delete(10),
        ];
        let history = Engine::run_with_history(&fixture(), &messages);
        let last = Engine::run(&fixture(), &messages);

        assert_eq!(history.last(), Ok(&last));
    }

    #[test]
    fn run_does_not_touch_input() {
        let model = fixture();
        let _ = Engine::run(&model, &[Message::Delete(10), Message::DeleteAllCompleted]);
        assert_eq!(model, fixture());
    }
}
