//! Todo Core: a pure functional state core for a to-do list
//!
//! The whole application state is an immutable [`Model`]. A closed set of
//! [`Message`]s describes every change, each one a pure function from one
//! model to the next. The [`Engine`] folds a message list over a model and
//! returns either the final model or the full [`History`] of intermediate
//! models, which is what makes replaying and inspecting past states
//! ("time travel") possible.
//!
//! # Core Concepts
//!
//! - **Model**: entries, the pending new-entry text and the next id
//! - **Message**: `Add`, `UpdateNewEntryField`, `Check`, `Delete`, `DeleteAllCompleted`
//! - **Engine**: `run` and `run_with_history`
//! - **Session**: stepwise dispatch that records history as it goes
//!
//! # Example
//!
//! ```rust
//! use todo_core::core::{Entry, Message, Model};
//! use todo_core::Engine;
//!
//! let history = Engine::run_with_history(&Model::new(), &[
//!     Message::UpdateNewEntryField("go forward in time".into()),
//!     Message::Add,
//!     Message::Add, // blank field: no entry, but id 1 is consumed
//! ]);
//!
//! assert_eq!(history.len(), 3);
//! let last = history.last().unwrap();
//! assert_eq!(last.entries, vec![Entry::new(0, "go forward in time")]);
//! assert_eq!(last.next_id, 2);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{Entry, EntryId, History, HistoryError, Message, Model, Transition};
pub use crate::engine::{Engine, Session};
