//! Pure core of the to-do state.
//!
//! This module holds the data and the transition logic:
//! - `Entry` and `Model` values
//! - the closed `Message` set and its pure `apply`
//! - blank-text detection
//! - immutable `History` of applied messages
//!
//! Nothing here performs I/O or mutates a model in place.

mod blank;
mod error;
mod history;
mod message;
mod model;

pub use blank::{is_blank, Blank};
pub use error::HistoryError;
pub use history::{History, Transition};
pub use message::Message;
pub use model::{Entry, EntryId, Model};
