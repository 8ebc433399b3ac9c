//! History access errors.

use thiserror::Error;

/// Errors raised when reading models out of a [`History`](super::History).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// The history holds no models, so there is no last one.
    #[error("History is empty: no message has been applied")]
    Empty,

    /// A step index past the end of the history was requested.
    #[error("Step {step} is out of range for a history of {len} models")]
    StepOutOfRange { step: usize, len: usize },
}
