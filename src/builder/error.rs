//! Build errors for session builders.

use thiserror::Error;

/// Errors that can occur when building a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial model not specified. Call .initial(model) before .build()")]
    MissingInitialModel,
}
