//! Builder API for session construction.
//!
//! This module provides a fluent builder for creating sessions, optionally
//! pre-loaded with a replayed message list.

pub mod error;
pub mod session;

pub use error::BuildError;
pub use session::SessionBuilder;
