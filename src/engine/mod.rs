//! Drivers that apply messages to models.
//!
//! - `Engine` folds a whole message list, returning the final model or the
//!   full history
//! - `Session` applies messages one at a time and keeps its history

mod replay;
mod session;

pub use replay::Engine;
pub use session::Session;
