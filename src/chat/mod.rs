//! Live game chat
//!
//! A [`ChatSession`] gates posting behind a one-time team selection and keeps
//! the ordered message history for a single game. Sessions are opened through
//! a [`SessionRegistry`], which keeps one isolated session per game id.

mod error;
mod registry;
mod session;

pub use error::ChatError;
pub use registry::SessionRegistry;
pub use session::{ChatAction, ChatSession, SessionState};
