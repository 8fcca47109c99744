//! Data models for games and chat entities

mod game;
mod message;

pub use game::*;
pub use message::*;
