//! Game reference data and seed messages

mod catalog;

pub use catalog::StaticCatalog;

use crate::models::{ChatMessage, Game};

/// Lookup of games by id
pub trait GameSource {
    fn game(&self, id: &str) -> Option<Game>;
}

/// Pre-existing messages a new session starts with
pub trait MessageSeed {
    fn seed_messages(&self, game_id: &str) -> Vec<ChatMessage>;
}
