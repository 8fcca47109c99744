//! Built-in game catalog embedded in the binary

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

use super::{GameSource, MessageSeed};
use crate::models::{ChatMessage, Game, League};

const BUILTIN_CATALOG: &str = include_str!("catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    games: Vec<Game>,
    #[serde(default)]
    messages: HashMap<String, Vec<ChatMessage>>,
}

/// Static games plus per-game seed messages.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    games: Vec<Game>,
    messages: HashMap<String, Vec<ChatMessage>>,
}

impl StaticCatalog {
    /// Parse a catalog JSON document. Games are kept sorted by start time.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).context("Failed to parse game catalog")?;

        let mut games = file.games;
        games.sort_by_key(|g| g.start_time);

        tracing::debug!(
            "Loaded catalog: {} games, {} seeded chats",
            games.len(),
            file.messages.len()
        );
        Ok(Self {
            games,
            messages: file.messages,
        })
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn games_in(&self, league: League) -> impl Iterator<Item = &Game> {
        self.games.iter().filter(move |g| g.league == league)
    }
}

impl GameSource for StaticCatalog {
    fn game(&self, id: &str) -> Option<Game> {
        self.games.iter().find(|g| g.id == id).cloned()
    }
}

impl MessageSeed for StaticCatalog {
    fn seed_messages(&self, game_id: &str) -> Vec<ChatMessage> {
        self.messages.get(game_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameStatus, Side};

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = StaticCatalog::builtin().unwrap();
        assert!(catalog.games().len() >= 3);

        let starts: Vec<_> = catalog.games().iter().map(|g| g.start_time).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn test_chiefs_game() {
        let catalog = StaticCatalog::builtin().unwrap();
        let game = catalog.game("1").unwrap();
        assert_eq!(game.home_team.name, "Kansas City Chiefs");
        assert_eq!(game.home_team.color, "#E31837");
        assert_eq!(game.league, League::NFL);
        assert_eq!(game.status, GameStatus::Live);
        assert!(game.score.is_some());

        let seed = catalog.seed_messages("1");
        assert_eq!(seed.len(), 6);
        assert_eq!(seed.iter().filter(|m| m.team == Side::Away).count(), 3);
    }

    #[test]
    fn test_missing_lookups() {
        let catalog = StaticCatalog::builtin().unwrap();
        assert!(catalog.game("does-not-exist").is_none());
        assert!(catalog.seed_messages("does-not-exist").is_empty());
    }

    #[test]
    fn test_league_filter() {
        let catalog = StaticCatalog::builtin().unwrap();
        assert!(catalog.games_in(League::NFL).all(|g| g.league == League::NFL));
        assert!(catalog.games_in(League::NFL).count() >= 1);
    }

    #[test]
    fn test_invalid_json() {
        assert!(StaticCatalog::from_json("{\"games\": [{}]}").is_err());
        assert!(StaticCatalog::from_json("not json").is_err());
    }

    #[test]
    fn test_messages_optional() {
        let catalog = StaticCatalog::from_json(r#"{"games": []}"#).unwrap();
        assert!(catalog.games().is_empty());
    }
}
