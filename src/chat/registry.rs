//! One chat session per game

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::{ChatError, ChatSession};
use crate::data::{GameSource, MessageSeed};
use crate::models::Participant;

/// Owns the open sessions, keyed by game id.
///
/// Sessions are isolated: nothing one session does is visible in another.
pub struct SessionRegistry<S> {
    source: S,
    participant: Participant,
    sessions: HashMap<String, ChatSession>,
}

impl<S> SessionRegistry<S>
where
    S: GameSource + MessageSeed,
{
    pub fn new(source: S, participant: Participant) -> Self {
        Self {
            source,
            participant,
            sessions: HashMap::new(),
        }
    }

    /// Return the session for `game_id`, creating and seeding it on first use.
    pub fn open(&mut self, game_id: &str) -> Result<&mut ChatSession, ChatError> {
        match self.sessions.entry(game_id.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let session =
                    ChatSession::open(&self.source, game_id, self.participant.clone())?;
                Ok(entry.insert(session))
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, game_id: &str) -> Option<&ChatSession> {
        self.sessions.get(game_id)
    }

    /// Drop the session for `game_id`. Its state is not kept.
    pub fn close(&mut self, game_id: &str) -> bool {
        let closed = self.sessions.remove(game_id).is_some();
        if closed {
            tracing::debug!("Closed chat for game {}", game_id);
        }
        closed
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::SessionState;
    use crate::data::StaticCatalog;

    fn registry() -> SessionRegistry<StaticCatalog> {
        SessionRegistry::new(
            StaticCatalog::builtin().unwrap(),
            Participant {
                user_id: "u-test".to_string(),
                username: "Tester".to_string(),
            },
        )
    }

    #[test]
    fn test_open_reuses_session() {
        let mut reg = registry();
        reg.open("1")
            .unwrap()
            .select_team("home", "Kansas City Chiefs", "#E31837")
            .unwrap();
        reg.open("1").unwrap().send_message("Go Chiefs!").unwrap();

        assert_eq!(reg.len(), 1);
        let session = reg.get("1").unwrap();
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.messages().len(), 7);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut reg = registry();
        reg.open("1")
            .unwrap()
            .select_team("away", "Buffalo Bills", "#00338D")
            .unwrap();

        let other = reg.open("2").unwrap();
        assert_eq!(other.state(), SessionState::AwaitingSelection);
        assert!(other.selection().is_none());
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_close_discards_state() {
        let mut reg = registry();
        reg.open("1")
            .unwrap()
            .select_team("home", "Kansas City Chiefs", "#E31837")
            .unwrap();
        assert!(reg.close("1"));
        assert!(!reg.close("1"));
        assert!(reg.is_empty());

        let reopened = reg.open("1").unwrap();
        assert_eq!(reopened.state(), SessionState::AwaitingSelection);
        assert_eq!(reopened.messages().len(), 6);
    }

    #[test]
    fn test_open_unknown_game_does_not_register() {
        let mut reg = registry();
        assert!(matches!(reg.open("404"), Err(ChatError::GameNotFound(_))));
        assert!(reg.is_empty());
    }
}
