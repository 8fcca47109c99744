//! Chat session state machine

use chrono::Utc;
use uuid::Uuid;

use super::ChatError;
use crate::data::{GameSource, MessageSeed};
use crate::models::{ChatMessage, Game, Participant, Side, UserTeamSelection};

/// Session lifecycle state
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    AwaitingSelection,
    Active,
}

/// User actions forwarded by a front end.
#[derive(Debug, Clone)]
pub enum ChatAction {
    SelectTeam {
        team: String,
        team_name: String,
        team_color: String,
    },
    SendMessage {
        text: String,
    },
}

/// Read-only snapshot for rendering.
#[derive(Debug, Clone, Copy)]
pub struct ChatView<'a> {
    pub game: &'a Game,
    pub messages: &'a [ChatMessage],
    pub selection: Option<&'a UserTeamSelection>,
    pub state: SessionState,
}

/// Chat for one game.
///
/// The state is derived from the selection: no selection means
/// `AwaitingSelection`, a recorded selection means `Active`. Once recorded the
/// selection is never replaced, and messages are only ever appended.
#[derive(Debug)]
pub struct ChatSession {
    game: Game,
    participant: Participant,
    messages: Vec<ChatMessage>,
    selection: Option<UserTeamSelection>,
}

impl ChatSession {
    /// Create a session for `game`, seeded with pre-existing messages.
    pub fn new(game: Game, participant: Participant, seed: Vec<ChatMessage>) -> Self {
        tracing::debug!(
            "Opened chat for game {} with {} seeded messages",
            game.id,
            seed.len()
        );
        Self {
            game,
            participant,
            messages: seed,
            selection: None,
        }
    }

    /// Look up `game_id` and seed the session from the given sources.
    pub fn open<S>(source: &S, game_id: &str, participant: Participant) -> Result<Self, ChatError>
    where
        S: GameSource + MessageSeed,
    {
        let game = source
            .game(game_id)
            .ok_or_else(|| ChatError::GameNotFound(game_id.to_string()))?;
        let seed = source.seed_messages(game_id);
        Ok(Self::new(game, participant, seed))
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn state(&self) -> SessionState {
        if self.selection.is_some() {
            SessionState::Active
        } else {
            SessionState::AwaitingSelection
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn selection(&self) -> Option<&UserTeamSelection> {
        self.selection.as_ref()
    }

    pub fn view(&self) -> ChatView<'_> {
        ChatView {
            game: &self.game,
            messages: &self.messages,
            selection: self.selection.as_ref(),
            state: self.state(),
        }
    }

    /// Pick the side this user chats for. Allowed exactly once.
    pub fn select_team(
        &mut self,
        team: &str,
        team_name: &str,
        team_color: &str,
    ) -> Result<&UserTeamSelection, ChatError> {
        let side: Side = team.parse()?;

        if let Some(existing) = &self.selection {
            tracing::debug!(
                "Rejected team re-selection for game {} (already {})",
                self.game.id,
                existing.team
            );
            return Err(ChatError::Precondition(format!(
                "team already selected ({})",
                existing.team
            )));
        }

        tracing::debug!("Game {}: selected {} ({})", self.game.id, side, team_name);
        Ok(&*self.selection.insert(UserTeamSelection {
            game_id: self.game.id.clone(),
            team: side,
            team_name: team_name.to_string(),
            team_color: team_color.to_string(),
        }))
    }

    /// Append a message from this user. Requires a prior team selection.
    pub fn send_message(&mut self, text: &str) -> Result<&ChatMessage, ChatError> {
        let Some(selection) = &self.selection else {
            tracing::debug!("Rejected message for game {}: no team selected", self.game.id);
            return Err(ChatError::Precondition(
                "select a team before sending messages".to_string(),
            ));
        };

        if text.trim().is_empty() {
            return Err(ChatError::Validation(
                "message must not be empty".to_string(),
            ));
        }

        let message = ChatMessage {
            id: Uuid::new_v4().to_string(),
            user_id: self.participant.user_id.clone(),
            username: self.participant.username.clone(),
            message: text.to_string(),
            timestamp: Utc::now(),
            team: selection.team,
        };

        tracing::debug!(
            "Game {}: appended message {} ({} total)",
            self.game.id,
            message.id,
            self.messages.len() + 1
        );
        self.messages.push(message);
        // Just pushed, so the slice is non-empty.
        Ok(&self.messages[self.messages.len() - 1])
    }

    /// UI hook for the team picker.
    pub fn on_team_selected(
        &mut self,
        team: &str,
        team_name: &str,
        team_color: &str,
    ) -> Result<(), ChatError> {
        self.select_team(team, team_name, team_color).map(|_| ())
    }

    /// UI hook for the send button.
    pub fn on_message_sent(&mut self, text: &str) -> Result<(), ChatError> {
        self.send_message(text).map(|_| ())
    }

    /// Apply a forwarded action.
    pub fn handle(&mut self, action: ChatAction) -> Result<(), ChatError> {
        match action {
            ChatAction::SelectTeam {
                team,
                team_name,
                team_color,
            } => self.on_team_selected(&team, &team_name, &team_color),
            ChatAction::SendMessage { text } => self.on_message_sent(&text),
        }
    }
}
