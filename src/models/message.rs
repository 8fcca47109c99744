//! Chat message models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chat::ChatError;

/// Side of a game a user chats for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("home") {
            Ok(Side::Home)
        } else if tag.eq_ignore_ascii_case("away") {
            Ok(Side::Away)
        } else if tag.is_empty() {
            Err(ChatError::Validation("team must not be empty".to_string()))
        } else {
            Err(ChatError::Validation(format!(
                "unrecognized team {:?} (expected home or away)",
                tag
            )))
        }
    }
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub team: Side,
}

/// The side a user picked for one game's chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTeamSelection {
    pub game_id: String,
    pub team: Side,
    pub team_name: String,
    pub team_color: String,
}

/// Identity stamped onto messages sent from this client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub user_id: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parse() {
        assert_eq!("home".parse::<Side>().unwrap(), Side::Home);
        assert_eq!(" Away ".parse::<Side>().unwrap(), Side::Away);
        assert_eq!("HOME".parse::<Side>().unwrap(), Side::Home);
    }

    #[test]
    fn test_side_parse_rejects_unknown() {
        assert!(matches!("".parse::<Side>(), Err(ChatError::Validation(_))));
        assert!(matches!("  ".parse::<Side>(), Err(ChatError::Validation(_))));
        assert!(matches!(
            "visitors".parse::<Side>(),
            Err(ChatError::Validation(_))
        ));
    }

    #[test]
    fn test_message_json_shape() {
        let json = r##"{
            "id": "m1",
            "userId": "u1",
            "username": "ChiefsKingdom",
            "message": "Let's go!",
            "timestamp": "2026-10-18T17:05:00Z",
            "team": "home"
        }"##;
        let msg: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.user_id, "u1");
        assert_eq!(msg.team, Side::Home);
    }
}
