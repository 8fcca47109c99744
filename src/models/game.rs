//! Game-related models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// League a game belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum League {
    NFL,
    NBA,
    MLB,
    NHL,
    NCAAF,
    NCAAB,
    MLS,
}

impl League {
    pub fn as_str(&self) -> &'static str {
        match self {
            League::NFL => "NFL",
            League::NBA => "NBA",
            League::MLB => "MLB",
            League::NHL => "NHL",
            League::NCAAF => "NCAAF",
            League::NCAAB => "NCAAB",
            League::MLS => "MLS",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for League {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NFL" => Ok(League::NFL),
            "NBA" => Ok(League::NBA),
            "MLB" => Ok(League::MLB),
            "NHL" => Ok(League::NHL),
            "NCAAF" => Ok(League::NCAAF),
            "NCAAB" => Ok(League::NCAAB),
            "MLS" => Ok(League::MLS),
            other => Err(format!("unknown league: {:?}", other)),
        }
    }
}

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Scheduled,
    Live,
    Final,
    Postponed,
    Cancelled,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "scheduled",
            GameStatus::Live => "live",
            GameStatus::Final => "final",
            GameStatus::Postponed => "postponed",
            GameStatus::Cancelled => "cancelled",
        }
    }
}

/// One side of a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    pub abbreviation: String,
    pub record: Option<String>,
    /// Display color, e.g. `#E31837`
    pub color: String,
}

/// Current score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// Game entity. Reference data, never mutated by a chat session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub home_team: Team,
    pub away_team: Team,
    pub start_time: DateTime<Utc>,
    pub status: GameStatus,
    pub score: Option<Score>,
    pub league: League,
    pub venue: Option<String>,
    pub network: Option<String>,
}

impl Game {
    /// Short matchup label, e.g. `BUF @ KC`.
    pub fn matchup(&self) -> String {
        format!(
            "{} @ {}",
            self.away_team.abbreviation, self.home_team.abbreviation
        )
    }
}
