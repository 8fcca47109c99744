//! User settings storage

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uuid::Uuid;

use crate::models::{League, Participant};

/// Color theme
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        })
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!("unknown theme: {:?}", other)),
        }
    }
}

/// Persisted user settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    /// Display name on sent chat messages
    pub username: String,
    /// Local user id, assigned on first save
    pub user_id: Option<String>,
    pub notifications: bool,
    /// Default filter for the game list
    pub favorite_league: Option<League>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            username: "You".to_string(),
            user_id: None,
            notifications: true,
            favorite_league: None,
        }
    }
}

impl Settings {
    /// Get config directory path
    fn config_dir() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "gameday-chat", "gameday-chat")
            .context("Could not determine config directory")?;
        Ok(proj_dirs.config_dir().to_path_buf())
    }

    /// Get settings file path
    pub fn settings_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("settings.toml"))
    }

    /// Load settings from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::settings_path()?)
    }

    /// Save settings to the default location
    pub fn save(&mut self) -> Result<()> {
        self.save_to(&Self::settings_path()?)
    }

    /// Load settings from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read settings file")?;
        toml::from_str(&content).context("Failed to parse settings file")
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        self.ensure_user_id();

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, content).context("Failed to write settings file")?;

        tracing::debug!("Saved settings to {}", path.display());
        Ok(())
    }

    fn ensure_user_id(&mut self) -> &str {
        self.user_id
            .get_or_insert_with(|| Uuid::new_v4().to_string())
            .as_str()
    }

    /// Identity used when sending chat messages.
    pub fn participant(&mut self) -> Participant {
        Participant {
            user_id: self.ensure_user_id().to_string(),
            username: self.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("gameday-chat-test-{}", Uuid::new_v4()))
            .join("settings.toml")
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let settings = Settings::load_from(&temp_path()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.theme, Theme::System);
        assert_eq!(settings.username, "You");
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path();
        let mut settings = Settings {
            theme: Theme::Dark,
            username: "BillsMafia".to_string(),
            notifications: false,
            favorite_league: Some(League::NFL),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert!(settings.user_id.is_some());

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = toml::from_str("theme = \"light\"\n").unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.notifications);
        assert_eq!(settings.username, "You");
    }

    #[test]
    fn test_participant_id_is_stable() {
        let mut settings = Settings::default();
        let a = settings.participant();
        let b = settings.participant();
        assert_eq!(a, b);
        assert_eq!(a.username, "You");
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
