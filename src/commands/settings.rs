//! `settings` command

use anyhow::Result;

use crate::config::{Settings, Theme};
use crate::models::League;

/// A single settings mutation requested on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsChange {
    Theme(Theme),
    Username(String),
    Notifications(bool),
    FavoriteLeague(Option<League>),
}

impl SettingsChange {
    fn apply(self, settings: &mut Settings) {
        match self {
            SettingsChange::Theme(theme) => settings.theme = theme,
            SettingsChange::Username(name) => settings.username = name,
            SettingsChange::Notifications(on) => settings.notifications = on,
            SettingsChange::FavoriteLeague(league) => settings.favorite_league = league,
        }
    }
}

/// Print current settings.
pub fn show_settings() -> Result<()> {
    let settings = Settings::load()?;

    println!("Settings ({})", Settings::settings_path()?.display());
    println!("  theme:           {}", settings.theme);
    println!("  username:        {}", settings.username);
    println!(
        "  notifications:   {}",
        if settings.notifications { "on" } else { "off" }
    );
    println!(
        "  favorite league: {}",
        settings
            .favorite_league
            .map(|l| l.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    Ok(())
}

/// Load, change and save settings.
pub fn update_settings(change: SettingsChange) -> Result<()> {
    let mut settings = Settings::load()?;
    tracing::info!("Updating settings: {:?}", change);
    change.apply(&mut settings);
    settings.save()?;
    println!("Settings saved.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_changes() {
        let mut settings = Settings::default();
        SettingsChange::Theme(Theme::Dark).apply(&mut settings);
        SettingsChange::Username("ArrowheadFan".to_string()).apply(&mut settings);
        SettingsChange::Notifications(false).apply(&mut settings);
        SettingsChange::FavoriteLeague(Some(League::NBA)).apply(&mut settings);

        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.username, "ArrowheadFan");
        assert!(!settings.notifications);
        assert_eq!(settings.favorite_league, Some(League::NBA));

        SettingsChange::FavoriteLeague(None).apply(&mut settings);
        assert_eq!(settings.favorite_league, None);
    }
}
