//! Gameday Chat - live game chat in the terminal
//!
//! Pick a game, pick a side, talk trash. Chats are local to this process.

mod chat;
mod commands;
mod config;
mod data;
mod models;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::SettingsChange;
use config::Theme;
use models::{League, Side};

#[derive(Parser)]
#[command(name = "gameday-chat")]
#[command(about = "Live game chat for sports fans", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List games
    Games {
        /// Only show one league (defaults to the favorite league in settings)
        #[arg(short, long)]
        league: Option<League>,
    },

    /// Open a game's chat
    Chat {
        /// Game ID (from `games` output)
        game_id: String,

        /// Side to chat for: home or away
        #[arg(short, long)]
        team: Option<Side>,

        /// Message to send (repeatable). Without any, reads lines from stdin.
        #[arg(short, long = "message")]
        messages: Vec<String>,
    },

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print current settings
    Show,

    /// Set the color theme: light, dark, system
    Theme { theme: Theme },

    /// Set the display name used in chats
    Username { name: String },

    /// Turn notifications on or off
    Notifications {
        #[arg(value_parser = parse_on_off)]
        enabled: Toggle,
    },

    /// Set the default league filter, or `none`
    League {
        #[arg(value_parser = parse_league_or_none)]
        league: LeagueChoice,
    },
}

/// `on` / `off` argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Toggle(bool);

/// League name or `none`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LeagueChoice(Option<League>);

fn parse_on_off(s: &str) -> Result<Toggle, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(Toggle(true)),
        "off" | "false" | "no" => Ok(Toggle(false)),
        other => Err(format!("expected on or off, got {:?}", other)),
    }
}

fn parse_league_or_none(s: &str) -> Result<LeagueChoice, String> {
    if s.trim().eq_ignore_ascii_case("none") {
        Ok(LeagueChoice(None))
    } else {
        s.parse().map(|l| LeagueChoice(Some(l)))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Games { league } => {
            commands::list_games(league)?;
        }
        Commands::Chat {
            game_id,
            team,
            messages,
        } => {
            commands::run_chat(&game_id, team, messages)?;
        }
        Commands::Settings { action } => match action {
            None | Some(SettingsAction::Show) => commands::show_settings()?,
            Some(SettingsAction::Theme { theme }) => {
                commands::update_settings(SettingsChange::Theme(theme))?
            }
            Some(SettingsAction::Username { name }) => {
                commands::update_settings(SettingsChange::Username(name))?
            }
            Some(SettingsAction::Notifications { enabled }) => {
                commands::update_settings(SettingsChange::Notifications(enabled.0))?
            }
            Some(SettingsAction::League { league }) => {
                commands::update_settings(SettingsChange::FavoriteLeague(league.0))?
            }
        },
    }

    Ok(())
}
