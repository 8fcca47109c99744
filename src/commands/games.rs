//! `games` command

use anyhow::Result;

use crate::config::Settings;
use crate::data::StaticCatalog;
use crate::models::{Game, League, Team};

/// One-line status, e.g. `LIVE 17-14` or `Sun 20:25 UTC`.
pub(super) fn status_line(game: &Game) -> String {
    match game.score {
        Some(score) => format!(
            "{} {}-{}",
            game.status.as_str().to_uppercase(),
            score.away,
            score.home
        ),
        None => format!(
            "{} {}",
            game.status.as_str().to_uppercase(),
            game.start_time.format("%a %b %-d %H:%M UTC")
        ),
    }
}

fn record_suffix(team: &Team) -> String {
    team.record
        .as_deref()
        .map(|r| format!(" ({})", r))
        .unwrap_or_default()
}

/// List games (prints to stdout).
pub fn list_games(league: Option<League>) -> Result<()> {
    let catalog = StaticCatalog::builtin()?;
    let league = match league {
        Some(l) => Some(l),
        None => Settings::load()?.favorite_league,
    };

    let games: Vec<&Game> = match league {
        Some(l) => catalog.games_in(l).collect(),
        None => catalog.games().iter().collect(),
    };

    println!("\nGames:");
    println!("{:-<60}", "");

    if games.is_empty() {
        println!("  (no games found)");
        return Ok(());
    }

    for game in games {
        println!("[{}] {}  {}", game.league, game.matchup(), status_line(game));
        println!("  ID: {}", game.id);
        println!(
            "  {}{} vs {}{}",
            game.away_team.name,
            record_suffix(&game.away_team),
            game.home_team.name,
            record_suffix(&game.home_team)
        );
        let mut extra = Vec::new();
        if let Some(ref venue) = game.venue {
            extra.push(venue.as_str());
        }
        if let Some(ref network) = game.network {
            extra.push(network.as_str());
        }
        if !extra.is_empty() {
            println!("  {}", extra.join(" | "));
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GameSource;

    #[test]
    fn test_status_line() {
        let catalog = StaticCatalog::builtin().unwrap();
        let live = catalog.game("1").unwrap();
        assert_eq!(status_line(&live), "LIVE 14-17");

        let scheduled = catalog.game("2").unwrap();
        assert!(status_line(&scheduled).starts_with("SCHEDULED "));
        assert!(status_line(&scheduled).ends_with("UTC"));
    }
}
