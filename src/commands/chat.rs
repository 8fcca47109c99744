//! `chat` command: a line-oriented front end for a game chat

use anyhow::Result;
use std::io::{self, BufRead, Write};

use super::games::status_line;
use crate::chat::{ChatAction, ChatError, ChatSession, SessionRegistry, SessionState};
use crate::config::Settings;
use crate::data::{GameSource, MessageSeed, StaticCatalog};
use crate::models::{ChatMessage, Game, Side};

/// Open a game's chat, optionally pick a side and send messages.
///
/// With no messages given, reads from stdin until `/quit` or EOF.
pub fn run_chat(game_id: &str, team: Option<Side>, messages: Vec<String>) -> Result<()> {
    let mut settings = Settings::load()?;
    let first_run = settings.user_id.is_none();
    let participant = settings.participant();
    if first_run {
        settings.save()?;
    }

    let catalog = StaticCatalog::builtin()?;
    let mut registry = SessionRegistry::new(catalog, participant);

    let stdin = io::stdin();
    let stdout = io::stdout();
    drive(
        &mut registry,
        game_id,
        team,
        &messages,
        stdin.lock(),
        stdout.lock(),
    )
}

fn format_message(game: &Game, msg: &ChatMessage) -> String {
    let abbr = match msg.team {
        Side::Home => &game.home_team.abbreviation,
        Side::Away => &game.away_team.abbreviation,
    };
    format!(
        "[{}] {} ({}): {}",
        msg.timestamp.format("%H:%M"),
        msg.username,
        abbr,
        msg.message
    )
}

fn print_transcript<W: Write>(session: &ChatSession, out: &mut W) -> io::Result<()> {
    let view = session.view();
    writeln!(
        out,
        "\n{} {}  [{}]",
        view.game.league,
        view.game.matchup(),
        status_line(view.game)
    )?;
    writeln!(out, "{:-<60}", "")?;
    if view.messages.is_empty() {
        writeln!(out, "(no messages)")?;
    }
    for msg in view.messages {
        writeln!(out, "{}", format_message(view.game, msg))?;
    }
    match (view.state, view.selection) {
        (SessionState::Active, Some(sel)) => {
            writeln!(out, "-- chatting for {} --", sel.team_name)?
        }
        _ => writeln!(out, "-- pick a side (home/away) to join the chat --")?,
    }
    Ok(())
}

/// Select `side` using the game's own team name and color.
fn select_side(session: &mut ChatSession, side: Side) -> Result<String, ChatError> {
    let team = match side {
        Side::Home => session.game().home_team.clone(),
        Side::Away => session.game().away_team.clone(),
    };
    session.handle(ChatAction::SelectTeam {
        team: side.as_str().to_string(),
        team_name: team.name,
        team_color: team.color,
    })?;
    Ok(session
        .selection()
        .map(|sel| sel.team_name.clone())
        .unwrap_or_default())
}

fn send<W: Write>(session: &mut ChatSession, text: &str, out: &mut W) -> io::Result<()> {
    let action = ChatAction::SendMessage {
        text: text.to_string(),
    };
    match session.handle(action) {
        Ok(()) => match session.messages().last() {
            Some(msg) => writeln!(out, "{}", format_message(session.game(), msg)),
            None => Ok(()),
        },
        Err(e) => writeln!(out, "! {}", e),
    }
}

/// Drive a registry from `input`, writing everything shown to the user to `out`.
fn drive<S, R, W>(
    registry: &mut SessionRegistry<S>,
    game_id: &str,
    team: Option<Side>,
    messages: &[String],
    input: R,
    mut out: W,
) -> Result<()>
where
    S: GameSource + MessageSeed,
    R: BufRead,
    W: Write,
{
    let mut current = game_id.to_string();
    let session = registry.open(&current)?;
    tracing::info!("Joined chat for game {}", current);
    print_transcript(session, &mut out)?;

    if let Some(side) = team {
        match select_side(session, side) {
            Ok(name) => writeln!(out, "Joined as a {} fan.", name)?,
            Err(e) => writeln!(out, "! {}", e)?,
        }
    }

    if !messages.is_empty() {
        for text in messages {
            send(session, text, &mut out)?;
        }
        return Ok(());
    }

    let mut lines = input.lines();
    loop {
        let session = registry.open(&current)?;
        match session.state() {
            SessionState::AwaitingSelection => write!(out, "home/away> ")?,
            SessionState::Active => write!(out, "> ")?,
        }
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let trimmed = line.trim();

        if trimmed.starts_with('/') {
            let mut parts = trimmed.splitn(2, char::is_whitespace);
            let command = parts.next().unwrap_or_default();
            let arg = parts.next().map(str::trim).unwrap_or_default();
            match (command, arg) {
                ("/quit", _) => break,
                ("/open", "") => writeln!(out, "! usage: /open <game id>")?,
                ("/open", next) => match registry.open(next) {
                    Ok(session) => {
                        print_transcript(session, &mut out)?;
                        // Navigating away ends the previous session.
                        if next != current {
                            registry.close(&current);
                            current = next.to_string();
                        }
                    }
                    Err(e) => writeln!(out, "! {}", e)?,
                },
                (other, _) => writeln!(out, "! unknown command: {}", other)?,
            }
            continue;
        }

        match session.state() {
            SessionState::AwaitingSelection => match trimmed.parse::<Side>() {
                Ok(side) => match select_side(session, side) {
                    Ok(name) => writeln!(out, "Joined as a {} fan.", name)?,
                    Err(e) => writeln!(out, "! {}", e)?,
                },
                Err(e) => writeln!(out, "! {}", e)?,
            },
            SessionState::Active => send(session, &line, &mut out)?,
        }
    }

    tracing::info!("Left chat for game {}", current);
    Ok(())
}
