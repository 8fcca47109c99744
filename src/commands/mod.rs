//! Command implementations for the CLI

mod chat;
mod games;
mod settings;

pub use chat::run_chat;
pub use games::list_games;
pub use settings::{show_settings, update_settings, SettingsChange};
