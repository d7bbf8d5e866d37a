//! Line commands understood by the `hub_probe` driver.

use crate::engine::{Button, GameMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeCommand {
    Play(String),
    Click(usize),
    Key(String),
    Press(Button),
    Guess(String),
    Mode(GameMode),
    Favorite(String),
    Wait(u64),
    Menu,
    Theme,
    List,
    Frame,
    Help,
    Exit,
    Empty,
    /// Recognised command with bad arguments, or an unknown word.
    Invalid(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(input: &str) -> ProbeCommand {
        let trimmed = input.trim();
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let Some(cmd) = parts.first() else {
            return ProbeCommand::Empty;
        };
        let arg = parts.get(1).copied();
        let rest = trimmed[cmd.len()..].trim();

        match cmd.to_ascii_lowercase().as_str() {
            "play" | "start" => match arg {
                Some(id) => ProbeCommand::Play(id.to_string()),
                None => ProbeCommand::Invalid("usage: play <game-id>".to_string()),
            },
            "click" => match arg.map(str::parse::<usize>) {
                Some(Ok(cell)) => ProbeCommand::Click(cell),
                _ => ProbeCommand::Invalid("usage: click <cell-index>".to_string()),
            },
            "key" => match arg {
                Some(key) => ProbeCommand::Key(key.to_string()),
                None => ProbeCommand::Invalid("usage: key <name>".to_string()),
            },
            "press" => match arg.map(str::parse::<Button>) {
                Some(Ok(button)) => ProbeCommand::Press(button),
                Some(Err(e)) => ProbeCommand::Invalid(e),
                None => ProbeCommand::Invalid("usage: press <button>".to_string()),
            },
            // everything after the verb is the guess, so bad input reaches the game
            "guess" => ProbeCommand::Guess(rest.to_string()),
            "mode" => match arg.map(str::parse::<GameMode>) {
                Some(Ok(mode)) => ProbeCommand::Mode(mode),
                Some(Err(e)) => ProbeCommand::Invalid(e),
                None => ProbeCommand::Invalid("usage: mode <single|two-player|vs-computer>".to_string()),
            },
            "fav" | "favorite" => match arg {
                Some(id) => ProbeCommand::Favorite(id.to_string()),
                None => ProbeCommand::Invalid("usage: fav <game-id>".to_string()),
            },
            "wait" => match arg.map(str::parse::<u64>) {
                Some(Ok(ms)) => ProbeCommand::Wait(ms),
                _ => ProbeCommand::Invalid("usage: wait <millis>".to_string()),
            },
            "menu" | "back" => ProbeCommand::Menu,
            "theme" => ProbeCommand::Theme,
            "list" | "ls" => ProbeCommand::List,
            "frame" | "show" => ProbeCommand::Frame,
            "help" | "?" => ProbeCommand::Help,
            "exit" | "quit" => ProbeCommand::Exit,
            other => ProbeCommand::Invalid(format!("unknown command `{other}`")),
        }
    }
}
