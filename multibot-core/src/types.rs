//! Domain types: run mode, per-bot entries, and command metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MultibotError;

/// Operating mode: `One` activates only the bot marked main, `Multi` activates every
/// configured bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    One,
    Multi,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunMode::One => write!(f, "one"),
            RunMode::Multi => write!(f, "multi"),
        }
    }
}

impl FromStr for RunMode {
    type Err = MultibotError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "one" => Ok(RunMode::One),
            "multi" => Ok(RunMode::Multi),
            other => Err(MultibotError::InvalidMode(other.to_string())),
        }
    }
}

/// One configured bot: Telegram id, credential token (`"<id>:<secret>"`), main flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotEntry {
    pub id: i64,
    pub token: String,
    #[serde(default)]
    pub main: bool,
}

impl BotEntry {
    pub fn new(id: i64, token: impl Into<String>, main: bool) -> Self {
        Self {
            id,
            token: token.into(),
            main,
        }
    }
}

/// A command menu item registered on newly created bots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub command: String,
    pub description: String,
}

impl CommandSpec {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
        }
    }
}

/// Options applied to every bot at creation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotOptions {
    #[serde(default)]
    pub commands: Vec<CommandSpec>,
}
