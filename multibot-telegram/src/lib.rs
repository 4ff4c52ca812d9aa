//! # multibot-telegram
//!
//! Telegram layer of the multi-bot registry: the teloxide-backed [`TelegramClient`],
//! TOML/env configuration loading, and the [`MultiBot`] facade. Registry, validation,
//! and connection logic live in multibot-core.

mod bot_adapter;
mod config;
mod facade;

pub use bot_adapter::{TelegramClient, TelegramFactory};
pub use config::{MultiBotConfig, CONFIG_PATH_ENV};
pub use facade::MultiBot;

pub use multibot_core::{
    init_tracing, BotClient, BotEntry, BotFactory, BotOptions, BotRegistry, CommandSpec,
    MultibotError, Result, RunMode,
};
