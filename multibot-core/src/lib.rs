//! # multibot-core
//!
//! Core of the multi-bot registry: error taxonomy, domain types, the [`BotClient`] seam,
//! [`BotRegistry`], validation, lookup, and connection initialization. Transport-agnostic;
//! the teloxide-backed client lives in multibot-telegram.

pub mod bot;
pub mod connection;
pub mod error;
pub mod logger;
pub mod lookup;
pub mod registry;
pub mod types;
pub mod validator;

#[cfg(test)]
pub(crate) mod test_support;

pub use bot::{BotClient, BotFactory};
pub use connection::initialize_connections;
pub use error::{MultibotError, Result};
pub use logger::init_tracing;
pub use lookup::{find_by_token_id, token_bot_id};
pub use registry::BotRegistry;
pub use types::{BotEntry, BotOptions, CommandSpec, RunMode};
pub use validator::validate;
