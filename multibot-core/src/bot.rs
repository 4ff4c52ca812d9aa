//! Bot client abstraction: the external protocol client behind a trait.
//!
//! [`BotClient`] is transport-agnostic; the teloxide-backed implementation lives in
//! multibot-telegram and tests substitute hand-written mocks.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::CommandSpec;

/// A live protocol-client instance bound to one credential token.
#[async_trait]
pub trait BotClient: Send + Sync + Debug {
    /// Credential token the client was built from (format `"<numeric id>:<secret>"`).
    fn token(&self) -> &str;

    /// Starts the live update listener. Resolves once the connection is confirmed.
    async fn start(&self) -> Result<()>;

    /// Stops the live update listener and releases its network resources.
    async fn stop(&self) -> Result<()>;

    /// Registers the command menu on the bot.
    async fn set_commands(&self, commands: &[CommandSpec]) -> Result<()>;
}

/// Creates [`BotClient`] instances. Implementations map to a transport; tests inject
/// factories that produce mock clients.
pub trait BotFactory: Send + Sync {
    fn create(&self, token: &str) -> Arc<dyn BotClient>;
}
