//! Wraps teloxide::Bot and implements [`multibot_core::BotClient`]. Production code talks to
//! Telegram; tests substitute another BotClient impl through [`multibot_core::BotFactory`].

use std::sync::Arc;

use async_trait::async_trait;
use multibot_core::{token_bot_id, BotClient, BotFactory, CommandSpec, MultibotError, Result};
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

/// Thin wrapper around teloxide::Bot with a long-polling listener lifecycle.
///
/// `start` confirms the credential with `get_me` before spawning the polling task, so a
/// client only counts as live once Telegram has acknowledged it.
pub struct TelegramClient {
    token: String,
    bot: teloxide::Bot,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Creates a client for the given token, optionally against a custom Bot API server.
    pub fn new(token: &str, api_url: Option<reqwest::Url>) -> Self {
        let mut bot = teloxide::Bot::new(token.to_string());
        if let Some(url) = api_url {
            bot = bot.set_api_url(url);
        }
        Self {
            token: token.to_string(),
            bot,
            listener: Mutex::new(None),
        }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl BotClient for TelegramClient {
    fn token(&self) -> &str {
        &self.token
    }

    async fn start(&self) -> Result<()> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| MultibotError::Client(e.to_string()))?;
        info!(username = ?me.user.username, "Starting long polling");

        let bot = self.bot.clone();
        let handle = tokio::spawn(async move {
            teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
                async move {
                    // Dispatch is out of scope for the registry; incoming updates are
                    // only logged.
                    match msg.text() {
                        Some(text) => {
                            info!(
                                chat_id = msg.chat.id.0,
                                message_len = text.len(),
                                "Received message"
                            );
                        }
                        None => {
                            info!(chat_id = msg.chat.id.0, "Received non-text message");
                        }
                    }
                    Ok(())
                }
            })
            .await;
        });

        let mut listener = self.listener.lock().await;
        if let Some(previous) = listener.replace(handle) {
            previous.abort();
        }
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        if let Some(handle) = self.listener.lock().await.take() {
            handle.abort();
            info!(token_id = ?token_bot_id(&self.token), "Stopped long polling");
        }
        Ok(())
    }

    async fn set_commands(&self, commands: &[CommandSpec]) -> Result<()> {
        let commands: Vec<BotCommand> = commands
            .iter()
            .map(|c| BotCommand::new(c.command.clone(), c.description.clone()))
            .collect();
        self.bot
            .set_my_commands(commands)
            .await
            .map_err(|e| MultibotError::Client(e.to_string()))?;
        Ok(())
    }
}

/// Creates [`TelegramClient`]s that all share an optional custom Bot API URL.
pub struct TelegramFactory {
    api_url: Option<reqwest::Url>,
}

impl TelegramFactory {
    pub fn new(api_url: Option<reqwest::Url>) -> Self {
        Self { api_url }
    }
}

impl BotFactory for TelegramFactory {
    fn create(&self, token: &str) -> Arc<dyn BotClient> {
        Arc::new(TelegramClient::new(token, self.api_url.clone()))
    }
}
