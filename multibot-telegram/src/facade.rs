//! MultiBot facade: validate, connect, and answer lookups.

use std::sync::Arc;

use multibot_core::{
    initialize_connections, validate, BotClient, BotFactory, BotRegistry, MultibotError, Result,
    RunMode,
};
use tracing::info;

use crate::bot_adapter::TelegramFactory;
use crate::config::MultiBotConfig;

/// Single entry point: owns the registry and the client factory, drives validation and
/// connection initialization, and exposes the lookup accessors. Each instance holds its own
/// registry; reconfiguring replaces the full client set.
pub struct MultiBot {
    config: MultiBotConfig,
    registry: Arc<BotRegistry>,
    factory: Arc<dyn BotFactory>,
}

impl std::fmt::Debug for MultiBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiBot")
            .field("mode", &self.config.mode)
            .field("bots", &self.config.bots.len())
            .finish_non_exhaustive()
    }
}

impl MultiBot {
    /// Validates the configuration and connects the qualifying bots via teloxide.
    pub async fn configure(config: MultiBotConfig) -> Result<Self> {
        let api_url = config.parsed_api_url()?;
        let factory = Arc::new(TelegramFactory::new(api_url));
        Self::configure_with(config, factory).await
    }

    /// Same as [`MultiBot::configure`] with an injected client factory. Tests substitute
    /// mock factories here.
    pub async fn configure_with(
        config: MultiBotConfig,
        factory: Arc<dyn BotFactory>,
    ) -> Result<Self> {
        let registry = Arc::new(BotRegistry::new());
        apply(&registry, factory.as_ref(), &config).await?;
        info!(mode = %config.mode, bots = config.bots.len(), "MultiBot configured");
        Ok(Self {
            config,
            registry,
            factory,
        })
    }

    /// Re-validates and re-initializes into the same registry, fully replacing the client
    /// set (superseded clients are stopped first).
    pub async fn reconfigure(&mut self, config: MultiBotConfig) -> Result<()> {
        apply(&self.registry, self.factory.as_ref(), &config).await?;
        info!(mode = %config.mode, bots = config.bots.len(), "MultiBot reconfigured");
        self.config = config;
        Ok(())
    }

    /// Client for the given Telegram id. Available in `multi` mode only; `Ok(None)` when
    /// absent.
    pub fn bot_by_id(&self, id: i64) -> Result<Option<Arc<dyn BotClient>>> {
        self.registry.bot_by_id(id)
    }

    /// The main bot's client. Available in `one` mode only.
    pub fn main_bot(&self) -> Result<Option<Arc<dyn BotClient>>> {
        let main_id = self
            .config
            .bots
            .iter()
            .find(|bot| bot.main)
            .map(|bot| bot.id)
            .ok_or(MultibotError::NoMainBot)?;
        self.registry.main_bot(main_id)
    }

    /// Every live client in configuration order; empty before initialization.
    pub fn all_bots(&self) -> Vec<Arc<dyn BotClient>> {
        self.registry.all_bots()
    }

    /// The configured run mode.
    pub fn mode(&self) -> RunMode {
        self.config.mode
    }

    /// The owned registry, for callers that wire core components directly.
    pub fn registry(&self) -> Arc<BotRegistry> {
        Arc::clone(&self.registry)
    }
}

async fn apply(
    registry: &BotRegistry,
    factory: &dyn BotFactory,
    config: &MultiBotConfig,
) -> Result<()> {
    validate(registry, config.mode, &config.bots)?;
    initialize_connections(registry, factory, config.mode, &config.bots, &config.options).await?;
    Ok(())
}
