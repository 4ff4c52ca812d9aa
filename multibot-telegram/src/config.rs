//! Bot fleet configuration: a TOML document plus env overrides.
//!
//! The bot list does not fit flat env vars, so the document lives in a TOML file named by
//! `MULTIBOT_CONFIG` (or an explicit path); `TELEGRAM_API_URL` / `TELOXIDE_API_URL` and
//! `LOG_FILE` still override their file counterparts.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use multibot_core::{BotEntry, BotOptions, CommandSpec, MultibotError, RunMode};

/// Env var naming the TOML config file when [`MultiBotConfig::load`] is given no path.
pub const CONFIG_PATH_ENV: &str = "MULTIBOT_CONFIG";

/// Full fleet configuration: run mode, bot list, creation options, transport settings.
#[derive(Debug, Clone, Deserialize)]
pub struct MultiBotConfig {
    pub mode: RunMode,
    pub bots: Vec<BotEntry>,
    #[serde(default)]
    pub options: BotOptions,
    /// Custom Bot API server; TELEGRAM_API_URL / TELOXIDE_API_URL override this.
    #[serde(default)]
    pub telegram_api_url: Option<String>,
    /// Log file path for init_tracing; LOG_FILE overrides this.
    #[serde(default)]
    pub log_file: Option<String>,
}

impl MultiBotConfig {
    /// Builds a config programmatically; options and transport settings start empty.
    pub fn new(mode: RunMode, bots: Vec<BotEntry>) -> Self {
        Self {
            mode,
            bots,
            options: BotOptions::default(),
            telegram_api_url: None,
            log_file: None,
        }
    }

    /// Sets the command list applied to every bot at creation.
    pub fn with_commands(mut self, commands: Vec<CommandSpec>) -> Self {
        self.options.commands = commands;
        self
    }

    /// Parses a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Failed to parse bot fleet configuration")
    }

    /// Loads `.env`, reads the TOML file at `path` (or `$MULTIBOT_CONFIG`), then applies
    /// env overrides. Call validate() after load to fail fast before init.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = match path {
            Some(p) => p.to_path_buf(),
            None => env::var(CONFIG_PATH_ENV).map(PathBuf::from).with_context(|| {
                format!("{} not set and no config path given", CONFIG_PATH_ENV)
            })?,
        };

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml_str(&raw)?;

        if let Ok(url) = env::var("TELEGRAM_API_URL").or_else(|_| env::var("TELOXIDE_API_URL")) {
            config.telegram_api_url = Some(url);
        }
        if let Ok(log_file) = env::var("LOG_FILE") {
            config.log_file = Some(log_file);
        }

        Ok(config)
    }

    /// Validate config (telegram_api_url must be a valid URL if set). Call after load()
    /// to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Parsed custom API URL, if configured.
    pub(crate) fn parsed_api_url(&self) -> multibot_core::Result<Option<reqwest::Url>> {
        self.telegram_api_url
            .as_deref()
            .map(|s| {
                reqwest::Url::parse(s)
                    .map_err(|e| MultibotError::Client(format!("Invalid Telegram API URL {s}: {e}")))
            })
            .transpose()
    }
}
