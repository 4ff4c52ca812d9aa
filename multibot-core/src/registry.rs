//! Registry of the current run mode and live bot clients.
//!
//! Owned and injected rather than process-global; every facade instance holds its own, and
//! tests build fresh ones. Mode and client list live in one cell so readers never observe
//! them half-updated.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::bot::BotClient;
use crate::error::{MultibotError, Result};
use crate::lookup::find_by_token_id;
use crate::types::RunMode;

#[derive(Default)]
struct RegistryState {
    mode: Option<RunMode>,
    bots: Option<Vec<Arc<dyn BotClient>>>,
    initialized_at: Option<DateTime<Utc>>,
}

/// In-memory registry: current run mode plus the ordered list of live clients.
pub struct BotRegistry {
    state: RwLock<RegistryState>,
}

impl Default for BotRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BotRegistry {
    /// Creates an uninitialized registry (no mode, no clients).
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Current run mode, if one has been committed.
    pub fn mode(&self) -> Option<RunMode> {
        self.read().mode
    }

    /// Commits the run mode. Called by the validator after all checks pass.
    pub fn commit_mode(&self, mode: RunMode) {
        self.write().mode = Some(mode);
    }

    /// Snapshot of the current client list, if one has been committed.
    pub fn bots(&self) -> Option<Vec<Arc<dyn BotClient>>> {
        self.read().bots.clone()
    }

    /// Replaces the client list. Called by the connection initializer after every client
    /// in the pass is live.
    pub fn commit_bots(&self, bots: Vec<Arc<dyn BotClient>>) {
        let mut state = self.write();
        info!(count = bots.len(), "Committing bot list to registry");
        state.bots = Some(bots);
        state.initialized_at = Some(Utc::now());
    }

    /// When the current client list was committed.
    pub fn initialized_at(&self) -> Option<DateTime<Utc>> {
        self.read().initialized_at
    }

    /// True once both a mode and a client list have been committed.
    pub fn is_ready(&self) -> bool {
        let state = self.read();
        state.mode.is_some() && state.bots.is_some()
    }

    /// Looks up a client by Telegram id. Available in `multi` mode only; `Ok(None)` when no
    /// client's token carries the id.
    pub fn bot_by_id(&self, id: i64) -> Result<Option<Arc<dyn BotClient>>> {
        let state = self.read();
        match state.mode {
            None => return Err(MultibotError::UninitializedRegistry),
            Some(RunMode::One) => {
                return Err(MultibotError::WrongMode {
                    required: RunMode::Multi,
                })
            }
            Some(RunMode::Multi) => {}
        }
        let bots = state
            .bots
            .as_deref()
            .ok_or(MultibotError::UninitializedRegistry)?;
        Ok(find_by_token_id(bots, id))
    }

    /// Looks up the main client by its Telegram id. Available in `one` mode only.
    pub fn main_bot(&self, main_id: i64) -> Result<Option<Arc<dyn BotClient>>> {
        let state = self.read();
        match state.mode {
            None => return Err(MultibotError::UninitializedRegistry),
            Some(RunMode::Multi) => {
                return Err(MultibotError::WrongMode {
                    required: RunMode::One,
                })
            }
            Some(RunMode::One) => {}
        }
        let bots = state
            .bots
            .as_deref()
            .ok_or(MultibotError::UninitializedRegistry)?;
        Ok(find_by_token_id(bots, main_id))
    }

    /// Current client list verbatim, in commit order; empty before initialization.
    /// Mode-agnostic.
    pub fn all_bots(&self) -> Vec<Arc<dyn BotClient>> {
        self.read().bots.clone().unwrap_or_default()
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().expect("bot registry lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().expect("bot registry lock poisoned")
    }
}
