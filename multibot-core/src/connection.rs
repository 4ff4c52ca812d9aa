//! Connection initializer: stops superseded clients, creates and starts one client per
//! qualifying entry, and commits the resulting list to the registry.

use std::sync::Arc;

use tracing::{info, warn};

use crate::bot::{BotClient, BotFactory};
use crate::error::{MultibotError, Result};
use crate::lookup::token_bot_id;
use crate::registry::BotRegistry;
use crate::types::{BotEntry, BotOptions, RunMode};

/// Creates and starts one client per qualifying entry, then commits the ordered list.
///
/// Previously committed clients are stopped before replacements are created, so at most one
/// active set exists at a time. A failure mid-pass stops the clients already created in this
/// pass and surfaces the offending bot's id wrapping the underlying cause; the registry keeps
/// its previous list until a pass succeeds. Callers must serialize concurrent passes.
pub async fn initialize_connections(
    registry: &BotRegistry,
    factory: &dyn BotFactory,
    mode: RunMode,
    bots: &[BotEntry],
    options: &BotOptions,
) -> Result<Vec<Arc<dyn BotClient>>> {
    if bots.is_empty() {
        return Err(MultibotError::InvalidBotList);
    }

    // Input list indices are kept so defensive re-validation reports the same
    // position the validator would.
    let selected: Vec<(usize, &BotEntry)> = match mode {
        RunMode::One => bots.iter().enumerate().filter(|(_, bot)| bot.main).collect(),
        RunMode::Multi => bots.iter().enumerate().collect(),
    };

    // Only reachable in `one` mode when no entry is marked main.
    if selected.is_empty() {
        return Err(MultibotError::NoMainBot);
    }

    if let Some(previous) = registry.bots() {
        for bot in &previous {
            if let Err(e) = bot.stop().await {
                warn!(
                    token_id = ?token_bot_id(bot.token()),
                    error = %e,
                    "Failed to stop superseded bot client"
                );
            }
        }
    }

    let mut created: Vec<Arc<dyn BotClient>> = Vec::with_capacity(selected.len());
    for (index, entry) in selected {
        match connect_bot(factory, index, entry, options).await {
            Ok(client) => created.push(client),
            Err(cause) => {
                rollback(&created).await;
                return Err(MultibotError::Initialization {
                    id: entry.id,
                    source: Box::new(cause),
                });
            }
        }
    }

    registry.commit_bots(created.clone());
    info!(%mode, count = created.len(), "Bot connections initialized");
    Ok(created)
}

/// Creates, starts, and applies command metadata to one client.
async fn connect_bot(
    factory: &dyn BotFactory,
    index: usize,
    entry: &BotEntry,
    options: &BotOptions,
) -> Result<Arc<dyn BotClient>> {
    // Redundant with the validator; this function may be reached without it.
    if entry.token.trim().is_empty() {
        return Err(MultibotError::InvalidToken { index });
    }
    if entry.id <= 0 {
        return Err(MultibotError::InvalidId { index });
    }

    let client = factory.create(&entry.token);
    client.start().await?;
    if !options.commands.is_empty() {
        client.set_commands(&options.commands).await?;
    }
    Ok(client)
}

/// Stops every client created earlier in a failing pass so none is left orphaned.
async fn rollback(created: &[Arc<dyn BotClient>]) {
    for bot in created {
        if let Err(e) = bot.stop().await {
            warn!(
                token_id = ?token_bot_id(bot.token()),
                error = %e,
                "Failed to stop bot client during rollback"
            );
        }
    }
}
